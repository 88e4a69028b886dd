//! Locating the wrapped tools on the search path

use std::ffi::OsStr;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::BioctlError;

/// The two external programs bioctl drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// RAID manager (mdadm)
    Raid,
    /// Disk-encryption manager (cryptsetup)
    Crypto,
}

/// Resolved locations of both tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub raid: PathBuf,
    pub crypto: PathBuf,
}

impl Toolchain {
    /// Resolve both configured tools, failing on the first one that is missing
    pub fn locate(config: &Config) -> Result<Self, BioctlError> {
        let search_path = config.search_path.as_deref();
        let lookup = |name: &str| {
            find_executable(name, search_path).ok_or_else(|| BioctlError::MissingTool {
                tool: name.to_string(),
            })
        };

        let toolchain = Self {
            raid: lookup(&config.raid_tool)?,
            crypto: lookup(&config.crypto_tool)?,
        };
        tracing::debug!(
            raid = %toolchain.raid.display(),
            crypto = %toolchain.crypto.display(),
            "tools resolved"
        );
        Ok(toolchain)
    }

    pub fn program(&self, tool: Tool) -> &Path {
        match tool {
            Tool::Raid => &self.raid,
            Tool::Crypto => &self.crypto,
        }
    }
}

/// Find an executable the way a shell would.
///
/// Names containing `/` are checked as given; bare names are searched in each
/// directory of `search_path`. Empty path entries are skipped.
pub fn find_executable(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    if name.contains('/') {
        let path = PathBuf::from(name);
        return is_executable(&path).then_some(path);
    }

    std::env::split_paths(search_path?)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}
