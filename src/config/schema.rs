use std::ffi::OsString;
use std::path::PathBuf;

/// Operation log written when no override is given
pub const DEFAULT_LOG_FILE: &str = "/var/log/bioctl_linux.log";
/// RAID manager looked up on the search path
pub const DEFAULT_RAID_TOOL: &str = "mdadm";
/// Disk-encryption manager looked up on the search path
pub const DEFAULT_CRYPTO_TOOL: &str = "cryptsetup";

/// Runtime configuration for one bioctl invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Append-only operation log
    pub log_file: PathBuf,
    /// Name or path of the RAID manager
    pub raid_tool: String,
    /// Name or path of the disk-encryption manager
    pub crypto_tool: String,
    /// Directories searched for the tools, in `PATH` syntax
    pub search_path: Option<OsString>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            raid_tool: DEFAULT_RAID_TOOL.to_string(),
            crypto_tool: DEFAULT_CRYPTO_TOOL.to_string(),
            search_path: None,
        }
    }
}
