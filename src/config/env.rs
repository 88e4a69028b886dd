use std::ffi::OsString;

use super::schema::Config;
use crate::utils::paths::expand_path_with;

/// Log file override, `~` and `$VAR` are expanded
pub const LOG_FILE_VAR: &str = "BIOCTL_LOG_FILE";
/// RAID manager override
pub const RAID_TOOL_VAR: &str = "BIOCTL_RAID_TOOL";
/// Disk-encryption manager override
pub const CRYPTO_TOOL_VAR: &str = "BIOCTL_CRYPTO_TOOL";

/// Load configuration from the process environment
pub fn load_env_config() -> Config {
    load_config_from(|name| std::env::var_os(name))
}

/// Load configuration from an arbitrary variable lookup.
///
/// Unset or empty variables keep the defaults. `PATH` becomes the tool search path.
pub fn load_config_from<F>(lookup: F) -> Config
where
    F: Fn(&str) -> Option<OsString>,
{
    let text = |name: &str| {
        lookup(name)
            .and_then(|v| v.into_string().ok())
            .filter(|v| !v.is_empty())
    };

    let mut config = Config::default();

    if let Some(path) = text(LOG_FILE_VAR) {
        config.log_file = expand_path_with(&path, |var| text(var));
    }
    if let Some(tool) = text(RAID_TOOL_VAR) {
        config.raid_tool = tool;
    }
    if let Some(tool) = text(CRYPTO_TOOL_VAR) {
        config.crypto_tool = tool;
    }
    config.search_path = lookup("PATH").filter(|p| !p.is_empty());

    config
}
