use clap::{Parser, Subcommand};

/// One-line synopsis printed after every reported failure
pub const USAGE: &str =
    "Usage: bioctl {create|add|remove|status|encrypt|decrypt|repair|key-management} [options]";

const SYNOPSIS: &str = "COMMANDS:\n    \
    bioctl create <device> <level> <disk-count> [extra-args...]\n    \
    bioctl add <device> <target>\n    \
    bioctl remove <device> <target>\n    \
    bioctl status <device>\n    \
    bioctl encrypt <device>\n    \
    bioctl decrypt <device>\n    \
    bioctl repair\n    \
    bioctl key-management <device> <add|remove>";

/// Full usage banner
pub fn usage_text() -> String {
    format!("{}\n\n{}", USAGE, SYNOPSIS)
}

/// bioctl - manage mdadm RAID arrays and LUKS volumes
///
/// Each subcommand runs exactly one mdadm or cryptsetup command and records
/// the operation in the bioctl log. Must be run as root.
#[derive(Parser, Debug)]
#[command(name = "bioctl")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
#[command(after_help = "ENVIRONMENT:\n    \
    BIOCTL_LOG_FILE      Operation log (default /var/log/bioctl_linux.log)\n    \
    BIOCTL_RAID_TOOL     RAID manager (default mdadm)\n    \
    BIOCTL_CRYPTO_TOOL   Encryption manager (default cryptsetup)\n    \
    BIOCTL_TRACE         Diagnostic filter, e.g. debug")]
pub struct Cli {
    /// Print the command that would run without executing it (before the subcommand)
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

// Positionals are optional here; missing ones are reported by the dispatcher.
// Plain words past the last positional are accepted and ignored.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a RAID array (mdadm --create)
    ///
    /// Everything after `create` is taken verbatim: <device> <level> <disk-count>
    /// followed by member devices and further mdadm options.
    #[command(disable_help_flag = true)]
    Create {
        #[arg(
            value_name = "DEVICE LEVEL DISK-COUNT [EXTRA]",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },
    /// Add a disk to a RAID array (mdadm --add)
    Add {
        device: Option<String>,
        target: Option<String>,
        #[arg(hide = true)]
        surplus: Vec<String>,
    },
    /// Remove a disk from a RAID array (mdadm --remove)
    Remove {
        device: Option<String>,
        target: Option<String>,
        #[arg(hide = true)]
        surplus: Vec<String>,
    },
    /// Show RAID array details (mdadm --detail)
    Status {
        device: Option<String>,
        #[arg(hide = true)]
        surplus: Vec<String>,
    },
    /// Format a disk as LUKS (cryptsetup luksFormat)
    Encrypt {
        device: Option<String>,
        #[arg(hide = true)]
        surplus: Vec<String>,
    },
    /// Close an open LUKS mapping (cryptsetup luksClose)
    Decrypt {
        device: Option<String>,
        #[arg(hide = true)]
        surplus: Vec<String>,
    },
    /// Assemble all known arrays (mdadm --assemble --scan)
    Repair {
        #[arg(hide = true)]
        surplus: Vec<String>,
    },
    /// Add or remove a LUKS key slot (cryptsetup luksAddKey / luksRemoveKey)
    KeyManagement {
        device: Option<String>,
        /// add | remove
        operation: Option<String>,
        #[arg(hide = true)]
        surplus: Vec<String>,
    },
}

impl Cli {
    /// Parse a full command line, `argv[0]` included, without exiting on error
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}
