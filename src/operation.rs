//! Validated bioctl operations and the tool argument vectors they map to

use std::str::FromStr;

use crate::cli::args::Commands;
use crate::error::BioctlError;
use crate::tools::Tool;

/// Key slot action for `key-management`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOperation {
    Add,
    Remove,
}

impl FromStr for KeyOperation {
    type Err = BioctlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            _ => Err(BioctlError::usage("Unknown key management operation")),
        }
    }
}

/// A subcommand whose required arguments are all present
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create {
        device: String,
        level: String,
        disk_count: String,
        extra: Vec<String>,
    },
    Add { device: String, target: String },
    Remove { device: String, target: String },
    Status { device: String },
    Encrypt { device: String },
    Decrypt { device: String },
    Repair,
    KeyManagement { device: String, operation: KeyOperation },
}

impl TryFrom<Commands> for Operation {
    type Error = BioctlError;

    fn try_from(command: Commands) -> Result<Self, Self::Error> {
        let op = match command {
            Commands::Create { args } => {
                let mut words = args.into_iter();
                match (words.next(), words.next(), words.next()) {
                    (Some(device), Some(level), Some(disk_count)) => Self::Create {
                        device,
                        level,
                        disk_count,
                        extra: words.collect(),
                    },
                    _ => return Err(BioctlError::usage("Missing arguments for create.")),
                }
            }

            Commands::Add {
                device: Some(device),
                target: Some(target),
                ..
            } => Self::Add { device, target },
            Commands::Add { .. } => return Err(BioctlError::usage("Missing arguments for add.")),

            Commands::Remove {
                device: Some(device),
                target: Some(target),
                ..
            } => Self::Remove { device, target },
            Commands::Remove { .. } => return Err(BioctlError::usage("Missing arguments for remove.")),

            Commands::Status { device, .. } => Self::Status {
                device: device.ok_or_else(|| BioctlError::usage("Missing RAID device for status."))?,
            },
            Commands::Encrypt { device, .. } => Self::Encrypt {
                device: device.ok_or_else(|| BioctlError::usage("Missing disk for encryption."))?,
            },
            Commands::Decrypt { device, .. } => Self::Decrypt {
                device: device.ok_or_else(|| BioctlError::usage("Missing encrypted disk name."))?,
            },
            Commands::Repair { .. } => Self::Repair,

            Commands::KeyManagement {
                device: Some(device),
                operation: Some(operation),
                ..
            } => Self::KeyManagement {
                device,
                operation: operation.parse()?,
            },
            Commands::KeyManagement { .. } => {
                return Err(BioctlError::usage("Missing arguments for key management."))
            }
        };
        Ok(op)
    }
}

impl Operation {
    pub fn tool(&self) -> Tool {
        match self {
            Self::Create { .. }
            | Self::Add { .. }
            | Self::Remove { .. }
            | Self::Status { .. }
            | Self::Repair => Tool::Raid,
            Self::Encrypt { .. } | Self::Decrypt { .. } | Self::KeyManagement { .. } => Tool::Crypto,
        }
    }

    /// Arguments handed to the tool, in order
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Create {
                device,
                level,
                disk_count,
                extra,
            } => {
                let mut args = vec![
                    "--create".to_string(),
                    device.clone(),
                    format!("--level={}", level),
                    format!("--raid-devices={}", disk_count),
                ];
                args.extend(extra.iter().cloned());
                args
            }
            Self::Add { device, target } => vec!["--add".into(), device.clone(), target.clone()],
            Self::Remove { device, target } => vec!["--remove".into(), device.clone(), target.clone()],
            Self::Status { device } => vec!["--detail".into(), device.clone()],
            Self::Encrypt { device } => vec!["luksFormat".into(), device.clone()],
            Self::Decrypt { device } => vec!["luksClose".into(), device.clone()],
            Self::Repair => vec!["--assemble".into(), "--scan".into()],
            Self::KeyManagement { device, operation } => {
                let verb = match operation {
                    KeyOperation::Add => "luksAddKey",
                    KeyOperation::Remove => "luksRemoveKey",
                };
                vec![verb.into(), device.clone()]
            }
        }
    }

    /// INFO entry written before the tool runs
    pub fn action(&self) -> &'static str {
        match self {
            Self::Create { .. } => "Creating RAID array",
            Self::Add { .. } => "Adding disk to RAID array",
            Self::Remove { .. } => "Removing disk from RAID array",
            Self::Status { .. } => "Checking RAID status",
            Self::Encrypt { .. } => "Encrypting disk",
            Self::Decrypt { .. } => "Decrypting disk",
            Self::Repair => "Repairing RAID array",
            Self::KeyManagement { .. } => "Managing encryption key",
        }
    }

    /// Message reported when the tool fails
    pub fn failure(&self) -> &'static str {
        match self {
            Self::Create { .. } => "Failed to create RAID array",
            Self::Add { .. } => "Failed to add disk to RAID array",
            Self::Remove { .. } => "Failed to remove disk from RAID array",
            Self::Status { .. } => "Failed to check RAID status",
            Self::Encrypt { .. } => "Failed to encrypt disk",
            Self::Decrypt { .. } => "Failed to decrypt disk",
            Self::Repair => "Failed to repair RAID array",
            Self::KeyManagement { .. } => "Failed to manage encryption key",
        }
    }
}
