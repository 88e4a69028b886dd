//! Error type shared by every stage of a bioctl run

use thiserror::Error;

use crate::tools::executor::exit_codes;

/// Everything that can end a bioctl run early.
///
/// Every variant maps to exit status 1. Only [`BioctlError::Privilege`] bypasses
/// the operation log and the usage banner.
#[derive(Error, Debug)]
pub enum BioctlError {
    #[error("You must be root to run this program.")]
    Privilege,

    #[error("Required command {tool} not found.")]
    MissingTool { tool: String },

    #[error("{0}")]
    Usage(String),

    #[error("{message} ({detail})")]
    ToolFailed {
        message: &'static str,
        detail: String,
    },
}

impl BioctlError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Whether the failure is recorded in the operation log and followed by usage text
    pub fn is_reported(&self) -> bool {
        !matches!(self, Self::Privilege)
    }

    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}
