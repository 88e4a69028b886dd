//! Superuser check performed before anything else

use nix::unistd::geteuid;

use crate::error::BioctlError;

pub fn is_superuser() -> bool {
    geteuid().is_root()
}

/// Fail with [`BioctlError::Privilege`] unless the effective uid is 0
pub fn require_superuser() -> Result<(), BioctlError> {
    if is_superuser() {
        Ok(())
    } else {
        Err(BioctlError::Privilege)
    }
}
