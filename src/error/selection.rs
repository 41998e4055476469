//! User selection errors

use super::CapctlError;

/// Creates an invalid selection error carrying the valid range
pub fn invalid(token: impl Into<String>, max: usize) -> CapctlError {
    CapctlError::InvalidSelection {
        token: token.into(),
        max,
    }
}

/// Creates a cancelled selection error
pub fn cancelled() -> CapctlError {
    CapctlError::SelectionCancelled
}
