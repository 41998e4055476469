//! Configuration errors

use super::CapctlError;

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> CapctlError {
    CapctlError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> CapctlError {
    CapctlError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
