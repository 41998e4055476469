//! Inventory query errors

use super::CapctlError;

/// Creates a query failed error
pub fn failed(reason: impl Into<String>) -> CapctlError {
    CapctlError::QueryFailed {
        reason: reason.into(),
    }
}
