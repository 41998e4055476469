//! Error types and handling for capctl
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`query`]: Inventory query errors
//! - [`selection`]: User selection errors
//! - [`config`]: Configuration errors
//!
//! Install failures are deliberately absent from this taxonomy: they are
//! carried inside `InstallOutcome` so a batch run never aborts on one item.

pub mod config;
pub mod query;
pub mod selection;

#[allow(unused_imports)]
pub use config::{parse_failed as config_parse_failed, read_failed as config_read_failed};
#[allow(unused_imports)]
pub use query::failed as query_failed;
#[allow(unused_imports)]
pub use selection::{cancelled as selection_cancelled, invalid as invalid_selection};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for capctl operations
#[derive(Error, Diagnostic, Debug)]
pub enum CapctlError {
    // Inventory errors
    #[error("Capability query failed: {reason}")]
    #[diagnostic(
        code(capctl::query::failed),
        help("Check that the host capability tooling is available and try again")
    )]
    QueryFailed { reason: String },

    // Selection errors
    #[error("Invalid selection '{token}': enter a number between 1 and {max}")]
    #[diagnostic(code(capctl::selection::invalid))]
    InvalidSelection { token: String, max: usize },

    #[error("Selection cancelled")]
    #[diagnostic(code(capctl::selection::cancelled))]
    SelectionCancelled,

    // Preflight errors
    #[error("Administrator privileges required")]
    #[diagnostic(
        code(capctl::preflight::not_elevated),
        help("Re-run capctl from an elevated shell")
    )]
    NotElevated,

    #[error("No network connectivity")]
    #[diagnostic(
        code(capctl::preflight::no_connectivity),
        help("Capability payloads are downloaded on demand; connect to the network and retry")
    )]
    NoConnectivity,

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(capctl::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(capctl::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // IO / prompt errors
    #[error("IO error: {message}")]
    #[diagnostic(code(capctl::io::error))]
    IoError { message: String },
}

impl From<std::io::Error> for CapctlError {
    fn from(err: std::io::Error) -> Self {
        CapctlError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for CapctlError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => CapctlError::SelectionCancelled,
            other => CapctlError::IoError {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CapctlError>;
