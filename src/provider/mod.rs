//! Install mechanism collaborators
//!
//! The orchestration core talks to the host through two traits: the
//! structured capability registry ([`CapabilityProvider`], the primary
//! mechanism) and the command-line installer ([`FallbackInstaller`], used
//! when the primary pathway fails). Tests substitute scripted
//! implementations; production wires up [`host::HostProvider`] and
//! [`fallback::DismFallback`].

pub mod fallback;
pub mod host;

#[cfg(test)]
pub mod testing;

use std::process::Command;

use thiserror::Error;

use crate::domain::CapabilityRecord;

/// Error text produced by an install mechanism.
///
/// Carried verbatim into `InstallOutcome.error_detail` and user-facing
/// diagnostics; never summarized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct MechanismError(pub String);

impl MechanismError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The host's structured capability registry (primary mechanism)
pub trait CapabilityProvider {
    /// Query the full capability listing with current install states
    fn query(&self) -> Result<Vec<CapabilityRecord>, MechanismError>;

    /// Install one capability through the structured pathway
    fn add(&mut self, id: &str) -> Result<(), MechanismError>;
}

/// The command-line installer invoked when the primary pathway fails
pub trait FallbackInstaller {
    fn run(&mut self, id: &str) -> Result<(), MechanismError>;
}

/// Run a host command and capture its output, mapping spawn failures and
/// non-zero exits to a `MechanismError` carrying the tool's own text.
pub(crate) fn run_capture(mut command: Command) -> Result<String, MechanismError> {
    let program = command.get_program().to_string_lossy().to_string();
    let output = command
        .output()
        .map_err(|e| MechanismError::new(format!("failed to launch {program}: {e}")))?;

    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).to_string());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let detail = if stderr.trim().is_empty() {
        stdout.trim().to_string()
    } else {
        stderr.trim().to_string()
    };
    Err(MechanismError::new(format!(
        "{program} exited with {}: {detail}",
        output.status
    )))
}
