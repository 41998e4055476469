//! Command-line installer used when the structured pathway fails
//!
//! Slower and less structured than the registry cmdlets, but available on
//! host configurations where the primary pathway is broken (servicing
//! stack issues, WSUS policy blocking the cmdlets, ...).

use std::process::Command;

use super::{FallbackInstaller, MechanismError, run_capture};

/// DISM-based fallback install mechanism
#[derive(Debug, Default)]
pub struct DismFallback;

impl DismFallback {
    pub fn new() -> Self {
        Self
    }
}

impl FallbackInstaller for DismFallback {
    fn run(&mut self, id: &str) -> Result<(), MechanismError> {
        let mut command = Command::new("dism");
        command.args(["/Online", "/NoRestart", "/Add-Capability"]);
        // The id travels as one argv element; no shell is involved, so ids
        // containing spaces or metacharacters need no escaping.
        command.arg(format!("/CapabilityName:{id}"));
        run_capture(command).map(|_| ())
    }
}
