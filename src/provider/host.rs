//! Structured capability registry backed by the host's PowerShell cmdlets

use std::process::Command;

use super::{CapabilityProvider, MechanismError, run_capture};
use crate::domain::{CapabilityRecord, InstallState};

/// Lists capabilities as tab-separated "Name<TAB>State" lines. Tabs never
/// occur in capability identifiers, so no quoting layer is needed.
const QUERY_SCRIPT: &str =
    "Get-WindowsCapability -Online | ForEach-Object { \"$($_.Name)`t$($_.State)\" }";

/// Installs the capability named by the CAPCTL_CAPABILITY environment
/// variable. Passing the id out-of-band keeps it from being re-parsed by
/// PowerShell, so ids containing quotes or spaces need no escaping.
const ADD_SCRIPT: &str = "Add-WindowsCapability -Online -Name $env:CAPCTL_CAPABILITY | Out-Null";

/// Primary install mechanism: the host's capability cmdlets
#[derive(Debug, Default)]
pub struct HostProvider;

impl HostProvider {
    pub fn new() -> Self {
        Self
    }

    fn shell() -> Command {
        let mut command = Command::new("powershell");
        command.args(["-NoProfile", "-NonInteractive", "-Command"]);
        command
    }
}

impl CapabilityProvider for HostProvider {
    fn query(&self) -> Result<Vec<CapabilityRecord>, MechanismError> {
        let mut command = Self::shell();
        command.arg(QUERY_SCRIPT);
        let output = run_capture(command)?;
        Ok(parse_listing(&output))
    }

    fn add(&mut self, id: &str) -> Result<(), MechanismError> {
        let mut command = Self::shell();
        command.arg(ADD_SCRIPT);
        command.env("CAPCTL_CAPABILITY", id);
        run_capture(command).map(|_| ())
    }
}

/// Parse "Name<TAB>State" lines; malformed lines are skipped
fn parse_listing(output: &str) -> Vec<CapabilityRecord> {
    output
        .lines()
        .filter_map(|line| {
            let (id, state) = line.split_once('\t')?;
            let id = id.trim();
            if id.is_empty() {
                return None;
            }
            Some(CapabilityRecord::new(id, InstallState::parse(state)))
        })
        .collect()
}
