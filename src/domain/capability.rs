//! Capability records and inventory snapshots

use serde::Serialize;

/// Install state of a capability as reported by the host registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstallState {
    NotInstalled,
    Installed,
    InstallPending,
    Failed,
}

impl InstallState {
    /// Parse a state string from host tooling output.
    ///
    /// Matches case-insensitively and ignores embedded whitespace, so both
    /// "InstallPending" and "Install Pending" map to the same variant. An
    /// unrecognized state is treated as `NotInstalled` so the entry stays
    /// installable rather than silently disappearing from batch runs.
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "installed" => InstallState::Installed,
            "installpending" => InstallState::InstallPending,
            "failed" => InstallState::Failed,
            _ => InstallState::NotInstalled,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InstallState::NotInstalled => "not installed",
            InstallState::Installed => "installed",
            InstallState::InstallPending => "install pending",
            InstallState::Failed => "failed",
        }
    }
}

/// One installable capability as reported by the host registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityRecord {
    /// Stable capability identifier (e.g. "Rsat.DHCP.Tools~~~~0.0.1.0")
    pub id: String,
    /// Human-readable name derived from the identifier
    pub display_name: String,
    pub state: InstallState,
}

impl CapabilityRecord {
    pub fn new(id: impl Into<String>, state: InstallState) -> Self {
        let id = id.into();
        let display_name = display_name_for(&id);
        Self {
            id,
            display_name,
            state,
        }
    }

    pub fn is_installed(&self) -> bool {
        self.state == InstallState::Installed
    }
}

/// Derive a display name from a capability identifier.
///
/// Host identifiers carry a version suffix after the first '~'; the part
/// before it is the readable name.
fn display_name_for(id: &str) -> String {
    id.split('~').next().unwrap_or(id).to_string()
}

/// A point-in-time, ordered listing of capabilities matching a filter.
///
/// Built once per inventory fetch and discarded after the operation using
/// it completes; install state can change between commands, so snapshots
/// are never cached.
#[derive(Debug, Clone, Serialize)]
pub struct InventorySnapshot {
    /// The filter pattern this snapshot was fetched with
    pub filter: String,
    records: Vec<CapabilityRecord>,
}

impl InventorySnapshot {
    pub fn new(filter: impl Into<String>, records: Vec<CapabilityRecord>) -> Self {
        Self {
            filter: filter.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CapabilityRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CapabilityRecord> {
        self.records.iter()
    }

    /// Look up an entry by its 1-based listing index
    pub fn get_indexed(&self, index: usize) -> Option<&CapabilityRecord> {
        index.checked_sub(1).and_then(|i| self.records.get(i))
    }

    /// Entries that are candidates for installation (state != Installed)
    pub fn pending(&self) -> Vec<&CapabilityRecord> {
        self.records.iter().filter(|r| !r.is_installed()).collect()
    }
}
