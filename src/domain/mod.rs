//! Capability domain types
//!
//! Contains domain objects shared by the inventory, installer and
//! display layers.

pub mod capability;
pub mod outcome;

pub use capability::{CapabilityRecord, InstallState, InventorySnapshot};
pub use outcome::{BatchReport, InstallOutcome, InstallResult, Mechanism};
