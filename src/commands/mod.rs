//! Command implementations
//!
//! Each submodule implements one CLI command. Command modules own the
//! wiring: load settings, build the host mechanisms, fetch a fresh
//! snapshot, and hand off to the orchestration core.

pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod show;
pub mod version;
