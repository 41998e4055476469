//! Terminal rendering for snapshots, outcomes and reports

pub mod display;

pub use display::{render_outcome, render_record_detailed, render_report, render_snapshot};
