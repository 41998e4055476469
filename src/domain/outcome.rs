//! Install outcomes and batch reports

use serde::Serialize;

/// Which install pathway produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mechanism {
    Primary,
    Fallback,
    None,
}

/// Result classification for one install attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstallResult {
    Succeeded,
    FailedPrimary,
    FailedFallback,
    AlreadyInstalled,
}

impl InstallResult {
    /// Whether the capability ended up present on the host
    pub fn is_success(self) -> bool {
        matches!(
            self,
            InstallResult::Succeeded | InstallResult::AlreadyInstalled
        )
    }
}

/// Immutable record of a single install attempt.
///
/// Failures are data, not errors: a failed install is reported through
/// `result` and `error_detail` so batch processing continues
/// deterministically without exception handling per item.
#[derive(Debug, Clone, Serialize)]
pub struct InstallOutcome {
    pub capability_id: String,
    pub result: InstallResult,
    pub mechanism_used: Mechanism,
    /// Verbatim error text from the failing mechanism, never summarized
    pub error_detail: Option<String>,
}

impl InstallOutcome {
    pub fn succeeded(capability_id: impl Into<String>, mechanism: Mechanism) -> Self {
        Self {
            capability_id: capability_id.into(),
            result: InstallResult::Succeeded,
            mechanism_used: mechanism,
            error_detail: None,
        }
    }

    pub fn already_installed(capability_id: impl Into<String>) -> Self {
        Self {
            capability_id: capability_id.into(),
            result: InstallResult::AlreadyInstalled,
            mechanism_used: Mechanism::None,
            error_detail: None,
        }
    }

    pub fn failed(
        capability_id: impl Into<String>,
        result: InstallResult,
        mechanism: Mechanism,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            capability_id: capability_id.into(),
            result,
            mechanism_used: mechanism,
            error_detail: Some(detail.into()),
        }
    }
}

/// Aggregate result of a batch install run.
///
/// Outcomes are appended in snapshot order; the report always covers the
/// whole batch because one failed item never aborts the run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<InstallOutcome>,
}

impl BatchReport {
    /// Record one outcome and update the counters
    pub fn record(&mut self, outcome: InstallOutcome) {
        self.attempted += 1;
        if outcome.result.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    /// True when the batch had no installable entries at all, as opposed
    /// to a run that attempted installs and failed them
    pub fn nothing_to_do(&self) -> bool {
        self.attempted == 0
    }
}
