//! Capability installation with a primary/fallback strategy
//!
//! The installer tries the structured registry pathway first and falls
//! back to the command-line installer exactly once. Failures are data: an
//! install attempt always yields an [`InstallOutcome`], never an error, so
//! batch runs continue deterministically.

pub mod batch;

pub use batch::BatchInstallCoordinator;

use crate::domain::{CapabilityRecord, InstallOutcome, InstallResult, Mechanism};
use crate::provider::{CapabilityProvider, FallbackInstaller};

/// Installs single capabilities through the two-tier mechanism strategy
pub struct CapabilityInstaller<'a> {
    provider: &'a mut dyn CapabilityProvider,
    fallback: &'a mut dyn FallbackInstaller,
}

impl<'a> CapabilityInstaller<'a> {
    pub fn new(
        provider: &'a mut dyn CapabilityProvider,
        fallback: &'a mut dyn FallbackInstaller,
    ) -> Self {
        Self { provider, fallback }
    }

    /// Install one capability.
    ///
    /// An already-installed record returns immediately without touching
    /// either mechanism. Otherwise the primary pathway runs first; on
    /// failure the fallback runs exactly once. Error text from the failing
    /// mechanism is carried verbatim in the outcome.
    pub fn install(&mut self, record: &CapabilityRecord) -> InstallOutcome {
        if record.is_installed() {
            return InstallOutcome::already_installed(&record.id);
        }

        let primary_error = match self.provider.add(&record.id) {
            Ok(()) => return InstallOutcome::succeeded(&record.id, Mechanism::Primary),
            Err(e) => e,
        };

        match self.fallback.run(&record.id) {
            Ok(()) => InstallOutcome::succeeded(&record.id, Mechanism::Fallback),
            Err(fallback_error) => InstallOutcome::failed(
                &record.id,
                InstallResult::FailedFallback,
                Mechanism::Fallback,
                format!("primary: {primary_error}; fallback: {fallback_error}"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InstallState;
    use crate::provider::testing::{ScriptedFallback, ScriptedProvider};

    fn record(id: &str, state: InstallState) -> CapabilityRecord {
        CapabilityRecord::new(id, state)
    }

    #[test]
    fn test_installed_record_skips_both_mechanisms() {
        let mut provider = ScriptedProvider::default();
        let mut fallback = ScriptedFallback::default();
        let outcome = CapabilityInstaller::new(&mut provider, &mut fallback)
            .install(&record("Rsat.A", InstallState::Installed));

        assert_eq!(outcome.result, InstallResult::AlreadyInstalled);
        assert_eq!(outcome.mechanism_used, Mechanism::None);
        assert!(provider.add_calls.is_empty());
        assert!(fallback.calls.is_empty());
    }

    #[test]
    fn test_primary_success() {
        let mut provider = ScriptedProvider::default();
        let mut fallback = ScriptedFallback::default();
        let outcome = CapabilityInstaller::new(&mut provider, &mut fallback)
            .install(&record("Rsat.A", InstallState::NotInstalled));

        assert_eq!(outcome.result, InstallResult::Succeeded);
        assert_eq!(outcome.mechanism_used, Mechanism::Primary);
        assert!(outcome.error_detail.is_none());
        assert_eq!(provider.add_calls, vec!["Rsat.A"]);
        assert!(fallback.calls.is_empty());
    }

    #[test]
    fn test_fallback_rescues_primary_failure() {
        let mut provider = ScriptedProvider::default().fail_add("Rsat.C", "cmdlet unavailable");
        let mut fallback = ScriptedFallback::default();
        let outcome = CapabilityInstaller::new(&mut provider, &mut fallback)
            .install(&record("Rsat.C", InstallState::NotInstalled));

        assert_eq!(outcome.result, InstallResult::Succeeded);
        assert_eq!(outcome.mechanism_used, Mechanism::Fallback);
        assert_eq!(fallback.calls, vec!["Rsat.C"]);
    }

    #[test]
    fn test_both_mechanisms_failing_keeps_both_error_texts() {
        let mut provider = ScriptedProvider::default().fail_add("Rsat.D", "cmdlet unavailable");
        let mut fallback = ScriptedFallback::default().fail("Rsat.D", "Error 87: unknown option");
        let outcome = CapabilityInstaller::new(&mut provider, &mut fallback)
            .install(&record("Rsat.D", InstallState::NotInstalled));

        assert_eq!(outcome.result, InstallResult::FailedFallback);
        assert_eq!(outcome.mechanism_used, Mechanism::Fallback);
        let detail = outcome.error_detail.expect("failure must carry detail");
        assert!(detail.contains("cmdlet unavailable"));
        assert!(detail.contains("Error 87: unknown option"));
    }

    #[test]
    fn test_fallback_runs_exactly_once() {
        let mut provider = ScriptedProvider::default().fail_add("Rsat.D", "boom");
        let mut fallback = ScriptedFallback::default().fail("Rsat.D", "boom again");
        CapabilityInstaller::new(&mut provider, &mut fallback)
            .install(&record("Rsat.D", InstallState::NotInstalled));

        assert_eq!(provider.add_calls.len(), 1);
        assert_eq!(fallback.calls.len(), 1);
    }

    #[test]
    fn test_pending_state_is_retried_through_primary() {
        let mut provider = ScriptedProvider::default();
        let mut fallback = ScriptedFallback::default();
        let outcome = CapabilityInstaller::new(&mut provider, &mut fallback)
            .install(&record("Rsat.E", InstallState::InstallPending));

        assert_eq!(outcome.result, InstallResult::Succeeded);
        assert_eq!(provider.add_calls, vec!["Rsat.E"]);
    }
}
