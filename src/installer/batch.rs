//! Batch installation across an inventory snapshot

use super::CapabilityInstaller;
use crate::domain::{BatchReport, CapabilityRecord, InstallOutcome, InventorySnapshot};

/// Drives installation across every not-installed entry of a snapshot,
/// aggregating per-item outcomes into a [`BatchReport`].
pub struct BatchInstallCoordinator<'a, 'b> {
    installer: &'a mut CapabilityInstaller<'b>,
}

impl<'a, 'b> BatchInstallCoordinator<'a, 'b> {
    pub fn new(installer: &'a mut CapabilityInstaller<'b>) -> Self {
        Self { installer }
    }

    /// Install every not-installed entry in snapshot order.
    ///
    /// Installed entries are filtered out before the loop and do not
    /// appear in the report. One failed item never aborts the run; the
    /// report covers every attempted entry. A report with `attempted == 0`
    /// means there was nothing to do.
    pub fn run_all(&mut self, snapshot: &InventorySnapshot) -> BatchReport {
        self.run_all_with(snapshot, |_, _| {})
    }

    /// Like [`run_all`](Self::run_all), invoking `observer` after each
    /// attempt so callers can drive progress display.
    pub fn run_all_with(
        &mut self,
        snapshot: &InventorySnapshot,
        mut observer: impl FnMut(&CapabilityRecord, &InstallOutcome),
    ) -> BatchReport {
        let mut report = BatchReport::default();

        // Snapshot order is a contract: reports are deterministic and
        // match the displayed listing.
        for record in snapshot.pending() {
            let outcome = self.installer.install(record);
            observer(record, &outcome);
            report.record(outcome);
        }

        report
    }
}
