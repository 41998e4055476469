//! Selection resolution for the interactive listing
//!
//! Maps a raw user token to an inventory entry. Tokens are 1-based
//! indices matching the displayed listing; the cancel token is checked
//! first so callers can abort silently instead of showing a range error.

use crate::domain::{CapabilityRecord, InventorySnapshot};
use crate::error::{Result, invalid_selection, selection_cancelled};

/// Default cancel token, overridable through the config file
pub const DEFAULT_CANCEL_TOKEN: &str = "c";

/// Resolve `token` against `snapshot`.
///
/// A token equal to `cancel_token` (case-insensitive) fails with
/// `SelectionCancelled`; anything that is not an integer in
/// `[1, snapshot.len()]` fails with `InvalidSelection` carrying the
/// valid range.
pub fn resolve<'a>(
    snapshot: &'a InventorySnapshot,
    token: &str,
    cancel_token: &str,
) -> Result<&'a CapabilityRecord> {
    let trimmed = token.trim();

    if trimmed.eq_ignore_ascii_case(cancel_token) {
        return Err(selection_cancelled());
    }

    trimmed
        .parse::<usize>()
        .ok()
        .and_then(|index| snapshot.get_indexed(index))
        .ok_or_else(|| invalid_selection(trimmed, snapshot.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CapabilityRecord, InstallState};
    use crate::error::CapctlError;

    fn snapshot(n: usize) -> InventorySnapshot {
        InventorySnapshot::new(
            "rsat",
            (1..=n)
                .map(|i| CapabilityRecord::new(format!("Rsat.{i}"), InstallState::NotInstalled))
                .collect(),
        )
    }

    #[test]
    fn test_resolve_valid_indices_map_one_based() {
        let snapshot = snapshot(3);
        for i in 1..=3 {
            let record = resolve(&snapshot, &i.to_string(), DEFAULT_CANCEL_TOKEN).unwrap();
            assert_eq!(record.id, format!("Rsat.{i}"));
        }
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        let snapshot = snapshot(2);
        let record = resolve(&snapshot, " 2 ", DEFAULT_CANCEL_TOKEN).unwrap();
        assert_eq!(record.id, "Rsat.2");
    }

    #[test]
    fn test_resolve_rejects_out_of_range_and_non_numeric() {
        let snapshot = snapshot(3);
        for token in ["0", "-1", "4", "abc", "", "1.5"] {
            let err = resolve(&snapshot, token, DEFAULT_CANCEL_TOKEN).unwrap_err();
            assert!(
                matches!(err, CapctlError::InvalidSelection { .. }),
                "token {token:?} should be invalid, got {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_selection_reports_valid_range() {
        let snapshot = snapshot(3);
        let err = resolve(&snapshot, "9", DEFAULT_CANCEL_TOKEN).unwrap_err();
        assert!(err.to_string().contains("between 1 and 3"));
    }

    #[test]
    fn test_cancel_token_is_case_insensitive() {
        let snapshot = snapshot(3);
        for token in ["c", "C", " c "] {
            let err = resolve(&snapshot, token, DEFAULT_CANCEL_TOKEN).unwrap_err();
            assert!(
                matches!(err, CapctlError::SelectionCancelled),
                "token {token:?} should cancel, got {err:?}"
            );
        }
    }

    #[test]
    fn test_custom_cancel_token() {
        let snapshot = snapshot(3);
        let err = resolve(&snapshot, "Q", "q").unwrap_err();
        assert!(matches!(err, CapctlError::SelectionCancelled));
        // The default token is now an ordinary invalid selection
        let err = resolve(&snapshot, "c", "q").unwrap_err();
        assert!(matches!(err, CapctlError::InvalidSelection { .. }));
    }
}
