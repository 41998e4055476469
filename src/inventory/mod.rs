//! Capability inventory
//!
//! Fetches a point-in-time snapshot of installable capabilities from the
//! host registry, filtered by a case-insensitive substring match on the
//! capability id.

use crate::domain::InventorySnapshot;
use crate::error::{Result, query_failed};
use crate::provider::CapabilityProvider;

/// Fetch a snapshot of capabilities whose id contains `filter`
/// (case-insensitive). An empty filter matches everything.
///
/// A provider failure surfaces as `QueryFailed`; an empty snapshot is
/// returned only when the query genuinely matched nothing. Callers must
/// not conflate the two.
pub fn fetch(provider: &dyn CapabilityProvider, filter: &str) -> Result<InventorySnapshot> {
    let records = provider.query().map_err(|e| query_failed(e.0))?;

    let needle = filter.to_lowercase();
    let matching = records
        .into_iter()
        .filter(|r| needle.is_empty() || r.id.to_lowercase().contains(&needle))
        .collect();

    Ok(InventorySnapshot::new(filter, matching))
}
