//! Batched deletion of enumerated derived resources.

use super::enumerate::DerivedInventory;
use crate::api::TransformationApi;
use crate::error::Result;

/// Delete the inventory in contiguous batches of at most `batch_size` ids,
/// strictly one batch at a time, each requesting downstream invalidation.
/// The first failed batch aborts the rest; delete is idempotent for already
/// deleted ids, so a re-run can safely retry.
pub async fn purge_derived(
    api: &dyn TransformationApi,
    inventory: &DerivedInventory,
    batch_size: usize,
) -> Result<usize> {
    let mut batches = 0;
    for chunk in inventory.resource_ids.chunks(batch_size.max(1)) {
        api.delete_derived_resources(chunk, true).await?;
        batches += 1;
        tracing::debug!(batch = batches, size = chunk.len(), "deleted derived batch");
    }
    Ok(batches)
}
