//! The four-step maintenance workflow
//!
//! Update the named transformation, confirm the new definition, enumerate the
//! derived resources generated under the old definition, and purge them in
//! batches so they regenerate. Runs once, strictly in order, and stops at the
//! first remote failure.

pub mod enumerate;
pub mod purge;

pub use enumerate::{enumerate_derived, DerivedInventory};
pub use purge::purge_derived;

use crate::api::{ListOptions, TransformationApi};
use crate::config::WorkflowConfig;
use crate::error::Result;
use crate::interaction::UserInteraction;

/// Run the whole workflow. A non-"updated" status from the update call is
/// informational: its message is printed verbatim and the run ends without
/// touching any derived resource.
pub async fn run(
    api: &dyn TransformationApi,
    ui: &dyn UserInteraction,
    config: &WorkflowConfig,
) -> Result<()> {
    let update = api
        .update_transformation(&config.transformation_name, &config.definition)
        .await?;
    if !update.is_updated() {
        tracing::debug!(status = %update.message, "update reported a non-success status");
        ui.info(&update.message);
        return Ok(());
    }

    ui.success("Transformation updated successfully.");
    ui.info("Here is the new definition of the transformation:");

    let details = api
        .get_transformation(&config.transformation_name, &ListOptions::default())
        .await?;
    ui.info(&serde_json::to_string_pretty(&details.definition())?);

    ui.info("Now fetching and deleting derived resources.");
    let inventory =
        enumerate_derived(api, &config.transformation_name, config.page_size).await?;

    if inventory.is_empty() {
        ui.success("No derivatives found. Nothing to delete or invalidate.");
        return Ok(());
    }

    ui.success(&format!(
        "Found a total of {} assets using the named transformation",
        inventory.count
    ));
    ui.info("Invalidating resources now..");
    purge_derived(api, &inventory, config.batch_size).await?;
    ui.success("Completed deletion and invalidation of resources.");

    Ok(())
}
