//! Cursor-driven enumeration of a transformation's derived resources.

use crate::api::{ListOptions, TransformationApi};
use crate::error::Result;

/// Everything found under the transformation: a count and the ids in
/// discovery order. Invariant: `count == resource_ids.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedInventory {
    pub count: usize,
    pub resource_ids: Vec<String>,
}

impl DerivedInventory {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Follow the continuation cursor until the service stops returning one,
/// folding each page into the inventory. Zero derivatives is a valid result.
/// A failed page fetch discards the partial accumulation and propagates.
pub async fn enumerate_derived(
    api: &dyn TransformationApi,
    name: &str,
    page_size: usize,
) -> Result<DerivedInventory> {
    let mut inventory = DerivedInventory::default();
    let mut cursor: Option<String> = None;

    loop {
        let opts = ListOptions {
            max_results: Some(page_size),
            next_cursor: cursor.take(),
        };
        let page = api.get_transformation(name, &opts).await?;

        inventory.count += page.derived.len();
        inventory
            .resource_ids
            .extend(page.derived.into_iter().map(|d| d.id));
        tracing::debug!(
            total = inventory.count,
            has_more = page.next_cursor.is_some(),
            "fetched derived resource page"
        );

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTransformationApi;
    use crate::error::Error;

    #[tokio::test]
    async fn concatenates_pages_in_order() {
        let api = MockTransformationApi::builder()
            .with_derived_page(&["a", "b", "c"], Some("c1"))
            .with_derived_page(&["d", "e"], Some("c2"))
            .with_derived_page(&["f"], None)
            .build();

        let inventory = enumerate_derived(&api, "auto-400-xform", 500).await.unwrap();

        assert_eq!(inventory.count, 6);
        assert_eq!(inventory.resource_ids, vec!["a", "b", "c", "d", "e", "f"]);
        assert_eq!(inventory.count, inventory.resource_ids.len());
    }

    #[tokio::test]
    async fn passes_page_size_and_threads_the_cursor() {
        let api = MockTransformationApi::builder()
            .with_derived_page(&["a"], Some("cursor-1"))
            .with_derived_page(&["b"], None)
            .build();

        enumerate_derived(&api, "auto-400-xform", 500).await.unwrap();

        let calls = api.get_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1.max_results, Some(500));
        assert_eq!(calls[0].1.next_cursor, None);
        assert_eq!(calls[1].1.next_cursor.as_deref(), Some("cursor-1"));
    }

    #[tokio::test]
    async fn zero_derivatives_is_a_valid_terminal_state() {
        let api = MockTransformationApi::builder()
            .with_derived_page(&[], None)
            .build();

        let inventory = enumerate_derived(&api, "auto-400-xform", 500).await.unwrap();

        assert!(inventory.is_empty());
        assert_eq!(inventory, DerivedInventory::default());
    }

    #[tokio::test]
    async fn page_failure_discards_partial_results() {
        let api = MockTransformationApi::builder()
            .with_derived_page(&["a"], Some("c1"))
            .with_get_error(Error::Api {
                http_code: 500,
                message: "server melted".to_string(),
            })
            .build();

        let err = enumerate_derived(&api, "auto-400-xform", 500)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "500: server melted");
    }
}
