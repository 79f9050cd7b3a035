//! Mock admin API for testing
//!
//! Scripted responses are consumed in call order; every call is recorded so
//! tests can assert on the exact names, options, and batches sent.

use crate::api::types::{DerivedResource, TransformationDetails, UpdateResult};
use crate::api::{ListOptions, TransformationApi};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Builder for a scripted mock API.
#[derive(Default)]
pub struct MockTransformationApiBuilder {
    update_results: VecDeque<Result<UpdateResult>>,
    get_results: VecDeque<Result<TransformationDetails>>,
    delete_results: VecDeque<Result<()>>,
}

impl MockTransformationApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_update_message(mut self, message: &str) -> Self {
        self.update_results.push_back(Ok(UpdateResult {
            message: message.to_string(),
        }));
        self
    }

    pub fn with_update_error(mut self, error: Error) -> Self {
        self.update_results.push_back(Err(error));
        self
    }

    /// Queue a full fetch response (used for the verification read).
    pub fn with_details(mut self, details: TransformationDetails) -> Self {
        self.get_results.push_back(Ok(details));
        self
    }

    /// Queue one page of derived ids, with a continuation cursor on every
    /// page except the last.
    pub fn with_derived_page(mut self, ids: &[&str], next_cursor: Option<&str>) -> Self {
        self.get_results.push_back(Ok(TransformationDetails {
            derived: ids
                .iter()
                .map(|id| DerivedResource {
                    id: (*id).to_string(),
                })
                .collect(),
            next_cursor: next_cursor.map(str::to_string),
            rest: Map::new(),
        }));
        self
    }

    pub fn with_get_error(mut self, error: Error) -> Self {
        self.get_results.push_back(Err(error));
        self
    }

    pub fn with_delete_error(mut self, error: Error) -> Self {
        self.delete_results.push_back(Err(error));
        self
    }

    pub fn build(self) -> MockTransformationApi {
        MockTransformationApi {
            update_results: Mutex::new(self.update_results),
            get_results: Mutex::new(self.get_results),
            delete_results: Mutex::new(self.delete_results),
            update_calls: Mutex::new(Vec::new()),
            get_calls: Mutex::new(Vec::new()),
            delete_calls: Mutex::new(Vec::new()),
        }
    }
}

/// Mock implementation of [`TransformationApi`].
pub struct MockTransformationApi {
    update_results: Mutex<VecDeque<Result<UpdateResult>>>,
    get_results: Mutex<VecDeque<Result<TransformationDetails>>>,
    delete_results: Mutex<VecDeque<Result<()>>>,
    update_calls: Mutex<Vec<(String, Map<String, Value>)>>,
    get_calls: Mutex<Vec<(String, ListOptions)>>,
    delete_calls: Mutex<Vec<(Vec<String>, bool)>>,
}

impl MockTransformationApi {
    pub fn builder() -> MockTransformationApiBuilder {
        MockTransformationApiBuilder::new()
    }

    /// (name, definition) pairs passed to the updater.
    pub fn update_calls(&self) -> Vec<(String, Map<String, Value>)> {
        self.update_calls.lock().unwrap().clone()
    }

    /// (name, options) pairs passed to fetches, in call order.
    pub fn get_calls(&self) -> Vec<(String, ListOptions)> {
        self.get_calls.lock().unwrap().clone()
    }

    /// (ids, invalidate) pairs passed to deletes, in call order.
    pub fn delete_batches(&self) -> Vec<(Vec<String>, bool)> {
        self.delete_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransformationApi for MockTransformationApi {
    async fn update_transformation(
        &self,
        name: &str,
        definition: &Map<String, Value>,
    ) -> Result<UpdateResult> {
        self.update_calls
            .lock()
            .unwrap()
            .push((name.to_string(), definition.clone()));
        self.update_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(UpdateResult {
                    message: "updated".to_string(),
                })
            })
    }

    async fn get_transformation(
        &self,
        name: &str,
        opts: &ListOptions,
    ) -> Result<TransformationDetails> {
        self.get_calls
            .lock()
            .unwrap()
            .push((name.to_string(), opts.clone()));
        self.get_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted get_transformation call for {name}"))
    }

    async fn delete_derived_resources(&self, ids: &[String], invalidate: bool) -> Result<()> {
        self.delete_calls
            .lock()
            .unwrap()
            .push((ids.to_vec(), invalidate));
        self.delete_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_and_replays_scripted_pages() {
        let api = MockTransformationApi::builder()
            .with_derived_page(&["a", "b"], Some("next"))
            .with_derived_page(&["c"], None)
            .build();

        let first = api
            .get_transformation("xform", &ListOptions::default())
            .await
            .unwrap();
        assert_eq!(first.derived.len(), 2);
        assert_eq!(first.next_cursor.as_deref(), Some("next"));

        let second = api
            .get_transformation("xform", &ListOptions::default())
            .await
            .unwrap();
        assert!(second.next_cursor.is_none());

        assert_eq!(api.get_calls().len(), 2);
    }

    #[tokio::test]
    async fn defaults_to_updated_and_successful_deletes() {
        let api = MockTransformationApi::builder().build();

        let result = api
            .update_transformation("xform", &Map::new())
            .await
            .unwrap();
        assert!(result.is_updated());

        api.delete_derived_resources(&["a".to_string()], true)
            .await
            .unwrap();
        assert_eq!(api.delete_batches(), vec![(vec!["a".to_string()], true)]);
    }
}
