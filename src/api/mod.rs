//! Admin API abstraction layer
//!
//! Narrow trait over the three remote operations the workflow needs, so tests
//! can simulate pagination, partial failures, and credential errors without a
//! live account.

pub mod client;
pub mod mock;
pub mod types;

pub use client::AdminApiClient;
pub use mock::{MockTransformationApi, MockTransformationApiBuilder};
pub use types::{DerivedResource, TransformationDetails, UpdateResult};

use crate::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Options for a transformation listing call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub max_results: Option<usize>,
    pub next_cursor: Option<String>,
}

/// The remote operations consumed by the workflow.
#[async_trait]
pub trait TransformationApi: Send + Sync {
    /// Forced replacement of a named transformation's definition. The stored
    /// definition is overwritten with `definition` exactly, never merged.
    async fn update_transformation(
        &self,
        name: &str,
        definition: &Map<String, Value>,
    ) -> Result<UpdateResult>;

    /// Fetch a transformation, optionally one page of its derived resources.
    async fn get_transformation(
        &self,
        name: &str,
        opts: &ListOptions,
    ) -> Result<TransformationDetails>;

    /// Delete derived resources by id, at most 100 per call, optionally
    /// requesting downstream cache invalidation.
    async fn delete_derived_resources(&self, ids: &[String], invalidate: bool) -> Result<()>;
}
