//! Wire types for the admin API responses the workflow consumes.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Status sentinel the service returns for a successful update.
pub const UPDATED: &str = "updated";

/// Result of an update call. Any message other than `"updated"` is an
/// informational outcome, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResult {
    #[serde(default)]
    pub message: String,
}

impl UpdateResult {
    pub fn is_updated(&self) -> bool {
        self.message == UPDATED
    }
}

/// One cached output asset generated under the transformation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DerivedResource {
    pub id: String,
}

/// A transformation fetch response. `derived` and `next_cursor` drive
/// pagination; everything else lands in `rest`, which is the definition body
/// shown to the operator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransformationDetails {
    #[serde(default)]
    pub derived: Vec<DerivedResource>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl TransformationDetails {
    /// The definition with the derived-resource list already stripped.
    pub fn definition(&self) -> Value {
        Value::Object(self.rest.clone())
    }
}
