//! Mutation documents in the content store's wire format.
//!
//! ```text
//! { "createIfNotExists": { "_id": "0x123", "_type": "transactions", ... } }
//! { "patch": {
//!     "id": "0xABC",
//!     "setIfMissing": { "transactions": [] },
//!     "insert": { "after": "transactions[-1]", "items": [ { "_key": ..., "_ref": ..., "_type": "reference" } ] }
//! } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One store operation. Serializes externally tagged, as the store expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation {
    /// Create the document unless one with the same `_id` exists.
    CreateIfNotExists(Value),
    Patch(PatchOperation),
}

/// Field-level changes to an existing document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchOperation {
    pub id: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub set_if_missing: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert: Option<InsertOperation>,
}

impl PatchOperation {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            set_if_missing: Map::new(),
            insert: None,
        }
    }
}

/// Array insert relative to an item path such as `transactions[-1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertOperation {
    #[serde(flatten)]
    pub at: InsertAt,
    pub items: Vec<Value>,
}

/// Where [`InsertOperation::items`] go relative to the addressed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertAt {
    Before(String),
    After(String),
    Replace(String),
}

impl InsertAt {
    pub fn path(&self) -> &str {
        match self {
            InsertAt::Before(path) | InsertAt::After(path) | InsertAt::Replace(path) => path,
        }
    }
}

/// Body of a mutate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutateRequest {
    pub mutations: Vec<Mutation>,
}

/// What the store did for one mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationOperation {
    Create,
    Update,
    Delete,
    /// Nothing changed, e.g. `createIfNotExists` on an existing document.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResult {
    pub id: String,
    pub operation: MutationOperation,
}

/// Response of a mutate request made with `returnIds=true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutateResponse {
    pub transaction_id: String,
    #[serde(default)]
    pub results: Vec<MutationResult>,
}
