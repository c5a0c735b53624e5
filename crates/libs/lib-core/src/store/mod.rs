//! # Content Store
//!
//! The remote content store owns the profile and transfer documents; the controller only
//! issues create and patch requests against them. [`ContentStore`] is that seam.
//!
//! ## Implementations
//!
//! - [`MemoryStore`] applies mutations in process (offline mode and tests)
//! - the browser widget posts [`MutateRequest`]s to the endpoint built by [`SanityEndpoint`]
//!
//! ## Usage
//!
//! ```rust
//! use lib_core::store::{ContentStore, InsertAt, MemoryStore};
//! use serde_json::json;
//!
//! # async fn example() -> lib_core::Result<()> {
//! let store = MemoryStore::new();
//! store.create_if_not_exists(json!({ "_id": "0xABC", "_type": "users" })).await?;
//! store
//!     .patch("0xABC")
//!     .set_if_missing("transactions", json!([]))
//!     .insert(InsertAt::After("transactions[-1]".to_string()), vec![json!({ "_key": "0x1" })])
//!     .commit()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Each `mutate` call is atomic on its own; nothing spans two calls.

mod memory;
mod mutation;
mod sanity;

pub use memory::MemoryStore;
pub use mutation::{
    InsertAt, InsertOperation, MutateRequest, MutateResponse, Mutation, MutationOperation,
    MutationResult, PatchOperation,
};
pub use sanity::SanityEndpoint;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

#[async_trait(?Send)]
pub trait ContentStore {
    /// Apply `mutations` as one commit.
    async fn mutate(&self, mutations: Vec<Mutation>) -> Result<Vec<MutationResult>>;

    /// Create `document` unless its `_id` already exists. Returns whether it was created.
    async fn create_if_not_exists(&self, document: Value) -> Result<bool> {
        let results = self.mutate(vec![Mutation::CreateIfNotExists(document)]).await?;
        Ok(results
            .iter()
            .any(|result| result.operation == MutationOperation::Create))
    }

    /// Start a patch of document `id`.
    fn patch(&self, id: &str) -> Patch<'_, Self>
    where
        Self: Sized,
    {
        Patch::new(self, id)
    }
}

/// Patch builder bound to the store it commits to.
#[must_use = "a patch does nothing until committed"]
pub struct Patch<'a, S: ?Sized> {
    store: &'a S,
    operation: PatchOperation,
}

impl<'a, S: ContentStore + ?Sized> Patch<'a, S> {
    pub fn new(store: &'a S, id: &str) -> Self {
        Self {
            store,
            operation: PatchOperation::new(id),
        }
    }

    /// Set `field` to `default` when the document lacks it.
    pub fn set_if_missing(mut self, field: &str, default: Value) -> Self {
        self.operation.set_if_missing.insert(field.to_string(), default);
        self
    }

    /// Insert `items` into the array addressed by `at`.
    pub fn insert(mut self, at: InsertAt, items: Vec<Value>) -> Self {
        self.operation.insert = Some(InsertOperation { at, items });
        self
    }

    pub fn into_mutation(self) -> Mutation {
        Mutation::Patch(self.operation)
    }

    pub async fn commit(self) -> Result<Vec<MutationResult>> {
        let store = self.store;
        store.mutate(vec![self.into_mutation()]).await
    }
}
