use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use super::mutation::{InsertAt, InsertOperation, Mutation, MutationOperation, MutationResult, PatchOperation};
use super::ContentStore;
use crate::error::{AppError, Result};

/// In-process content store with the remote store's mutation semantics.
///
/// Used by the widget when no remote project is configured, and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<BTreeMap<String, Value>>,
    commits: Cell<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Value> {
        self.documents.borrow().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.documents.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.borrow().is_empty()
    }

    /// Number of successful `mutate` calls.
    pub fn commits(&self) -> u64 {
        self.commits.get()
    }

    fn apply(documents: &mut BTreeMap<String, Value>, mutation: Mutation) -> Result<MutationResult> {
        match mutation {
            Mutation::CreateIfNotExists(document) => {
                let id = document
                    .get("_id")
                    .and_then(Value::as_str)
                    .ok_or_else(|| AppError::Store("createIfNotExists requires a string _id".to_string()))?
                    .to_string();
                if !document.is_object() {
                    return Err(AppError::Store(format!("Document {id} is not an object")));
                }

                let operation = if documents.contains_key(&id) {
                    MutationOperation::None
                } else {
                    documents.insert(id.clone(), document);
                    MutationOperation::Create
                };
                Ok(MutationResult { id, operation })
            }
            Mutation::Patch(patch) => {
                let PatchOperation { id, set_if_missing, insert } = patch;
                let fields = documents
                    .get_mut(&id)
                    .and_then(Value::as_object_mut)
                    .ok_or_else(|| AppError::Store(format!("Document {id} not found")))?;

                for (field, default) in set_if_missing {
                    fields.entry(field).or_insert(default);
                }
                if let Some(insert) = insert {
                    apply_insert(fields, insert)?;
                }
                Ok(MutationResult {
                    id,
                    operation: MutationOperation::Update,
                })
            }
        }
    }
}

#[async_trait(?Send)]
impl ContentStore for MemoryStore {
    async fn mutate(&self, mutations: Vec<Mutation>) -> Result<Vec<MutationResult>> {
        // Work on a copy so a failing mutation leaves nothing half-applied
        let mut staged = self.documents.borrow().clone();
        let results = mutations
            .into_iter()
            .map(|mutation| Self::apply(&mut staged, mutation))
            .collect::<Result<Vec<_>>>()?;

        *self.documents.borrow_mut() = staged;
        self.commits.set(self.commits.get() + 1);
        debug!(mutations = results.len(), "memory store commit");
        Ok(results)
    }
}

fn apply_insert(fields: &mut Map<String, Value>, insert: InsertOperation) -> Result<()> {
    let InsertOperation { at, items } = insert;
    let (field, index) = parse_item_path(at.path())?;

    let array = fields
        .get_mut(field)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| AppError::Store(format!("{field} is not an array")))?;

    let len = array.len() as i64;
    let resolved = if index < 0 { len + index } else { index };

    match at {
        InsertAt::Before(_) => {
            let position = resolved.clamp(0, len) as usize;
            array.splice(position..position, items);
        }
        InsertAt::After(_) => {
            let position = (resolved + 1).clamp(0, len) as usize;
            array.splice(position..position, items);
        }
        InsertAt::Replace(_) => {
            if resolved < 0 || resolved >= len {
                return Err(AppError::Store(format!("No item at {}", at.path())));
            }
            let position = resolved as usize;
            array.splice(position..=position, items);
        }
    }
    Ok(())
}

/// Split `field[index]` into its parts.
fn parse_item_path(path: &str) -> Result<(&str, i64)> {
    let invalid = || AppError::Store(format!("Unsupported item path {path}"));

    let (field, rest) = path.split_once('[').ok_or_else(invalid)?;
    let index = rest.strip_suffix(']').ok_or_else(invalid)?;
    if field.is_empty() {
        return Err(invalid());
    }
    let index = index.trim().parse::<i64>().map_err(|_| invalid())?;
    Ok((field, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ContentStore;
    use serde_json::json;

    fn after_last() -> InsertAt {
        InsertAt::After("transactions[-1]".to_string())
    }

    #[tokio::test]
    async fn test_create_if_not_exists_is_idempotent() {
        let store = MemoryStore::new();
        assert!(store.create_if_not_exists(json!({ "_id": "a", "n": 1 })).await.unwrap());
        assert!(!store.create_if_not_exists(json!({ "_id": "a", "n": 2 })).await.unwrap());

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap()["n"], 1);
    }

    #[tokio::test]
    async fn test_create_requires_id() {
        let store = MemoryStore::new();
        let err = store.create_if_not_exists(json!({ "n": 1 })).await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_patch_missing_document_fails() {
        let store = MemoryStore::new();
        let err = store
            .patch("ghost")
            .set_if_missing("transactions", json!([]))
            .commit()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[tokio::test]
    async fn test_set_if_missing_keeps_existing() {
        let store = MemoryStore::new();
        store
            .create_if_not_exists(json!({ "_id": "a", "transactions": ["x"] }))
            .await
            .unwrap();
        store
            .patch("a")
            .set_if_missing("transactions", json!([]))
            .set_if_missing("userName", json!("Unnamed"))
            .commit()
            .await
            .unwrap();

        let doc = store.get("a").unwrap();
        assert_eq!(doc["transactions"], json!(["x"]));
        assert_eq!(doc["userName"], "Unnamed");
    }

    #[tokio::test]
    async fn test_insert_after_last_appends() {
        let store = MemoryStore::new();
        store.create_if_not_exists(json!({ "_id": "a" })).await.unwrap();

        for item in ["first", "second"] {
            store
                .patch("a")
                .set_if_missing("transactions", json!([]))
                .insert(after_last(), vec![json!(item)])
                .commit()
                .await
                .unwrap();
        }

        assert_eq!(store.get("a").unwrap()["transactions"], json!(["first", "second"]));
    }

    #[tokio::test]
    async fn test_insert_before_and_replace() {
        let store = MemoryStore::new();
        store.create_if_not_exists(json!({ "_id": "a", "list": [1, 2, 3] })).await.unwrap();

        store
            .patch("a")
            .insert(InsertAt::Before("list[0]".to_string()), vec![json!(0)])
            .commit()
            .await
            .unwrap();
        store
            .patch("a")
            .insert(InsertAt::Replace("list[-1]".to_string()), vec![json!(9)])
            .commit()
            .await
            .unwrap();

        assert_eq!(store.get("a").unwrap()["list"], json!([0, 1, 2, 9]));
    }

    #[tokio::test]
    async fn test_failed_commit_is_not_applied() {
        let store = MemoryStore::new();
        let result = store
            .mutate(vec![
                Mutation::CreateIfNotExists(json!({ "_id": "a" })),
                Mutation::Patch(PatchOperation::new("missing")),
            ])
            .await;

        assert!(result.is_err());
        assert!(store.get("a").is_none());
        assert_eq!(store.commits(), 0);
    }

    #[test]
    fn test_parse_item_path() {
        assert_eq!(parse_item_path("transactions[-1]").unwrap(), ("transactions", -1));
        assert_eq!(parse_item_path("list[2]").unwrap(), ("list", 2));
        assert!(parse_item_path("list").is_err());
        assert!(parse_item_path("[0]").is_err());
        assert!(parse_item_path("list[x]").is_err());
    }
}
