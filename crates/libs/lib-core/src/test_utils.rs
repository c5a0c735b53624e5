//! Scripted collaborators for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use alloy_primitives::U256;
use async_trait::async_trait;
use serde_json::Value;

use crate::contract::{Confirmation, PendingTransaction, Sleeper, TransferContract};
use crate::controller::Notifier;
use crate::error::{AppError, Result};
use crate::provider::WalletProvider;
use crate::store::{ContentStore, MemoryStore, Mutation, MutationResult};

type Scripted = std::result::Result<Value, String>;

/// Provider answering from per-method queues. The last answer of a queue repeats.
///
/// Clones share the script and the call log.
#[derive(Clone, Default)]
pub struct MockProvider {
    responses: Rc<RefCell<HashMap<String, VecDeque<Scripted>>>>,
    calls: Rc<RefCell<Vec<(String, Option<Value>)>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, method: &str, response: Value) -> Self {
        self.push(method, Ok(response));
        self
    }

    pub fn with_failure(self, method: &str, message: &str) -> Self {
        self.push(method, Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(String, Option<Value>)> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, method: &str) -> usize {
        self.calls.borrow().iter().filter(|(m, _)| m == method).count()
    }

    fn push(&self, method: &str, response: Scripted) {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockProvider {
    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value> {
        self.calls.borrow_mut().push((method.to_string(), params));

        let mut responses = self.responses.borrow_mut();
        let queue = responses
            .get_mut(method)
            .ok_or_else(|| AppError::ProviderRequest(format!("unexpected method {method}")))?;
        let response = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };

        match response {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(AppError::ProviderRequest(message)),
            None => Err(AppError::ProviderRequest(format!("no response for {method}"))),
        }
    }
}

/// A `publishTransaction` call seen by [`MockContract`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishedCall {
    pub from: String,
    pub to: String,
    pub amount: U256,
    pub message: String,
    pub keyword: String,
}

/// Contract confirming every call with a fixed hash, unless told to fail.
#[derive(Clone)]
pub struct MockContract {
    hash: String,
    publish_error: Option<String>,
    wait_error: Option<String>,
    published: Rc<RefCell<Vec<PublishedCall>>>,
    waits: Rc<RefCell<usize>>,
}

impl MockContract {
    pub fn confirming(hash: &str) -> Self {
        Self {
            hash: hash.to_string(),
            publish_error: None,
            wait_error: None,
            published: Rc::default(),
            waits: Rc::default(),
        }
    }

    pub fn failing_publish(message: &str) -> Self {
        Self {
            publish_error: Some(message.to_string()),
            ..Self::confirming("0x0")
        }
    }

    pub fn failing_wait(message: &str) -> Self {
        Self {
            wait_error: Some(message.to_string()),
            ..Self::confirming("0x0")
        }
    }

    pub fn published(&self) -> Vec<PublishedCall> {
        self.published.borrow().clone()
    }

    pub fn waits(&self) -> usize {
        *self.waits.borrow()
    }
}

#[async_trait(?Send)]
impl TransferContract for MockContract {
    async fn publish_transaction(
        &self,
        from: &str,
        to: &str,
        amount: U256,
        message: &str,
        keyword: &str,
    ) -> Result<PendingTransaction> {
        self.published.borrow_mut().push(PublishedCall {
            from: from.to_string(),
            to: to.to_string(),
            amount,
            message: message.to_string(),
            keyword: keyword.to_string(),
        });
        if let Some(message) = &self.publish_error {
            return Err(AppError::ProviderRequest(message.clone()));
        }
        Ok(PendingTransaction { hash: self.hash.clone() })
    }

    async fn wait(&self, pending: &PendingTransaction) -> Result<Confirmation> {
        *self.waits.borrow_mut() += 1;
        if let Some(message) = &self.wait_error {
            return Err(AppError::Confirmation(message.clone()));
        }
        Ok(Confirmation {
            hash: pending.hash.clone(),
            block_number: Some("0x1".to_string()),
        })
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

/// Sleeper that returns immediately and records what it was asked for.
#[derive(Clone, Default)]
pub struct InstantSleeper {
    slept: Rc<RefCell<Vec<Duration>>>,
}

impl InstantSleeper {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}

/// [`MemoryStore`] that starts rejecting writes after `accepted` commits.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    accepted: u64,
}

impl FlakyStore {
    pub fn accepting(accepted: u64) -> Self {
        Self {
            inner: MemoryStore::new(),
            accepted,
        }
    }
}

#[async_trait(?Send)]
impl ContentStore for FlakyStore {
    async fn mutate(&self, mutations: Vec<Mutation>) -> Result<Vec<MutationResult>> {
        if self.inner.commits() >= self.accepted {
            return Err(AppError::Store("store offline".to_string()));
        }
        self.inner.mutate(mutations).await
    }
}
