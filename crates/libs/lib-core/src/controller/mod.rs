//! # Wallet Session Controller
//!
//! Owns the [`Session`] and sequences every call into the external collaborators.
//!
//! ## Architecture
//!
//! ```text
//! provider detection (construction)
//!        │
//!        ▼
//! check_existing_connection / connect ──▶ AccountChanged ──▶ profile bootstrap
//!        │
//!        ▼
//! send_transaction ──▶ wallet broadcast ──▶ contract call ──▶ wait ──▶ save_transaction
//! ```
//!
//! ## Threading
//!
//! Runs on one logical thread: flows suspend only at collaborator calls and never hold a
//! session borrow across a suspension point. All methods take `&self`, so the controller
//! can be shared behind an `Rc` by UI event handlers.
//!
//! ## Subscribers
//!
//! Presentation layers observe the session through [`SessionController::subscribe`]. Account
//! transitions also queue a profile bootstrap, which the connection flows run before they
//! return.

mod connection;
mod profile;
mod transfer;


use std::cell::RefCell;
use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::DEFAULT_USER_NAME;
use crate::contract::TransferContract;
use crate::provider::WalletProvider;
use crate::session::{FormData, FormField, Session, SessionEvent, TransferPhase};
use crate::store::ContentStore;

/// Notice shown when no wallet is injected into the page.
pub const INSTALL_WALLET_NOTICE: &str = "Please install MetaMask";

/// Blocking user notice (the browser's `alert`).
pub trait Notifier {
    fn notify(&self, message: &str);
}

type Listener = Box<dyn Fn(&SessionEvent)>;

pub struct SessionController<P, C, S, N> {
    provider: Option<P>,
    contract: C,
    store: S,
    notifier: N,
    default_user_name: String,
    session: RefCell<Session>,
    listeners: RefCell<Vec<Listener>>,
    bootstrap_queue: RefCell<VecDeque<String>>,
}

impl<P, C, S, N> SessionController<P, C, S, N>
where
    P: WalletProvider,
    C: TransferContract,
    S: ContentStore,
    N: Notifier,
{
    /// Build a controller around the provider captured at startup, if any.
    pub fn new(provider: Option<P>, contract: C, store: S, notifier: N) -> Self {
        if provider.is_some() {
            info!("wallet provider detected");
        } else {
            info!("no wallet provider detected");
        }

        Self {
            provider,
            contract,
            store,
            notifier,
            default_user_name: DEFAULT_USER_NAME.to_string(),
            session: RefCell::new(Session::new()),
            listeners: RefCell::new(Vec::new()),
            bootstrap_queue: RefCell::new(VecDeque::new()),
        }
    }

    /// Display name given to bootstrapped profiles.
    pub fn with_default_user_name(mut self, name: impl Into<String>) -> Self {
        self.default_user_name = name.into();
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn current_account(&self) -> Option<String> {
        self.session.borrow().current_account().map(str::to_string)
    }

    pub fn phase(&self) -> TransferPhase {
        self.session.borrow().phase().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.session.borrow().is_loading()
    }

    pub fn form(&self) -> FormData {
        self.session.borrow().form().clone()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Register a session observer. Listeners run synchronously, in registration order.
    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn update_form(&self, field: FormField, value: impl Into<String>) {
        let form = {
            let mut session = self.session.borrow_mut();
            session.set_field(field, value.into());
            session.form().clone()
        };
        self.emit(SessionEvent::FormChanged(form));
    }

    fn clear_form(&self) {
        self.session.borrow_mut().clear_form();
        self.emit(SessionEvent::FormChanged(FormData::default()));
    }

    fn set_current_account(&self, account: &str) {
        let changed = self.session.borrow_mut().set_current_account(account);
        if !changed {
            debug!(%account, "account unchanged");
            return;
        }

        info!(%account, "current account changed");
        self.bootstrap_queue.borrow_mut().push_back(account.to_string());
        self.emit(SessionEvent::AccountChanged(account.to_string()));
    }

    fn set_phase(&self, phase: TransferPhase) {
        debug!(?phase, "transfer phase");
        self.session.borrow_mut().set_phase(phase.clone());
        self.emit(SessionEvent::PhaseChanged(phase));
    }

    fn emit(&self, event: SessionEvent) {
        for listener in self.listeners.borrow().iter() {
            listener(&event);
        }
    }
}
