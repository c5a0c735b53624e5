//! Session state management
//!
//! The controller owns the session. This context mirrors its events into signals for the
//! views and spawns the controller flows from UI events.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::{
    Config, FormData, FormField, ProviderContract, SessionController, SessionEvent, TransferPhase,
};

use crate::services::{AlertNotifier, BrowserStore, InjectedProvider, TimeoutSleeper};

type BrowserContract = ProviderContract<Option<InjectedProvider>, TimeoutSleeper>;
pub type BrowserController = SessionController<InjectedProvider, BrowserContract, BrowserStore, AlertNotifier>;

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub account: RwSignal<Option<String>>,
    pub phase: RwSignal<TransferPhase>,
    pub form: RwSignal<FormData>,
    /// Last connection failure, shown above the form
    pub error: RwSignal<Option<String>>,
    controller: StoredValue<Rc<BrowserController>, LocalStorage>,
}

impl SessionContext {
    fn new(controller: BrowserController) -> Self {
        let context = Self {
            account: RwSignal::new(controller.current_account()),
            phase: RwSignal::new(controller.phase()),
            form: RwSignal::new(controller.form()),
            error: RwSignal::new(None),
            controller: StoredValue::new_local(Rc::new(controller)),
        };

        let Self { account, phase, form, .. } = context;
        context.controller().subscribe(move |event| match event {
            SessionEvent::AccountChanged(address) => account.set(Some(address.clone())),
            SessionEvent::PhaseChanged(next) => phase.set(next.clone()),
            SessionEvent::FormChanged(next) => form.set(next.clone()),
        });

        context
    }

    fn controller(&self) -> Rc<BrowserController> {
        self.controller.get_value()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.with(TransferPhase::is_loading)
    }

    pub fn is_busy(&self) -> bool {
        self.phase.with(TransferPhase::is_busy)
    }

    pub fn has_provider(&self) -> bool {
        self.controller().has_provider()
    }

    /// Pick up an already-authorized account. Runs once when the context is created.
    fn check_existing_connection(&self) {
        let controller = self.controller();
        let error = self.error;
        spawn_local(async move {
            if let Err(err) = controller.check_existing_connection().await {
                log::error!("Existing connection check failed: {}", err);
                error.set(Some(err.to_string()));
            }
        });
    }

    pub fn connect(&self) {
        let controller = self.controller();
        let error = self.error;
        error.set(None);
        spawn_local(async move {
            if let Err(err) = controller.connect().await {
                log::error!("Wallet connection failed: {}", err);
                error.set(Some(err.to_string()));
            }
        });
    }

    pub fn update_field(&self, field: FormField, value: String) {
        self.controller().update_form(field, value);
    }

    pub fn send(&self) {
        let controller = self.controller();
        spawn_local(async move {
            controller.send_transaction().await;
        });
    }
}

/// Build the controller from `config` and the provider found on the page.
pub fn provide_session_context(config: &Config) -> SessionContext {
    let provider = InjectedProvider::detect();
    let contract = ProviderContract::new(
        provider.clone(),
        config.contract_address.clone(),
        TimeoutSleeper,
        config.receipt_poll_interval(),
    );
    let controller = SessionController::new(
        provider,
        contract,
        BrowserStore::from_config(config),
        AlertNotifier,
    )
    .with_default_user_name(config.default_user_name.clone());

    let context = SessionContext::new(controller);
    provide_context(context);
    context.check_existing_connection();
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
