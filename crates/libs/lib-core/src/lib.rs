//! # Core Library
//!
//! The wallet session controller and the collaborator seams it runs against: the injected
//! wallet provider, the transfer-recording contract, and the content store holding
//! profiles and transfer records.
//!
//! Nothing here touches the browser. The widget supplies the browser implementations of
//! [`WalletProvider`], [`ContentStore`], [`Notifier`] and [`Sleeper`].

pub mod amount;
pub mod config;
pub mod contract;
pub mod controller;
pub mod error;
pub mod provider;
pub mod session;
pub mod store;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use contract::{ProviderContract, Sleeper, TransferContract};
pub use controller::{Notifier, SessionController, INSTALL_WALLET_NOTICE};
pub use error::{AppError, Result};
pub use provider::{TransactionRequest, WalletProvider};
pub use session::{FormData, FormField, Session, SessionEvent, TransferPhase};
pub use store::{ContentStore, MemoryStore, SanityEndpoint};
