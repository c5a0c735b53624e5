//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used by every flow of the wallet
//! session controller. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! Errors are categorized by the collaborator they come from:
//!
//! 1. **Provider Errors** - the injected wallet
//!    - [`ProviderAbsent`](AppError::ProviderAbsent) → no wallet injected into the page
//!    - [`ProviderRequest`](AppError::ProviderRequest) → the wallet rejected or threw (user declined, network)
//!    - [`ProviderUnavailable`](AppError::ProviderUnavailable) → generic error re-raised by the connection flow
//!
//! 2. **Chain Errors** - the contract collaborator
//!    - [`Confirmation`](AppError::Confirmation) → transaction reverted or the confirmation wait failed
//!
//! 3. **Store Errors** - the content store
//!    - [`Store`](AppError::Store) → a create or patch was rejected
//!
//! 4. **Input / Setup Errors**
//!    - [`InvalidAmount`](AppError::InvalidAmount), [`InvalidInput`](AppError::InvalidInput)
//!    - [`Config`](AppError::Config), [`Encoding`](AppError::Encoding), [`Decoding`](AppError::Decoding)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_account(account: Option<&str>) -> Result<&str> {
//!     account.ok_or_else(|| AppError::InvalidInput("No connected account".to_string()))
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type covering every failure the controller can observe.
#[derive(Debug, Error)]
pub enum AppError {
    /// No injected wallet provider was found at startup.
    #[error("No wallet provider detected")]
    ProviderAbsent,

    /// The wallet provider rejected a request or threw.
    #[error("Provider request failed: {0}")]
    ProviderRequest(String),

    /// Generic error surfaced by the connection flow after logging the cause.
    #[error("No ethereum object.")]
    ProviderUnavailable,

    /// Transfer amount is not a non-negative decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid user input (destination address, missing account).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Broadcast transaction failed on-chain or the wait rejected.
    #[error("Confirmation error: {0}")]
    Confirmation(String),

    /// Content-store write failure.
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error during startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data encoding error (ABI, JSON request bodies).
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Data decoding error (provider or store responses).
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl AppError {
    /// Get a user-friendly error message.
    ///
    /// For internal errors, returns a generic message to avoid exposing implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ProviderAbsent => "Please install MetaMask".to_string(),
            AppError::ProviderRequest(msg) => format!("Wallet request failed: {msg}"),
            AppError::ProviderUnavailable => "Wallet is unavailable".to_string(),
            AppError::InvalidAmount(msg) | AppError::InvalidInput(msg) => msg.clone(),
            AppError::Confirmation(msg) => format!("Transaction failed: {msg}"),
            AppError::Store(_) => "Transfer confirmed but the record could not be saved".to_string(),
            AppError::Config(_) | AppError::Encoding(_) | AppError::Decoding(_) => {
                "An internal error occurred".to_string()
            }
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}
