//! # Wallet Provider Seam
//!
//! The injected wallet exposes a single EIP-1193 entry point, `request({ method, params })`.
//! [`WalletProvider`] mirrors it so the controller can run against the browser's
//! `window.ethereum` or a scripted double. The typed helpers below wrap the methods the
//! widget uses and decode their results.
//!
//! | Method | Params | Result |
//! |---|---|---|
//! | `eth_accounts` | none | authorized accounts, non-interactive |
//! | `eth_requestAccounts` | none | accounts after the wallet's consent prompt |
//! | `eth_sendTransaction` | `[{from, to, gas, value, data}]` | transaction hash |
//! | `eth_getTransactionReceipt` | `[hash]` | receipt, or null while pending |

use alloy_primitives::U256;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::amount::to_quantity;
use crate::error::{AppError, Result};

pub const ETH_ACCOUNTS: &str = "eth_accounts";
pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";
pub const ETH_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";

/// Gas ceiling attached to native value transfers.
pub const TRANSFER_GAS_LIMIT: u64 = 520_000;

/// EIP-1193 request interface of an injected wallet.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Send one request. Rejections (user declined, RPC failure) map to
    /// [`AppError::ProviderRequest`].
    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value>;
}

/// An absent provider fails every request, so collaborators built over it
/// can exist before detection resolves.
#[async_trait(?Send)]
impl<P: WalletProvider> WalletProvider for Option<P> {
    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value> {
        match self {
            Some(provider) => provider.request(method, params).await,
            None => Err(AppError::ProviderAbsent),
        }
    }
}

/// Parameters of `eth_sendTransaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl TransactionRequest {
    /// Native value transfer capped at [`TRANSFER_GAS_LIMIT`].
    pub fn value_transfer(from: &str, to: &str, value: U256) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            gas: Some(to_quantity(U256::from(TRANSFER_GAS_LIMIT))),
            value: Some(to_quantity(value)),
            data: None,
        }
    }

    /// Contract call carrying ABI-encoded `calldata`. Gas is left to the wallet's estimate.
    pub fn contract_call(from: &str, contract: &str, calldata: &[u8]) -> Self {
        Self {
            from: from.to_string(),
            to: contract.to_string(),
            gas: None,
            value: None,
            data: Some(format!("0x{}", alloy_primitives::hex::encode(calldata))),
        }
    }
}

/// Subset of a transaction receipt the confirmation wait reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub block_number: Option<String>,
    /// `0x1` success, `0x0` reverted. Pre-Byzantium receipts carry none.
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    pub fn succeeded(&self) -> bool {
        self.status.as_deref().map_or(true, |status| status != "0x0")
    }
}

/// Accounts already authorized for this origin. Never prompts.
pub async fn accounts<P: WalletProvider + ?Sized>(provider: &P) -> Result<Vec<String>> {
    let result = provider.request(ETH_ACCOUNTS, None).await?;
    decode_accounts(result)
}

/// Ask the wallet to authorize accounts, opening its consent prompt.
pub async fn request_accounts<P: WalletProvider + ?Sized>(provider: &P) -> Result<Vec<String>> {
    let result = provider.request(ETH_REQUEST_ACCOUNTS, None).await?;
    decode_accounts(result)
}

/// Broadcast a transaction through the wallet, returning its hash.
pub async fn send_transaction<P: WalletProvider + ?Sized>(
    provider: &P,
    transaction: &TransactionRequest,
) -> Result<String> {
    let params = json!([serde_json::to_value(transaction)
        .map_err(|e| AppError::Encoding(format!("transaction request: {e}")))?]);
    let result = provider.request(ETH_SEND_TRANSACTION, Some(params)).await?;
    result
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::Decoding(format!("expected a transaction hash, got {result}")))
}

/// Receipt of a mined transaction, `None` while it is still pending.
pub async fn transaction_receipt<P: WalletProvider + ?Sized>(
    provider: &P,
    hash: &str,
) -> Result<Option<TransactionReceipt>> {
    let result = provider
        .request(ETH_GET_TRANSACTION_RECEIPT, Some(json!([hash])))
        .await?;
    if result.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(result)?))
}

fn decode_accounts(result: Value) -> Result<Vec<String>> {
    serde_json::from_value(result).map_err(|e| AppError::Decoding(format!("account list: {e}")))
}
