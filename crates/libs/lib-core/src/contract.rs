//! # Transfer Contract
//!
//! The on-chain contract records a structured event for every transfer through
//! `publishTransaction(receiver, amount, message, keyword)`. [`TransferContract`] is the
//! seam the controller calls; [`ProviderContract`] implements it by ABI-encoding the call,
//! sending it through the wallet, and polling for the receipt.
//!
//! ```text
//! publish_transaction ──eth_sendTransaction──▶ wallet ──▶ PendingTransaction { hash }
//! wait ──eth_getTransactionReceipt (poll, sleep)──▶ Confirmation { hash, block }
//! ```
//!
//! There is no timeout: a transaction that never mines keeps the wait polling.

use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::provider::{self, TransactionRequest, WalletProvider};

/// Category label attached to value transfers.
pub const TRANSFER_KEYWORD: &str = "TRANSFER";

sol! {
    /// Transfer-recording contract interface.
    interface ITransactions {
        function publishTransaction(address receiver, uint256 amount, string message, string keyword);
    }
}

/// Message stored alongside the on-chain transfer event.
pub fn transfer_message(amount: U256, to: &str) -> String {
    format!("Transferring ETH {amount} to {to}")
}

/// Contract call submitted but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    pub hash: String,
}

/// Contract call accepted into the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub hash: String,
    pub block_number: Option<String>,
}

/// Contract collaborator of the transfer flow.
#[async_trait(?Send)]
pub trait TransferContract {
    /// Submit the transfer-recording call from `from`.
    async fn publish_transaction(
        &self,
        from: &str,
        to: &str,
        amount: U256,
        message: &str,
        keyword: &str,
    ) -> Result<PendingTransaction>;

    /// Suspend until `pending` is confirmed.
    async fn wait(&self, pending: &PendingTransaction) -> Result<Confirmation>;
}

/// Suspension between confirmation polls.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// ABI calldata for `publishTransaction`.
pub fn encode_publish_transaction(to: &str, amount: U256, message: &str, keyword: &str) -> Result<Vec<u8>> {
    let receiver = Address::from_str(to)
        .map_err(|e| AppError::InvalidInput(format!("Invalid receiver address {to}: {e}")))?;

    let call = ITransactions::publishTransactionCall {
        receiver,
        amount,
        message: message.to_string(),
        keyword: keyword.to_string(),
    };
    Ok(call.abi_encode())
}

/// [`TransferContract`] over any wallet provider.
pub struct ProviderContract<P, D> {
    provider: P,
    address: String,
    sleeper: D,
    poll_interval: Duration,
}

impl<P, D> ProviderContract<P, D>
where
    P: WalletProvider,
    D: Sleeper,
{
    pub fn new(provider: P, address: impl Into<String>, sleeper: D, poll_interval: Duration) -> Self {
        Self {
            provider,
            address: address.into(),
            sleeper,
            poll_interval,
        }
    }
}

#[async_trait(?Send)]
impl<P, D> TransferContract for ProviderContract<P, D>
where
    P: WalletProvider,
    D: Sleeper,
{
    async fn publish_transaction(
        &self,
        from: &str,
        to: &str,
        amount: U256,
        message: &str,
        keyword: &str,
    ) -> Result<PendingTransaction> {
        let calldata = encode_publish_transaction(to, amount, message, keyword)?;
        let request = TransactionRequest::contract_call(from, &self.address, &calldata);
        let hash = provider::send_transaction(&self.provider, &request).await?;

        debug!(%hash, contract = %self.address, "publishTransaction submitted");
        Ok(PendingTransaction { hash })
    }

    async fn wait(&self, pending: &PendingTransaction) -> Result<Confirmation> {
        let mut polls: u64 = 0;
        loop {
            polls += 1;
            match provider::transaction_receipt(&self.provider, &pending.hash).await? {
                Some(receipt) if receipt.succeeded() => {
                    debug!(hash = %receipt.transaction_hash, polls, "transaction confirmed");
                    return Ok(Confirmation {
                        hash: receipt.transaction_hash,
                        block_number: receipt.block_number,
                    });
                }
                Some(receipt) => {
                    warn!(hash = %receipt.transaction_hash, "transaction reverted");
                    return Err(AppError::Confirmation(format!(
                        "transaction {} reverted",
                        receipt.transaction_hash
                    )));
                }
                None => self.sleeper.sleep(self.poll_interval).await,
            }
        }
    }
}
