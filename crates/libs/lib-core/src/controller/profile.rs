use serde_json::{json, Value};
use shared::dto::records::{ProfileDocument, TransferDocument, PROFILE_TRANSFERS_FIELD};
use tracing::{error, info, warn};

use super::{Notifier, SessionController};
use crate::amount::amount_value;
use crate::contract::TransferContract;
use crate::error::{AppError, Result};
use crate::provider::WalletProvider;
use crate::store::{ContentStore, InsertAt};

impl<P, C, S, N> SessionController<P, C, S, N>
where
    P: WalletProvider,
    C: TransferContract,
    S: ContentStore,
    N: Notifier,
{
    /// Run the profile bootstraps queued by account transitions.
    ///
    /// Failures are logged; the next transition to the same account retries.
    pub async fn run_profile_bootstrap(&self) {
        loop {
            let next = self.bootstrap_queue.borrow_mut().pop_front();
            let Some(account) = next else { break };

            if let Err(err) = self.bootstrap_profile(&account).await {
                error!(%account, error = %err, "profile bootstrap failed");
            }
        }
    }

    /// Create the profile of `account` unless it exists. Returns whether it was created.
    pub async fn bootstrap_profile(&self, account: &str) -> Result<bool> {
        let profile = ProfileDocument::new(account, &self.default_user_name);
        let created = self.store.create_if_not_exists(to_document(&profile)?).await?;
        if created {
            info!(%account, "profile created");
        }
        Ok(created)
    }

    /// Record a confirmed transfer and link it from the sender's profile.
    ///
    /// The record and the link are two separate commits. The link is only appended when
    /// the record is new, so saving the same hash twice leaves one reference.
    pub async fn save_transaction(&self, tx_hash: &str, amount: &str, from: &str, to: &str) -> Result<()> {
        let timestamp = lib_utils::format_time(lib_utils::now_utc());
        let transfer = TransferDocument::new(tx_hash, from, to, amount_value(amount)?, &timestamp);

        let created = self.store.create_if_not_exists(to_document(&transfer)?).await?;
        if !created {
            warn!(%tx_hash, "transfer already recorded");
            return Ok(());
        }

        let reference = serde_json::to_value(transfer.reference())
            .map_err(|e| AppError::Encoding(format!("transfer reference: {e}")))?;

        self.store
            .patch(from)
            .set_if_missing(PROFILE_TRANSFERS_FIELD, json!([]))
            .insert(InsertAt::After(format!("{PROFILE_TRANSFERS_FIELD}[-1]")), vec![reference])
            .commit()
            .await?;

        info!(%tx_hash, %from, "transfer recorded");
        Ok(())
    }
}

fn to_document<T: serde::Serialize>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| AppError::Encoding(format!("document: {e}")))
}
