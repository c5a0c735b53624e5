use alloy_primitives::U256;
use tracing::{error, info, warn};

use super::{Notifier, SessionController, INSTALL_WALLET_NOTICE};
use crate::amount::parse_amount;
use crate::contract::{transfer_message, TransferContract, TRANSFER_KEYWORD};
use crate::error::{AppError, Result};
use crate::provider::{self, TransactionRequest, WalletProvider};
use crate::session::TransferPhase;
use crate::store::ContentStore;

/// Inputs of one transfer, captured from the session before the first suspension.
struct TransferInput {
    from: String,
    to: String,
    amount: String,
    amount_wei: U256,
}

impl<P, C, S, N> SessionController<P, C, S, N>
where
    P: WalletProvider,
    C: TransferContract,
    S: ContentStore,
    N: Notifier,
{
    /// Send the amount in the form to the address in the form, record the transfer
    /// on-chain, wait for confirmation, then persist it.
    ///
    /// Never returns an error: failures are logged and end in [`TransferPhase::Failed`].
    /// Ignored while another transfer is in flight.
    pub async fn send_transaction(&self) {
        if self.session.borrow().phase().is_busy() {
            warn!("transfer already in flight, ignoring send");
            return;
        }

        let Some(provider) = self.provider.as_ref() else {
            self.notifier.notify(INSTALL_WALLET_NOTICE);
            return;
        };

        let input = match self.transfer_input() {
            Ok(input) => input,
            Err(err) => {
                warn!(error = %err, "transfer rejected");
                self.set_phase(TransferPhase::Failed(err.user_message()));
                return;
            }
        };

        match self.run_transfer(provider, &input).await {
            Ok(tx_hash) => {
                info!(%tx_hash, "transfer complete");
                self.clear_form();
                self.set_phase(TransferPhase::Done { tx_hash });
            }
            Err(err) => {
                error!(error = %err, from = %input.from, to = %input.to, "transfer failed");
                self.set_phase(TransferPhase::Failed(err.user_message()));
            }
        }
    }

    fn transfer_input(&self) -> Result<TransferInput> {
        let session = self.session.borrow();
        let from = session
            .current_account()
            .ok_or_else(|| AppError::InvalidInput("Connect a wallet first".to_string()))?
            .to_string();

        let form = session.form();
        let to = form.address_to.trim().to_string();
        lib_utils::validate_not_empty(&to, "Address To").map_err(AppError::InvalidInput)?;
        let amount_wei = parse_amount(&form.amount)?;

        Ok(TransferInput {
            from,
            to,
            amount: form.amount.trim().to_string(),
            amount_wei,
        })
    }

    async fn run_transfer(&self, provider: &P, input: &TransferInput) -> Result<String> {
        self.set_phase(TransferPhase::Broadcasting);

        let transfer = TransactionRequest::value_transfer(&input.from, &input.to, input.amount_wei);
        let broadcast = provider::send_transaction(provider, &transfer).await?;
        info!(hash = %broadcast, "value transfer broadcast");

        let message = transfer_message(input.amount_wei, &input.to);
        let pending = self
            .contract
            .publish_transaction(&input.from, &input.to, input.amount_wei, &message, TRANSFER_KEYWORD)
            .await?;

        self.set_phase(TransferPhase::Confirming);
        info!(hash = %pending.hash, "Loading");
        let confirmation = self.contract.wait(&pending).await?;
        info!(hash = %confirmation.hash, "Success");

        self.set_phase(TransferPhase::Persisting);
        self.save_transaction(&confirmation.hash, &input.amount, &input.from, &input.to)
            .await?;

        Ok(confirmation.hash)
    }
}
