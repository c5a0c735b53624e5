use tracing::{error, info, warn};

use super::{Notifier, SessionController, INSTALL_WALLET_NOTICE};
use crate::contract::TransferContract;
use crate::error::{AppError, Result};
use crate::provider::{self, WalletProvider};
use crate::store::ContentStore;

impl<P, C, S, N> SessionController<P, C, S, N>
where
    P: WalletProvider,
    C: TransferContract,
    S: ContentStore,
    N: Notifier,
{
    /// Pick up an account the wallet already authorized. Run once at startup.
    ///
    /// Without a provider this shows the install notice and returns `Ok`. Provider
    /// failures are logged and surface as [`AppError::ProviderUnavailable`].
    pub async fn check_existing_connection(&self) -> Result<()> {
        let Some(provider) = self.provider.as_ref() else {
            self.notifier.notify(INSTALL_WALLET_NOTICE);
            return Ok(());
        };

        let accounts = provider::accounts(provider).await.map_err(|err| {
            error!(error = %err, "eth_accounts failed");
            AppError::ProviderUnavailable
        })?;

        match accounts.first() {
            Some(account) => {
                self.set_current_account(account);
                info!("Wallet is already connected.");
            }
            None => info!("no authorized accounts"),
        }

        self.run_profile_bootstrap().await;
        Ok(())
    }

    /// Ask the wallet for account access, opening its consent prompt.
    ///
    /// Same provider handling as [`check_existing_connection`](Self::check_existing_connection).
    pub async fn connect(&self) -> Result<()> {
        let Some(provider) = self.provider.as_ref() else {
            self.notifier.notify(INSTALL_WALLET_NOTICE);
            return Ok(());
        };

        let accounts = provider::request_accounts(provider).await.map_err(|err| {
            error!(error = %err, "eth_requestAccounts failed");
            AppError::ProviderUnavailable
        })?;

        match accounts.first() {
            Some(account) => self.set_current_account(account),
            None => warn!("wallet granted access to no accounts"),
        }

        self.run_profile_bootstrap().await;
        Ok(())
    }
}
