//! # Application Configuration
//!
//! Configuration of the external collaborators: the transfer contract address, the
//! content-store project, and receipt polling. The controller never reads configuration
//! itself, the embedding application builds a [`Config`] once and passes values in.
//!
//! Native callers use [`Config::from_env`]. The browser build has no environment at run
//! time, so it bakes values in at compile time and hands them to [`Config::from_lookup`]:
//!
//! ```rust
//! use lib_core::config::Config;
//!
//! let config = Config::from_lookup(|key| match key {
//!     "CONTRACT_ADDRESS" => Some("0x5c3a1F0b0B6e8a6C8a3b2C7d1E4f5a6b7c8d9f21".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.sanity_dataset, "production");
//! assert!(config.sanity_project_id.is_none());
//! ```

use std::time::Duration;

use lib_utils::{get_env_opt, validate_eth_address};

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "v2021-06-07";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 4_000;
pub const DEFAULT_USER_NAME: &str = "Unnamed";

/// Collaborator configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address of the deployed transfer-recording contract
    pub contract_address: String,

    /// Content-store project. When unset, records stay in memory.
    pub sanity_project_id: Option<String>,

    /// Content-store dataset name
    pub sanity_dataset: String,

    /// Content-store API version, dated (`vYYYY-MM-DD`)
    pub sanity_api_version: String,

    /// Write token for the content store
    pub sanity_token: Option<String>,

    /// Pause between transaction receipt polls, in milliseconds
    ///
    /// Valid range: 100-60000
    pub receipt_poll_interval_ms: u64,

    /// Display name given to newly bootstrapped profiles
    pub default_user_name: String,
}

impl Config {
    /// Load configuration from environment variables (and `.env` when present).
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(get_env_opt)
    }

    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).filter(|val| !val.trim().is_empty());

        let contract_address = get("CONTRACT_ADDRESS")
            .ok_or("CONTRACT_ADDRESS must be set in environment")?;

        let receipt_poll_interval_ms = match get("RECEIPT_POLL_INTERVAL_MS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("RECEIPT_POLL_INTERVAL_MS must be a valid number: {}", e))?,
            None => DEFAULT_POLL_INTERVAL_MS,
        };

        Ok(Self {
            contract_address: contract_address.trim().to_string(),
            sanity_project_id: get("SANITY_PROJECT_ID"),
            sanity_dataset: get("SANITY_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            sanity_api_version: get("SANITY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            sanity_token: get("SANITY_TOKEN"),
            receipt_poll_interval_ms,
            default_user_name: get("DEFAULT_USER_NAME")
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        validate_eth_address(&self.contract_address)
            .map_err(|e| format!("CONTRACT_ADDRESS is invalid: {}", e))?;

        if !(100..=60_000).contains(&self.receipt_poll_interval_ms) {
            return Err("RECEIPT_POLL_INTERVAL_MS must be between 100 and 60000".to_string());
        }

        if !self.sanity_api_version.starts_with('v') {
            return Err("SANITY_API_VERSION must look like v2021-06-07".to_string());
        }

        Ok(())
    }

    pub fn receipt_poll_interval(&self) -> Duration {
        Duration::from_millis(self.receipt_poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const CONTRACT: &str = "0x5c3a1F0b0B6e8a6C8a3b2C7d1E4f5a6b7c8d9f21";

    fn lookup(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("CONTRACT_ADDRESS", CONTRACT)])).unwrap();
        assert_eq!(config.sanity_dataset, DEFAULT_DATASET);
        assert_eq!(config.sanity_api_version, DEFAULT_API_VERSION);
        assert_eq!(config.receipt_poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(config.default_user_name, "Unnamed");
        assert!(config.sanity_token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_contract_address() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.contains("CONTRACT_ADDRESS"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_lookup(lookup(&[
            ("CONTRACT_ADDRESS", CONTRACT),
            ("SANITY_PROJECT_ID", "  "),
        ]))
        .unwrap();
        assert!(config.sanity_project_id.is_none());
    }

    #[test]
    fn test_bad_poll_interval() {
        let err = Config::from_lookup(lookup(&[
            ("CONTRACT_ADDRESS", CONTRACT),
            ("RECEIPT_POLL_INTERVAL_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.contains("RECEIPT_POLL_INTERVAL_MS"));

        let config = Config::from_lookup(lookup(&[
            ("CONTRACT_ADDRESS", CONTRACT),
            ("RECEIPT_POLL_INTERVAL_MS", "5"),
        ]))
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env() {
        // only this test touches these variables
        std::env::set_var("CONTRACT_ADDRESS", CONTRACT);
        std::env::set_var("RECEIPT_POLL_INTERVAL_MS", "250");
        std::env::set_var("SANITY_PROJECT_ID", "");

        let config = Config::from_env().unwrap();

        assert_eq!(config.contract_address, CONTRACT);
        assert_eq!(config.receipt_poll_interval(), Duration::from_millis(250));
        assert!(config.sanity_project_id.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_contract_address() {
        let config = Config::from_lookup(lookup(&[("CONTRACT_ADDRESS", "0x1234")])).unwrap();
        assert!(config.validate().unwrap_err().contains("CONTRACT_ADDRESS"));
    }
}
