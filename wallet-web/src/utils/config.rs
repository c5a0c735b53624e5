//! Build-time configuration
//!
//! The page has no environment at run time, so every key is captured with `option_env!`
//! when the wasm module is compiled (`CONTRACT_ADDRESS=0x... trunk build`).
//!
//! Baked values ship in the public wasm bundle. `SANITY_TOKEN` must be a restricted,
//! client-safe token limited to the widget's dataset, never an editor or admin token.

use lib_core::Config;

/// Value of `key` as it was when the widget was compiled.
pub fn baked(key: &str) -> Option<String> {
    let value = match key {
        "CONTRACT_ADDRESS" => option_env!("CONTRACT_ADDRESS"),
        "SANITY_PROJECT_ID" => option_env!("SANITY_PROJECT_ID"),
        "SANITY_DATASET" => option_env!("SANITY_DATASET"),
        "SANITY_API_VERSION" => option_env!("SANITY_API_VERSION"),
        "SANITY_TOKEN" => option_env!("SANITY_TOKEN"),
        "RECEIPT_POLL_INTERVAL_MS" => option_env!("RECEIPT_POLL_INTERVAL_MS"),
        "DEFAULT_USER_NAME" => option_env!("DEFAULT_USER_NAME"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Load and validate the baked configuration.
pub fn load() -> Result<Config, String> {
    let config = Config::from_lookup(|key| baked(key))?;
    config.validate()?;
    Ok(config)
}
