//! Injected Wallet Provider via wasm-bindgen
//!
//! Wallet extensions inject an EIP-1193 object at `window.ethereum`. It is captured once
//! at startup and every controller call goes through its `request({ method, params })`.

use async_trait::async_trait;
use lib_core::{AppError, Result, WalletProvider};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function injectedEthereum() {
    return (typeof window !== 'undefined' && window.ethereum) ? window.ethereum : null;
}

export async function ethereumRequest(provider, method, params) {
    const args = (params === undefined || params === null) ? { method } : { method, params };
    return await provider.request(args);
}
")]
extern "C" {
    /// The injected provider object, or `null` when no wallet extension is installed
    fn injectedEthereum() -> JsValue;

    /// Forward one request to the provider (rejects when the user declines)
    #[wasm_bindgen(catch)]
    async fn ethereumRequest(provider: &JsValue, method: &str, params: JsValue) -> std::result::Result<JsValue, JsValue>;
}

/// Handle to the wallet's injected provider object.
#[derive(Clone)]
pub struct InjectedProvider {
    ethereum: JsValue,
}

impl InjectedProvider {
    /// Capture `window.ethereum`, if present.
    pub fn detect() -> Option<Self> {
        let ethereum = injectedEthereum();
        if ethereum.is_null() || ethereum.is_undefined() {
            log::info!("window.ethereum not found");
            return None;
        }
        Some(Self { ethereum })
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    async fn request(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let params = match params {
            Some(params) => to_js(&params)?,
            None => JsValue::UNDEFINED,
        };

        let result = ethereumRequest(&self.ethereum, method, params)
            .await
            .map_err(|e| AppError::ProviderRequest(js_error_message(&e)))?;

        if result.is_undefined() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result)
            .map_err(|e| AppError::Decoding(format!("{method} result: {e}")))
    }
}

/// Plain JS objects (not `Map`s) so the provider can read the fields.
fn to_js(value: &Value) -> Result<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| AppError::Encoding(format!("provider params: {e}")))
}

/// Message of a rejected provider call. EIP-1193 errors carry `message` and `code`.
fn js_error_message(error: &JsValue) -> String {
    js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
