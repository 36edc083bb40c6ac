//! Wallet Bindings
//!
//! The Aptos wallet standard as injected at `window.aptos` (Petra and compatibles).

use async_trait::async_trait;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use showcase_core::chain::{EntryFunctionPayload, TxSigner};
use showcase_core::ChainError;

use super::{aptos_account, aptos_connect, aptos_disconnect, aptos_sign_and_submit, js_error_message};

pub const WALLET_INSTALL_URL: &str = "https://petra.app/";

#[derive(Deserialize)]
struct AccountInfo {
    address: String,
}

#[derive(Deserialize)]
struct PendingTransaction {
    hash: String,
}

/// Whether a wallet extension injected `window.aptos`.
pub fn wallet_installed() -> bool {
    web_sys::window()
        .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("aptos")).unwrap_or(false))
        .unwrap_or(false)
}

pub async fn connect_wallet() -> Result<String, String> {
    if !wallet_installed() {
        return Err(ChainError::NoWallet.to_string());
    }
    let result = aptos_connect().await.map_err(|e| js_error_message(&e))?;
    let info: AccountInfo = serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    Ok(info.address)
}

pub async fn disconnect_wallet() -> Result<(), String> {
    if !wallet_installed() {
        return Ok(());
    }
    aptos_disconnect().await.map_err(|e| js_error_message(&e))?;
    Ok(())
}

/// Account of an already approved connection; `None` when the wallet is locked or absent.
pub async fn connected_account() -> Option<String> {
    if !wallet_installed() {
        return None;
    }
    let result = aptos_account().await.ok()?;
    serde_wasm_bindgen::from_value::<AccountInfo>(result)
        .ok()
        .map(|info| info.address)
}

/// Signs through the browser wallet. The wallet prompts the user for every payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWallet;

#[async_trait(?Send)]
impl TxSigner for BrowserWallet {
    async fn sign_and_submit(&self, payload: &EntryFunctionPayload) -> Result<String, ChainError> {
        if !wallet_installed() {
            return Err(ChainError::NoWallet);
        }
        let args = serde_wasm_bindgen::to_value(payload).map_err(|e| ChainError::Decode(e.to_string()))?;
        let result = aptos_sign_and_submit(args)
            .await
            .map_err(|e| ChainError::Wallet(js_error_message(&e)))?;
        let pending: PendingTransaction =
            serde_wasm_bindgen::from_value(result).map_err(|e| ChainError::Decode(e.to_string()))?;
        Ok(pending.hash)
    }
}
