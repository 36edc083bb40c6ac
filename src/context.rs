//! Application Context
//!
//! Wallet, network and configuration shared via Leptos Context API.

use leptos::prelude::*;
use showcase_core::config::{
    ENV_API_KEY, ENV_MODULE_ADDRESS, ENV_MODULE_NAME, ENV_NODE_URL, ENV_SUBMIT_PATH,
};
use showcase_core::{NetworkInfo, ShowcaseConfig};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Connected wallet address - read
    pub account: ReadSignal<Option<String>>,
    /// Connected wallet address - write
    set_account: WriteSignal<Option<String>>,
    /// Result of the last network check
    pub network: ReadSignal<NetworkInfo>,
    /// Node, contract and submission settings fixed at build time
    pub config: StoredValue<ShowcaseConfig>,
}

impl AppContext {
    pub fn new(
        account: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        network: ReadSignal<NetworkInfo>,
        config: ShowcaseConfig,
    ) -> Self {
        Self {
            account: account.0,
            set_account: account.1,
            network,
            config: StoredValue::new(config),
        }
    }

    pub fn set_account(&self, account: Option<String>) {
        self.set_account.set(account);
    }

    pub fn is_connected(&self) -> bool {
        self.account.with(Option::is_some)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Configuration baked in from `VIBE_*` variables at compile time.
pub fn build_config() -> ShowcaseConfig {
    let lookup = |key: &str| -> Option<String> {
        let value = match key {
            ENV_NODE_URL => option_env!("VIBE_NODE_URL"),
            ENV_API_KEY => option_env!("VIBE_API_KEY"),
            ENV_MODULE_ADDRESS => option_env!("VIBE_MODULE_ADDRESS"),
            ENV_MODULE_NAME => option_env!("VIBE_MODULE_NAME"),
            ENV_SUBMIT_PATH => option_env!("VIBE_SUBMIT_PATH"),
            _ => None,
        };
        value.map(str::to_string)
    };

    ShowcaseConfig::from_lookup(lookup).unwrap_or_else(|err| {
        log::error!("Invalid build configuration, using defaults: {}", err);
        ShowcaseConfig::default()
    })
}
