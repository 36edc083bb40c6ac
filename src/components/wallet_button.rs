//! Wallet Button Component
//!
//! Connect / disconnect the browser wallet and show the network guess.

use leptos::prelude::*;
use leptos::task::spawn_local;
use showcase_core::domain::short_address;
use showcase_core::NetworkStatus;

use crate::bindings::{self, WALLET_INSTALL_URL};
use crate::context::use_app_context;

#[component]
pub fn WalletButton() -> impl IntoView {
    let ctx = use_app_context();
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_connect = move |_: web_sys::MouseEvent| {
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match bindings::connect_wallet().await {
                Ok(address) => {
                    log::info!("Wallet connected: {}", address);
                    ctx.set_account(Some(address));
                }
                Err(err) => {
                    log::warn!("Wallet connection failed: {}", err);
                    set_error.set(Some(err));
                }
            }
            set_busy.set(false);
        });
    };

    let on_disconnect = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            if let Err(err) = bindings::disconnect_wallet().await {
                log::warn!("Wallet disconnect failed: {}", err);
            }
            ctx.set_account(None);
        });
    };

    let network_badge = move || {
        let info = ctx.network.get();
        let (class, text) = match info.status {
            NetworkStatus::Correct => ("network-badge ok", info.expected_network.clone()),
            NetworkStatus::Wrong => ("network-badge wrong", info.current_network.unwrap_or_default()),
            NetworkStatus::Unknown => ("network-badge unknown", "Unknown".to_string()),
            NetworkStatus::Disconnected => return None,
        };
        Some(view! { <span class=class>{text}</span> })
    };

    view! {
        <div class="wallet">
            {move || match ctx.account.get() {
                Some(address) => view! {
                    <span class="wallet-address" title=address.clone()>{short_address(&address)}</span>
                    {network_badge}
                    <button class="wallet-btn" on:click=on_disconnect>"DISCONNECT"</button>
                }.into_any(),
                None if !bindings::wallet_installed() => view! {
                    <a class="wallet-btn" href=WALLET_INSTALL_URL target="_blank" rel="noopener noreferrer">
                        "INSTALL PETRA WALLET"
                    </a>
                }.into_any(),
                None => view! {
                    <button class="wallet-btn" disabled=move || busy.get() on:click=on_connect>
                        {move || if busy.get() { "CONNECTING..." } else { "CONNECT WALLET" }}
                    </button>
                }.into_any(),
            }}
            {move || error.get().map(|err| view! { <span class="wallet-error">{err}</span> })}
        </div>
    }
}
