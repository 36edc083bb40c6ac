//! Vibe Showcase App
//!
//! Header with wallet, then either the gallery or the submission page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use showcase_core::chain::AptosClient;
use showcase_core::reconcile::{check_network, keep_if_current};
use showcase_core::NetworkInfo;

use crate::bindings::{self, location_hash, set_location_hash};
use crate::components::{ProjectGallery, SubmissionForm, WalletButton};
use crate::context::{build_config, AppContext};
use crate::store::GalleryState;

const SUBMIT_HASH: &str = "submit";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Page {
    Gallery,
    Submit,
}

impl Page {
    fn from_hash(hash: &str) -> Self {
        if hash == SUBMIT_HASH { Page::Submit } else { Page::Gallery }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = build_config();
    let expected_network = config.network.name.clone();

    // State
    let (account, set_account) = signal::<Option<String>>(None);
    let (network, set_network) = signal(NetworkInfo::disconnected(&expected_network));
    let (page, set_page) = signal(Page::from_hash(&location_hash()));

    // Provide context to all children
    let ctx = AppContext::new((account, set_account), network, config);
    provide_context(ctx);
    provide_context(Store::new(GalleryState::load()));

    // Restore an already approved wallet connection
    spawn_local(async move {
        if let Some(address) = bindings::connected_account().await {
            log::info!("Restored wallet connection: {}", address);
            ctx.set_account(Some(address));
        }
    });

    // Re-check the network whenever the account changes
    Effect::new(move |_| {
        let checked_for = account.get();
        let config = ctx.config.get_value();
        spawn_local(async move {
            let reader = AptosClient::new(&config.network);
            let check = check_network(&reader, checked_for.as_deref(), &config.network.name);
            match keep_if_current(checked_for.as_deref(), check, || account.get_untracked()).await {
                Some(info) => {
                    log::debug!("Network check: {:?}", info.status);
                    set_network.set(info);
                }
                None => log::debug!("Dropping network check: account changed during check"),
            }
        });
    });

    let navigate = move |target: Page| {
        set_location_hash(if target == Page::Submit { SUBMIT_HASH } else { "" });
        set_page.set(target);
    };

    view! {
        <div class="app-layout">
            <header class="site-header">
                <h1 class="site-title" on:click=move |_| navigate(Page::Gallery)>"VIBE SHOWCASE"</h1>
                <nav class="site-nav">
                    <button
                        class=move || if page.get() == Page::Gallery { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| navigate(Page::Gallery)
                    >
                        "GALLERY"
                    </button>
                    <button
                        class=move || if page.get() == Page::Submit { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| navigate(Page::Submit)
                    >
                        "SUBMIT"
                    </button>
                </nav>
                <WalletButton />
            </header>

            <main class="main-content">
                {move || match page.get() {
                    Page::Gallery => view! { <ProjectGallery /> }.into_any(),
                    Page::Submit => view! { <SubmissionForm /> }.into_any(),
                }}
            </main>
        </div>
    }
}
