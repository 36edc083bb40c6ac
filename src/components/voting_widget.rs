//! Voting Widget Component
//!
//! Up/down buttons backed by the on-chain vote contract. Counts are always
//! re-read from the chain; nothing is patched locally after a transaction.

use leptos::prelude::*;
use leptos::task::spawn_local;
use showcase_core::chain::AptosClient;
use showcase_core::domain::format_vibe_score;
use showcase_core::reconcile::{keep_if_current, load_vote_data, CastEvent, VoteSync};
use showcase_core::{ButtonState, TxState, VoteData, VoteType};

use crate::bindings::BrowserWallet;
use crate::context::use_app_context;

#[component]
pub fn VotingWidget(
    #[prop(into)] project_id: String,
    /// Receives `(project_id, vibe_score)` after every read
    #[prop(into)] on_vibe_score: Callback<(String, i64)>,
) -> impl IntoView {
    let ctx = use_app_context();
    let project_id = StoredValue::new(project_id);
    let (vote_data, set_vote_data) = signal(VoteData::default());
    let (tx_state, set_tx_state) = signal(TxState::default());

    let report = move |data: VoteData| {
        set_vote_data.set(data);
        on_vibe_score.run((project_id.get_value(), data.vibe_score()));
    };

    // Load on mount and whenever the connected account changes
    Effect::new(move |_| {
        let account = ctx.account.get();
        let config = ctx.config.get_value();
        let pid = project_id.get_value();
        spawn_local(async move {
            let reader = AptosClient::new(&config.network);
            let load = load_vote_data(&reader, &config.contract, &pid, account.as_deref());
            match keep_if_current(account.as_deref(), load, || ctx.account.get_untracked()).await {
                Some(data) => report(data),
                None => log::debug!("Dropping vote data for {}: account changed during load", pid),
            }
        });
    });

    let cast = move |requested: VoteType| {
        let Some(account) = ctx.account.get_untracked() else {
            log::warn!("Vote ignored: no wallet connected");
            return;
        };
        let mut started = false;
        set_tx_state.update(|state| started = state.begin());
        if !started {
            return;
        }

        let current = vote_data.get_untracked();
        let config = ctx.config.get_value();
        let pid = project_id.get_value();
        spawn_local(async move {
            let reader = AptosClient::new(&config.network);
            let wallet = BrowserWallet;
            let sync = VoteSync::new(&reader, &wallet, &config.contract, config.timings);

            sync.cast_and_settle(&pid, &current, requested, &account, |event| match event {
                CastEvent::Confirmed(receipt) => {
                    log::info!("{:?} on {} confirmed in {}", receipt.action, pid, receipt.hash);
                    set_tx_state.update(|state| {
                        state.confirm();
                    });
                }
                CastEvent::Failed(failure) => {
                    set_tx_state.update(|state| {
                        state.fail(failure.user_message());
                    });
                }
                CastEvent::Refreshed(data) => report(data),
                CastEvent::Settled => set_tx_state.update(|state| {
                    state.reset();
                }),
            })
            .await;
        });
    };

    let button_state = move |vote_type: VoteType| {
        ButtonState::for_vote(
            vote_type,
            &vote_data.get(),
            &tx_state.get(),
            ctx.is_connected(),
            ctx.network.get().status,
        )
    };

    let vote_button = move |vote_type: VoteType, icon: &'static str| {
        view! {
            <button
                class=move || if button_state(vote_type).active { "vote-btn active" } else { "vote-btn" }
                disabled=move || button_state(vote_type).disabled
                title=move || button_state(vote_type).tooltip(vote_type, ctx.is_connected())
                on:click=move |_| cast(vote_type)
            >
                {icon}
            </button>
        }
    };

    view! {
        <div class="voting-widget">
            <div class="vote-row">
                {vote_button(VoteType::Up, "▲")}
                <span class="vibe-score">{move || format_vibe_score(vote_data.get().vibe_score())}</span>
                {vote_button(VoteType::Down, "▼")}
            </div>
            <div class="vote-counts">
                {move || {
                    let data = vote_data.get();
                    format!("↑{} ↓{}", data.upvotes, data.downvotes)
                }}
            </div>
            {move || tx_state.get().banner().map(|text| {
                let class = match tx_state.get() {
                    TxState::Pending => "tx-status pending",
                    TxState::Success => "tx-status success",
                    _ => "tx-status error",
                };
                view! { <div class=class>{text}</div> }
            })}
            {move || ctx.is_connected().then(|| ctx.network.get().warning()).flatten().map(|warning| view! {
                <div class="network-warning">{warning}</div>
            })}
        </div>
    }
}
