//! Vote Synchronization
//!
//! Read counts, submit a vote, wait for confirmation, re-read.

use futures::future::try_join;

use crate::chain::{sleep, wait_for_transaction, with_timeout, ChainReader, TxSigner, VotingContract};
use crate::config::{ContractConfig, VoteTimings};
use crate::domain::{TxFailure, TxState, VoteAction, VoteData, VoteType};
use crate::error::ChainError;

/// Read aggregate counts and, with an account, that account's vote.
/// The two view calls run concurrently.
pub async fn fetch_vote_data<R>(
    reader: &R,
    contract: &ContractConfig,
    project_id: &str,
    account: Option<&str>,
) -> Result<VoteData, ChainError>
where
    R: ChainReader + ?Sized,
{
    let voting = VotingContract::new(contract);
    let counts_fn = voting.project_votes_fn();
    let counts_args = voting.project_args(project_id);

    let Some(account) = account else {
        let values = reader.view(&counts_fn, &counts_args).await?;
        let (upvotes, downvotes) = voting.decode_counts(&values)?;
        return Ok(VoteData::new(upvotes, downvotes, None));
    };

    let user_fn = voting.user_vote_fn();
    let user_args = voting.user_args(project_id, account);
    let (counts, user) = try_join(
        reader.view(&counts_fn, &counts_args),
        reader.view(&user_fn, &user_args),
    )
    .await?;

    let (upvotes, downvotes) = voting.decode_counts(&counts)?;
    let code = voting.decode_vote_code(&user)?;
    Ok(VoteData::new(upvotes, downvotes, VoteType::from_code(code)))
}

/// Like `fetch_vote_data`, but a failed read degrades to zero counts.
pub async fn load_vote_data<R>(
    reader: &R,
    contract: &ContractConfig,
    project_id: &str,
    account: Option<&str>,
) -> VoteData
where
    R: ChainReader + ?Sized,
{
    match fetch_vote_data(reader, contract, project_id, account).await {
        Ok(data) => {
            log::debug!("Vote data for {}: {:?}", project_id, data);
            data
        }
        Err(err) => {
            log::warn!("Failed to load votes for {}: {}", project_id, err);
            VoteData::default()
        }
    }
}

/// A submitted and confirmed vote transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastReceipt {
    pub hash: String,
    pub action: VoteAction,
}

/// Progress of one vote cycle, in the order it happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastEvent {
    Confirmed(CastReceipt),
    Failed(TxFailure),
    Refreshed(VoteData),
    /// The result banner has been shown long enough; voting may resume.
    Settled,
}

/// Drives vote transactions for the connected account
pub struct VoteSync<'a, R: ?Sized, S: ?Sized> {
    reader: &'a R,
    signer: &'a S,
    contract: &'a ContractConfig,
    timings: VoteTimings,
}

impl<'a, R, S> VoteSync<'a, R, S>
where
    R: ChainReader + ?Sized,
    S: TxSigner + ?Sized,
{
    pub fn new(reader: &'a R, signer: &'a S, contract: &'a ContractConfig, timings: VoteTimings) -> Self {
        Self { reader, signer, contract, timings }
    }

    /// Submit the entry function `requested` resolves to against `current`
    /// and wait (bounded) for it to commit.
    pub async fn submit_and_confirm(
        &self,
        project_id: &str,
        current: &VoteData,
        requested: VoteType,
    ) -> Result<CastReceipt, TxFailure> {
        let action = VoteAction::resolve(current.user_vote, requested);
        let payload = VotingContract::new(self.contract).entry_payload(action, project_id);
        log::debug!("Submitting {} for project {}", payload.function, project_id);

        let hash = self.signer.sign_and_submit(&payload).await.map_err(|err| {
            log::error!("Vote submission failed: {}", err);
            TxFailure::from_error(&err)
        })?;
        log::info!("Transaction submitted: {}", hash);

        let confirmation = with_timeout(
            self.timings.confirm_timeout,
            wait_for_transaction(self.reader, &hash, self.timings.poll_interval),
        )
        .await;

        match confirmation {
            Some(Ok(())) => Ok(CastReceipt { hash, action }),
            Some(Err(err)) => {
                log::error!("Transaction {} failed: {}", hash, err);
                Err(TxFailure::from_error(&err))
            }
            None => {
                log::error!("Transaction {} not confirmed within {:?}", hash, self.timings.confirm_timeout);
                Err(TxFailure::Timeout)
            }
        }
    }

    /// Wait for state propagation, re-read, and retry the read once on failure.
    /// A second failure degrades to zero counts.
    pub async fn refresh(&self, project_id: &str, account: Option<&str>) -> VoteData {
        sleep(self.timings.propagation_delay).await;

        match fetch_vote_data(self.reader, self.contract, project_id, account).await {
            Ok(data) => return data,
            Err(err) => log::warn!("Failed to reload vote data: {}", err),
        }

        sleep(self.timings.retry_delay).await;
        match fetch_vote_data(self.reader, self.contract, project_id, account).await {
            Ok(data) => {
                log::info!("Vote data reloaded on retry");
                data
            }
            Err(err) => {
                log::error!("Failed to reload vote data on retry: {}", err);
                VoteData::default()
            }
        }
    }

    /// Full cast: submit, confirm, refresh.
    pub async fn cast(
        &self,
        project_id: &str,
        current: &VoteData,
        requested: VoteType,
        account: &str,
    ) -> Result<(CastReceipt, VoteData), TxFailure> {
        let receipt = self.submit_and_confirm(project_id, current, requested).await?;
        let refreshed = self.refresh(project_id, Some(account)).await;
        Ok((receipt, refreshed))
    }

    /// Submit, confirm, re-read, then hold the result for its display delay.
    /// `Settled` is only reported after the re-read has been reported, so the
    /// next vote always resolves against post-transaction data.
    pub async fn cast_and_settle<F>(
        &self,
        project_id: &str,
        current: &VoteData,
        requested: VoteType,
        account: &str,
        mut on_event: F,
    ) where
        F: FnMut(CastEvent),
    {
        let mut state = TxState::default();
        state.begin();

        match self.submit_and_confirm(project_id, current, requested).await {
            Ok(receipt) => {
                state.confirm();
                on_event(CastEvent::Confirmed(receipt));
                let refreshed = self.refresh(project_id, Some(account)).await;
                on_event(CastEvent::Refreshed(refreshed));
            }
            Err(failure) => {
                state.fail(failure.user_message());
                on_event(CastEvent::Failed(failure));
            }
        }

        if let Some(delay) = state.reset_delay(&self.timings) {
            sleep(delay).await;
        }
        on_event(CastEvent::Settled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::memory::InMemoryContract;
    use std::time::Duration;

    const ME: &str = "0xa11ce";
    const PROJECT: &str = "mdoy56jg-ej1gw";

    fn contract() -> ContractConfig {
        ContractConfig { module_address: "0xcafe".into(), module_name: "project_voting".into() }
    }

    #[tokio::test]
    async fn test_public_read_skips_user_vote() {
        let chain = InMemoryContract::new(ME);
        chain.seed_vote(PROJECT, "0xb0b", VoteType::Up);
        chain.seed_vote(PROJECT, "0xca7", VoteType::Up);
        chain.seed_vote(PROJECT, "0xd06", VoteType::Down);

        let data = fetch_vote_data(&chain, &contract(), PROJECT, None).await.unwrap();
        assert_eq!(data, VoteData::new(2, 1, None));
        assert_eq!(data.vibe_score(), 1);
        assert_eq!(chain.view_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_connected_read_includes_user_vote() {
        let chain = InMemoryContract::new(ME);
        chain.seed_vote(PROJECT, ME, VoteType::Down);

        let data = fetch_vote_data(&chain, &contract(), PROJECT, Some(ME)).await.unwrap();
        assert_eq!(data.user_vote, Some(VoteType::Down));
        assert_eq!(data.total_votes, -1);
        assert_eq!(chain.view_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_failed_read_degrades_to_zero() {
        let chain = InMemoryContract::new(ME);
        chain.seed_vote(PROJECT, "0xb0b", VoteType::Up);
        chain.failing_reads.set(1);

        let data = load_vote_data(&chain, &contract(), PROJECT, None).await;
        assert_eq!(data, VoteData::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cast_and_toggle_off() {
        let chain = InMemoryContract::new(ME);
        let config = contract();
        let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

        let (receipt, data) = sync.cast(PROJECT, &VoteData::default(), VoteType::Up, ME).await.unwrap();
        assert_eq!(receipt.action, VoteAction::Cast(VoteType::Up));
        assert_eq!(data, VoteData::new(1, 0, Some(VoteType::Up)));

        let (receipt, data) = sync.cast(PROJECT, &data, VoteType::Up, ME).await.unwrap();
        assert_eq!(receipt.action, VoteAction::Remove);
        assert_eq!(data, VoteData::new(0, 0, None));

        let functions: Vec<String> = chain.submitted.borrow().iter().map(|p| p.function.clone()).collect();
        assert_eq!(functions, vec!["0xcafe::project_voting::upvote", "0xcafe::project_voting::remove_vote"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_vote_replaces_prior() {
        let chain = InMemoryContract::new(ME);
        chain.seed_vote(PROJECT, ME, VoteType::Up);
        let config = contract();
        let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

        let current = fetch_vote_data(&chain, &config, PROJECT, Some(ME)).await.unwrap();
        let (receipt, data) = sync.cast(PROJECT, &current, VoteType::Down, ME).await.unwrap();
        assert_eq!(receipt.action, VoteAction::Cast(VoteType::Down));
        assert_eq!(data, VoteData::new(0, 1, Some(VoteType::Down)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_through_pending_polls() {
        let chain = InMemoryContract::new(ME);
        chain.pending_polls.set(5);
        let config = contract();
        let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

        let started = tokio::time::Instant::now();
        sync.submit_and_confirm(PROJECT, &VoteData::default(), VoteType::Up).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(5));
        assert!(started.elapsed() < Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmation_timeout() {
        let chain = InMemoryContract::new(ME);
        chain.never_commit.set(true);
        let config = contract();
        let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

        let started = tokio::time::Instant::now();
        let err = sync.submit_and_confirm(PROJECT, &VoteData::default(), VoteType::Up).await.unwrap_err();
        assert_eq!(err, TxFailure::Timeout);
        assert_eq!(err.user_message(), "Transaction confirmation timed out. It may still succeed.");
        assert!(started.elapsed() >= Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_rejection() {
        let chain = InMemoryContract::new(ME);
        *chain.reject_with.borrow_mut() = Some(ChainError::Wallet("User rejected the request.".into()));
        let config = contract();
        let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

        let err = sync.submit_and_confirm(PROJECT, &VoteData::default(), VoteType::Down).await.unwrap_err();
        assert_eq!(err, TxFailure::UserRejected);
        assert!(chain.submitted.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_vm_abort_is_classified() {
        let chain = InMemoryContract::new(ME);
        *chain.abort_with.borrow_mut() = Some("INSUFFICIENT_BALANCE_FOR_TRANSACTION_FEE".into());
        let config = contract();
        let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

        let err = sync.submit_and_confirm(PROJECT, &VoteData::default(), VoteType::Up).await.unwrap_err();
        assert_eq!(err, TxFailure::InsufficientBalance);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_retries_once() {
        let chain = InMemoryContract::new(ME);
        chain.seed_vote(PROJECT, ME, VoteType::Up);
        chain.failing_reads.set(1);
        let config = contract();
        let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

        let started = tokio::time::Instant::now();
        let data = sync.refresh(PROJECT, Some(ME)).await;
        assert_eq!(data, VoteData::new(1, 0, Some(VoteType::Up)));
        assert!(chain.view_calls.get() >= 3);
        // propagation delay plus retry delay
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_gives_up_after_retry() {
        let chain = InMemoryContract::new(ME);
        chain.seed_vote(PROJECT, "0xb0b", VoteType::Up);
        chain.failing_reads.set(10);
        let config = contract();
        let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

        let data = sync.refresh(PROJECT, None).await;
        assert_eq!(data, VoteData::default());
        assert_eq!(chain.view_calls.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settles_only_after_reread() {
        let chain = InMemoryContract::new(ME);
        chain.failing_reads.set(1);
        let config = contract();
        let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

        let started = tokio::time::Instant::now();
        let mut events = Vec::new();
        sync.cast_and_settle(PROJECT, &VoteData::default(), VoteType::Up, ME, |event| {
            events.push((started.elapsed(), event));
        })
        .await;

        assert_eq!(events.len(), 3);
        assert!(matches!(events[0].1, CastEvent::Confirmed(ref r) if r.action == VoteAction::Cast(VoteType::Up)));
        let (refreshed_at, refreshed) = match &events[1] {
            (at, CastEvent::Refreshed(data)) => (*at, *data),
            other => panic!("expected refresh, got {:?}", other),
        };
        let (settled_at, settled) = &events[2];
        assert_eq!(*settled, CastEvent::Settled);

        // the re-read needed its retry, and the banner outlives it
        assert!(refreshed_at >= Duration::from_secs(5));
        assert!(*settled_at >= refreshed_at + Duration::from_secs(2));

        // a click once voting resumes toggles off instead of re-submitting
        assert_eq!(refreshed.user_vote, Some(VoteType::Up));
        assert_eq!(VoteAction::resolve(refreshed.user_vote, VoteType::Up), VoteAction::Remove);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_cast_settles_after_error_delay() {
        let chain = InMemoryContract::new(ME);
        *chain.reject_with.borrow_mut() = Some(ChainError::Wallet("User rejected the request.".into()));
        let config = contract();
        let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

        let started = tokio::time::Instant::now();
        let mut events = Vec::new();
        sync.cast_and_settle(PROJECT, &VoteData::default(), VoteType::Down, ME, |event| {
            events.push((started.elapsed(), event));
        })
        .await;

        let kinds: Vec<CastEvent> = events.iter().map(|(_, e)| e.clone()).collect();
        assert_eq!(kinds, vec![CastEvent::Failed(TxFailure::UserRejected), CastEvent::Settled]);
        assert!(events[1].0 >= Duration::from_secs(3));
        assert_eq!(chain.view_calls.get(), 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use proptest::test_runner::Config;

        fn vote_type() -> impl Strategy<Value = VoteType> {
            prop_oneof![Just(VoteType::Up), Just(VoteType::Down)]
        }

        fn runtime() -> tokio::runtime::Runtime {
            tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .start_paused(true)
                .build()
                .expect("runtime")
        }

        proptest! {
            #![proptest_config(Config::with_cases(64))]
            #[test]
            fn vibe_score_tracks_counts(clicks in proptest::collection::vec(vote_type(), 0..12), others in 0_usize..5) {
                let chain = InMemoryContract::new(ME);
                for i in 0..others {
                    let vote = if i % 2 == 0 { VoteType::Up } else { VoteType::Down };
                    chain.seed_vote(PROJECT, &format!("0x{:x}", 100 + i), vote);
                }
                let config = contract();
                let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

                runtime().block_on(async {
                    let mut data = fetch_vote_data(&chain, &config, PROJECT, Some(ME)).await.unwrap();
                    for requested in clicks {
                        let before = data.user_vote;
                        let (_, refreshed) = sync.cast(PROJECT, &data, requested, ME).await.unwrap();
                        data = refreshed;

                        let (up, down) = chain.counts(PROJECT);
                        prop_assert_eq!(data.upvotes, up);
                        prop_assert_eq!(data.downvotes, down);
                        prop_assert_eq!(data.vibe_score(), up as i64 - down as i64);
                        let expected = if before == Some(requested) { None } else { Some(requested) };
                        prop_assert_eq!(data.user_vote, expected);
                    }
                    Ok(())
                })?;
            }

            #[test]
            fn double_toggle_clears_vote(requested in vote_type()) {
                let chain = InMemoryContract::new(ME);
                let config = contract();
                let sync = VoteSync::new(&chain, &chain, &config, VoteTimings::default());

                let data = runtime().block_on(async {
                    let (_, once) = sync.cast(PROJECT, &VoteData::default(), requested, ME).await.unwrap();
                    let (_, twice) = sync.cast(PROJECT, &once, requested, ME).await.unwrap();
                    twice
                });
                prop_assert_eq!(data.user_vote, None);
                prop_assert_eq!(data.total_votes, 0);
            }
        }
    }
}
