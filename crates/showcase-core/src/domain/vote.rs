//! Vote State
//!
//! Read-through cache of the contract's counts plus the rules the widget applies
//! on top of them: toggle resolution, button state, error wording.

use serde::{Deserialize, Serialize};

use super::network::NetworkStatus;
use super::transaction::TxState;
use crate::error::ChainError;

/// Direction of a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// Contract vote code for an upvote
    pub const UP_CODE: u64 = 1;
    /// Contract vote code for a downvote
    pub const DOWN_CODE: u64 = 2;

    /// Map the `get_user_vote` code; any other value means "no vote".
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            Self::UP_CODE => Some(VoteType::Up),
            Self::DOWN_CODE => Some(VoteType::Down),
            _ => None,
        }
    }

    pub fn code(&self) -> u64 {
        match self {
            VoteType::Up => Self::UP_CODE,
            VoteType::Down => Self::DOWN_CODE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Up => "up",
            VoteType::Down => "down",
        }
    }
}

/// Upvotes minus downvotes, saturating at the `i64` range.
pub fn vibe_score(upvotes: u64, downvotes: u64) -> i64 {
    let diff = upvotes as i128 - downvotes as i128;
    diff.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Vote counts for one project as last read from the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteData {
    pub upvotes: u64,
    pub downvotes: u64,
    /// Always `upvotes - downvotes`
    pub total_votes: i64,
    pub user_vote: Option<VoteType>,
}

impl VoteData {
    pub fn new(upvotes: u64, downvotes: u64, user_vote: Option<VoteType>) -> Self {
        Self {
            upvotes,
            downvotes,
            total_votes: vibe_score(upvotes, downvotes),
            user_vote,
        }
    }

    pub fn vibe_score(&self) -> i64 {
        self.total_votes
    }
}

/// `+3`, `-2` or `0`
pub fn format_vibe_score(score: i64) -> String {
    if score > 0 {
        format!("+{}", score)
    } else {
        score.to_string()
    }
}

/// `0x1234...abcd` for display in the wallet button.
pub fn short_address(address: &str) -> String {
    if address.len() <= 12 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// The entry function a vote click resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    Cast(VoteType),
    /// Clicking the active vote again withdraws it
    Remove,
}

impl VoteAction {
    pub fn resolve(current: Option<VoteType>, requested: VoteType) -> Self {
        if current == Some(requested) {
            VoteAction::Remove
        } else {
            VoteAction::Cast(requested)
        }
    }

    pub fn entry_function(&self) -> &'static str {
        match self {
            VoteAction::Cast(VoteType::Up) => "upvote",
            VoteAction::Cast(VoteType::Down) => "downvote",
            VoteAction::Remove => "remove_vote",
        }
    }
}

/// Presentation state of one vote button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub active: bool,
    pub disabled: bool,
}

impl ButtonState {
    pub fn for_vote(
        vote_type: VoteType,
        data: &VoteData,
        tx: &TxState,
        connected: bool,
        network: NetworkStatus,
    ) -> Self {
        Self {
            active: data.user_vote == Some(vote_type),
            disabled: !connected || tx.is_pending() || network != NetworkStatus::Correct,
        }
    }

    pub fn tooltip(&self, vote_type: VoteType, connected: bool) -> &'static str {
        match (connected, self.active, vote_type) {
            (false, _, _) => "Connect wallet to vote",
            (true, true, VoteType::Up) => "Click to remove your upvote",
            (true, true, VoteType::Down) => "Click to remove your downvote",
            (true, false, VoteType::Up) => "Click to upvote",
            (true, false, VoteType::Down) => "Click to downvote",
        }
    }
}

/// Transaction failure, bucketed for the error banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxFailure {
    InsufficientBalance,
    AccountNotFound,
    Timeout,
    UserRejected,
    Other(String),
}

impl TxFailure {
    /// Bucket by substring of the error text; first match wins.
    pub fn classify(message: &str) -> Self {
        if message.contains("INSUFFICIENT_BALANCE") {
            TxFailure::InsufficientBalance
        } else if message.contains("EACCOUNT_NOT_FOUND") {
            TxFailure::AccountNotFound
        } else if message.contains("timeout") {
            TxFailure::Timeout
        } else if message.contains("User rejected") {
            TxFailure::UserRejected
        } else {
            TxFailure::Other(message.to_string())
        }
    }

    pub fn from_error(err: &ChainError) -> Self {
        match err {
            ChainError::Timeout(_) => TxFailure::Timeout,
            other => Self::classify(&other.to_string()),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            TxFailure::InsufficientBalance => "Insufficient APT balance for transaction fees.".to_string(),
            TxFailure::AccountNotFound => "Please ensure your wallet is properly connected.".to_string(),
            TxFailure::Timeout => "Transaction confirmation timed out. It may still succeed.".to_string(),
            TxFailure::UserRejected => "Transaction was cancelled by user.".to_string(),
            TxFailure::Other(msg) if msg.trim().is_empty() => "Transaction failed".to_string(),
            TxFailure::Other(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for TxFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.user_message())
    }
}

impl From<ChainError> for TxFailure {
    fn from(err: ChainError) -> Self {
        TxFailure::from_error(&err)
    }
}
