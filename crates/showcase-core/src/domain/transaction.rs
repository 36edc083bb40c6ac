//! Transaction UI State
//!
//! idle -> pending -> {success, error} -> idle

use std::time::Duration;

use crate::config::VoteTimings;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TxState {
    #[default]
    Idle,
    Pending,
    Success,
    /// Banner text for the failure
    Error(String),
}

impl TxState {
    pub fn is_idle(&self) -> bool {
        matches!(self, TxState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TxState::Pending)
    }

    /// idle -> pending. Returns false (and leaves the state alone) otherwise.
    pub fn begin(&mut self) -> bool {
        if self.is_idle() {
            *self = TxState::Pending;
            true
        } else {
            false
        }
    }

    /// pending -> success
    pub fn confirm(&mut self) -> bool {
        if self.is_pending() {
            *self = TxState::Success;
            true
        } else {
            false
        }
    }

    /// pending -> error
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if self.is_pending() {
            *self = TxState::Error(message.into());
            true
        } else {
            false
        }
    }

    /// success | error -> idle
    pub fn reset(&mut self) -> bool {
        match self {
            TxState::Success | TxState::Error(_) => {
                *self = TxState::Idle;
                true
            }
            _ => false,
        }
    }

    /// How long a terminal state stays on screen before `reset`.
    pub fn reset_delay(&self, timings: &VoteTimings) -> Option<Duration> {
        match self {
            TxState::Success => Some(timings.success_reset),
            TxState::Error(_) => Some(timings.error_reset),
            _ => None,
        }
    }

    pub fn banner(&self) -> Option<String> {
        match self {
            TxState::Idle => None,
            TxState::Pending => Some("Processing transaction...".to_string()),
            TxState::Success => Some("✓ Vote recorded on-chain!".to_string()),
            TxState::Error(msg) if msg.is_empty() => Some("✗ Transaction failed".to_string()),
            TxState::Error(msg) => Some(format!("✗ {}", msg)),
        }
    }
}
