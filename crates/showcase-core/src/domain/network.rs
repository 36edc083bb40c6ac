//! Network Status
//!
//! Advisory guess at whether the wallet is on the expected network.

use serde::{Deserialize, Serialize};

use crate::error::ChainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStatus {
    Correct,
    Wrong,
    Unknown,
    #[default]
    Disconnected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    pub status: NetworkStatus,
    pub current_network: Option<String>,
    pub expected_network: String,
    pub is_testnet: bool,
}

impl NetworkInfo {
    pub fn disconnected(expected: &str) -> Self {
        Self {
            status: NetworkStatus::Disconnected,
            current_network: None,
            expected_network: expected.to_string(),
            is_testnet: false,
        }
    }

    /// Interpret an account lookup made against the expected network.
    pub fn from_lookup(result: Result<(), &ChainError>, expected: &str) -> Self {
        let (status, current) = match result {
            Ok(()) => (NetworkStatus::Correct, expected.to_string()),
            Err(err) if err.is_not_found() => (NetworkStatus::Wrong, "Unknown/Mainnet".to_string()),
            Err(_) => (NetworkStatus::Unknown, "Unknown".to_string()),
        };
        Self {
            status,
            current_network: Some(current),
            expected_network: expected.to_string(),
            is_testnet: status == NetworkStatus::Correct && expected.eq_ignore_ascii_case("testnet"),
        }
    }

    /// Warning line shown under the vote buttons, if any.
    pub fn warning(&self) -> Option<String> {
        match self.status {
            NetworkStatus::Wrong => Some(format!("⚠️ Wrong network! Switch to {} to vote", self.expected_network)),
            NetworkStatus::Unknown => Some("⚠️ Network status unknown - voting may not work".to_string()),
            _ => None,
        }
    }
}

impl Default for NetworkInfo {
    fn default() -> Self {
        Self::disconnected(crate::config::DEFAULT_NETWORK_NAME)
    }
}
