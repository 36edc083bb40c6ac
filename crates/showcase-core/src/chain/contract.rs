//! Voting Contract Bindings
//!
//! Function ids, argument lists and result decoding for `project_voting`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ContractConfig;
use crate::domain::VoteAction;
use crate::error::ChainError;

/// Wallet-standard entry function payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFunctionPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<String>,
}

impl EntryFunctionPayload {
    pub fn new(function: String, arguments: Vec<String>) -> Self {
        Self {
            kind: "entry_function_payload".to_string(),
            function,
            type_arguments: Vec::new(),
            arguments,
        }
    }
}

/// Typed view over the configured voting module
#[derive(Debug, Clone, Copy)]
pub struct VotingContract<'a> {
    config: &'a ContractConfig,
}

impl<'a> VotingContract<'a> {
    pub fn new(config: &'a ContractConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> &str {
        &self.config.module_address
    }

    pub fn project_votes_fn(&self) -> String {
        self.config.function_id("get_project_votes")
    }

    pub fn user_vote_fn(&self) -> String {
        self.config.function_id("get_user_vote")
    }

    /// `(module address, project id)`
    pub fn project_args(&self, project_id: &str) -> Vec<String> {
        vec![self.config.module_address.clone(), project_id.to_string()]
    }

    /// `(module address, project id, voter)`
    pub fn user_args(&self, project_id: &str, account: &str) -> Vec<String> {
        vec![
            self.config.module_address.clone(),
            project_id.to_string(),
            account.to_string(),
        ]
    }

    pub fn entry_payload(&self, action: VoteAction, project_id: &str) -> EntryFunctionPayload {
        EntryFunctionPayload::new(
            self.config.function_id(action.entry_function()),
            self.project_args(project_id),
        )
    }

    /// Decode `get_project_votes` into `(upvotes, downvotes)`.
    pub fn decode_counts(&self, values: &[Value]) -> Result<(u64, u64), ChainError> {
        match values {
            [up, down, ..] => Ok((decode_u64(up)?, decode_u64(down)?)),
            _ => Err(ChainError::Decode(format!(
                "get_project_votes returned {} values, expected 2",
                values.len()
            ))),
        }
    }

    /// Decode `get_user_vote` into the raw vote code.
    pub fn decode_vote_code(&self, values: &[Value]) -> Result<u64, ChainError> {
        values
            .first()
            .ok_or_else(|| ChainError::Decode("get_user_vote returned no value".to_string()))
            .and_then(decode_u64)
    }
}

/// Move integers arrive as JSON strings (u64 and wider) or numbers (u8..u32).
pub fn decode_u64(value: &Value) -> Result<u64, ChainError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| ChainError::Decode(format!("not an unsigned integer: {}", n))),
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|e| ChainError::Decode(format!("'{}': {}", s, e))),
        other => Err(ChainError::Decode(format!("not an integer: {}", other))),
    }
}
