//! Chain Traits
//!
//! Reads go to a fullnode; writes go through whatever holds the user's key.
//! Both are `?Send` because the browser runtime is single-threaded.

use async_trait::async_trait;
use serde_json::Value;

use super::contract::EntryFunctionPayload;
use crate::error::ChainError;

/// Status of a submitted transaction as seen by the node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatus {
    Pending,
    Committed { success: bool, vm_status: String },
}

/// Read-only access to the chain
#[async_trait(?Send)]
pub trait ChainReader {
    /// Call a view function and return its raw result values.
    async fn view(&self, function: &str, arguments: &[String]) -> Result<Vec<Value>, ChainError>;

    /// Look a transaction up by hash.
    async fn transaction_status(&self, hash: &str) -> Result<TxStatus, ChainError>;

    /// Fetch account info; an error means the account is not visible on this node.
    async fn account(&self, address: &str) -> Result<(), ChainError>;
}

/// Signs and submits entry-function transactions on behalf of the user
#[async_trait(?Send)]
pub trait TxSigner {
    /// Returns the transaction hash.
    async fn sign_and_submit(&self, payload: &EntryFunctionPayload) -> Result<String, ChainError>;
}
