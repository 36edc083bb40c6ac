//! Chain Access
//!
//! Read-side REST client, signing seam and confirmation helpers.

mod traits;
mod contract;
mod aptos;
mod timer;
mod confirm;

#[cfg(test)]
pub(crate) mod memory;

pub use traits::{ChainReader, TxSigner, TxStatus};
pub use contract::{decode_u64, EntryFunctionPayload, VotingContract};
pub use aptos::{decode_response, AptosClient};
pub use timer::{sleep, with_timeout};
pub use confirm::wait_for_transaction;
