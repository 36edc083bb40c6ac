//! Reconciliation
//!
//! The contract is the source of truth. Local vote state is re-read after
//! every transaction instead of being patched in place.

mod votes;
mod network;
mod account_scope;

pub use votes::{fetch_vote_data, load_vote_data, CastEvent, CastReceipt, VoteSync};
pub use network::check_network;
pub use account_scope::keep_if_current;
