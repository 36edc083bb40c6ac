//! Domain Layer
//!
//! Plain data and rules. No I/O happens here.

mod project;
mod vote;
mod transaction;
mod network;
mod submission;

pub use project::{load_projects, parse_date, Project, ProjectStatus};
pub use vote::{format_vibe_score, short_address, vibe_score, ButtonState, TxFailure, VoteAction, VoteData, VoteType};
pub use transaction::TxState;
pub use network::{NetworkInfo, NetworkStatus};
pub use submission::{FormData, SubmitReceipt, SubmitStatus, CREATOR_MAX_LEN, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
