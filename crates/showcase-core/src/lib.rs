//! Showcase Core
//!
//! Layered like the UI that consumes it:
//! - domain: projects, votes, submissions, network status
//! - gallery: pure filter/sort/paginate over the project list
//! - chain: Aptos REST reads, wallet signing seam, confirmation polling
//! - reconcile: vote-state synchronization against the contract
//! - submit: client for the submission API route

pub mod config;
pub mod error;
pub mod domain;
pub mod gallery;
pub mod chain;
pub mod reconcile;
pub mod submit;

pub use config::{ContractConfig, NetworkConfig, ShowcaseConfig, VoteTimings};
pub use error::{ChainError, ConfigError, DataError, SubmitError};
pub use domain::{
    load_projects, ButtonState, FormData, NetworkInfo, NetworkStatus, Project, ProjectStatus,
    SubmitReceipt, TxFailure, TxState, VoteAction, VoteData, VoteType,
};
