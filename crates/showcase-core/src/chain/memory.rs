//! In-memory voting contract used by tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use serde_json::{json, Value};

use super::contract::EntryFunctionPayload;
use super::traits::{ChainReader, TxSigner, TxStatus};
use crate::domain::VoteType;
use crate::error::ChainError;

/// Plays both the node and the wallet of a single `sender`.
#[derive(Default)]
pub(crate) struct InMemoryContract {
    pub sender: String,
    /// project id -> voter -> vote
    votes: RefCell<HashMap<String, HashMap<String, VoteType>>>,
    /// Status polls that report Pending before the transaction commits
    pub pending_polls: Cell<u32>,
    /// Upcoming view calls that fail with a transport error
    pub failing_reads: Cell<u32>,
    pub never_commit: Cell<bool>,
    /// Wallet error returned by the next submission
    pub reject_with: RefCell<Option<ChainError>>,
    /// VM status for transactions that commit but abort
    pub abort_with: RefCell<Option<String>>,
    pub known_accounts: RefCell<HashSet<String>>,
    pub account_error: RefCell<Option<ChainError>>,
    pub view_calls: Cell<u32>,
    pub submitted: RefCell<Vec<EntryFunctionPayload>>,
}

impl InMemoryContract {
    pub fn new(sender: &str) -> Self {
        let contract = Self {
            sender: sender.to_string(),
            ..Default::default()
        };
        contract.known_accounts.borrow_mut().insert(sender.to_string());
        contract
    }

    /// Seed a vote from someone other than `sender`.
    pub fn seed_vote(&self, project_id: &str, voter: &str, vote: VoteType) {
        self.votes
            .borrow_mut()
            .entry(project_id.to_string())
            .or_default()
            .insert(voter.to_string(), vote);
    }

    pub fn counts(&self, project_id: &str) -> (u64, u64) {
        let votes = self.votes.borrow();
        let Some(project) = votes.get(project_id) else {
            return (0, 0);
        };
        let up = project.values().filter(|v| **v == VoteType::Up).count() as u64;
        let down = project.values().filter(|v| **v == VoteType::Down).count() as u64;
        (up, down)
    }

    fn user_vote(&self, project_id: &str, voter: &str) -> Option<VoteType> {
        self.votes.borrow().get(project_id).and_then(|p| p.get(voter).copied())
    }
}

fn function_name(function: &str) -> &str {
    function.rsplit("::").next().unwrap_or(function)
}

#[async_trait(?Send)]
impl ChainReader for InMemoryContract {
    async fn view(&self, function: &str, arguments: &[String]) -> Result<Vec<Value>, ChainError> {
        self.view_calls.set(self.view_calls.get() + 1);
        if self.failing_reads.get() > 0 {
            self.failing_reads.set(self.failing_reads.get() - 1);
            return Err(ChainError::Transport("connection reset".into()));
        }

        match (function_name(function), arguments) {
            ("get_project_votes", [_, project_id]) => {
                let (up, down) = self.counts(project_id);
                Ok(vec![json!(up.to_string()), json!(down.to_string())])
            }
            ("get_user_vote", [_, project_id, voter]) => {
                let code = self.user_vote(project_id, voter).map(|v| v.code()).unwrap_or(0);
                Ok(vec![json!(code)])
            }
            (name, args) => Err(ChainError::Http {
                status: 400,
                message: format!("unknown view {} with {} args", name, args.len()),
                error_code: Some("invalid_input".into()),
            }),
        }
    }

    async fn transaction_status(&self, _hash: &str) -> Result<TxStatus, ChainError> {
        if self.never_commit.get() {
            return Ok(TxStatus::Pending);
        }
        if self.pending_polls.get() > 0 {
            self.pending_polls.set(self.pending_polls.get() - 1);
            return Ok(TxStatus::Pending);
        }
        match self.abort_with.borrow().clone() {
            Some(vm_status) => Ok(TxStatus::Committed { success: false, vm_status }),
            None => Ok(TxStatus::Committed {
                success: true,
                vm_status: "Executed successfully".into(),
            }),
        }
    }

    async fn account(&self, address: &str) -> Result<(), ChainError> {
        if let Some(err) = self.account_error.borrow().clone() {
            return Err(err);
        }
        if self.known_accounts.borrow().contains(address) {
            Ok(())
        } else {
            Err(ChainError::Http {
                status: 404,
                message: format!("Account not found by Address({})", address),
                error_code: Some("account_not_found".into()),
            })
        }
    }
}

#[async_trait(?Send)]
impl TxSigner for InMemoryContract {
    async fn sign_and_submit(&self, payload: &EntryFunctionPayload) -> Result<String, ChainError> {
        if let Some(err) = self.reject_with.borrow_mut().take() {
            return Err(err);
        }

        let project_id = payload.arguments.get(1).cloned().unwrap_or_default();
        self.submitted.borrow_mut().push(payload.clone());
        let hash = format!("0x{:064x}", self.submitted.borrow().len());

        if self.abort_with.borrow().is_some() {
            return Ok(hash);
        }

        let mut votes = self.votes.borrow_mut();
        let project = votes.entry(project_id).or_default();
        match function_name(&payload.function) {
            "upvote" => {
                project.insert(self.sender.clone(), VoteType::Up);
            }
            "downvote" => {
                project.insert(self.sender.clone(), VoteType::Down);
            }
            "remove_vote" => {
                project.remove(&self.sender);
            }
            other => return Err(ChainError::Wallet(format!("unknown entry function {}", other))),
        }
        Ok(hash)
    }
}
