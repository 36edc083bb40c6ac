//! Error Types
//!
//! One enum per boundary: static data, chain calls, configuration, submission.

use serde::{Deserialize, Serialize};

/// Errors raised while loading the static project list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataError {
    Parse(String),
    DuplicateId(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Parse(msg) => write!(f, "Invalid project data: {}", msg),
            DataError::DuplicateId(id) => write!(f, "Duplicate project id: {}", id),
        }
    }
}

impl std::error::Error for DataError {}

/// Errors from the fullnode REST API or the wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChainError {
    /// Non-2xx response from the node
    Http {
        status: u16,
        message: String,
        error_code: Option<String>,
    },
    /// Request never produced a response
    Transport(String),
    /// Response body did not have the expected shape
    Decode(String),
    /// Confirmation did not arrive before the deadline
    Timeout(String),
    /// Transaction committed but the VM aborted it
    TransactionFailed { hash: String, vm_status: String },
    /// Raw error text surfaced by the wallet extension
    Wallet(String),
    NoWallet,
}

impl ChainError {
    /// Whether the node reported the requested resource as missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ChainError::Http { status, message, error_code } => {
                *status == 404
                    || error_code.as_deref().is_some_and(|c| c.ends_with("not_found"))
                    || message.to_lowercase().contains("not found")
            }
            ChainError::Transport(msg) | ChainError::Wallet(msg) => msg.contains("not found"),
            _ => false,
        }
    }
}

impl std::fmt::Display for ChainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainError::Http { status, message, error_code } => match error_code {
                Some(code) => write!(f, "HTTP {}: {} ({})", status, message, code),
                None => write!(f, "HTTP {}: {}", status, message),
            },
            ChainError::Transport(msg) => write!(f, "Network request failed: {}", msg),
            ChainError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            ChainError::Timeout(msg) => write!(f, "Transaction confirmation timeout: {}", msg),
            ChainError::TransactionFailed { hash, vm_status } => {
                write!(f, "Transaction {} failed: {}", hash, vm_status)
            }
            ChainError::Wallet(msg) => write!(f, "{}", msg),
            ChainError::NoWallet => write!(f, "No wallet connected"),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<reqwest::Error> for ChainError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ChainError::Decode(err.to_string())
        } else {
            ChainError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ChainError {
    fn from(err: serde_json::Error) -> Self {
        ChainError::Decode(err.to_string())
    }
}

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigError {
    pub key: String,
    pub value: String,
    pub reason: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid {} value '{}': {}", self.key, self.value, self.reason)
    }
}

impl std::error::Error for ConfigError {}

/// Submission failures, already phrased for the banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmitError {
    /// Client-side validation messages
    Validation(Vec<String>),
    /// The endpoint answered with an error
    Rejected(String),
    /// The request never reached the endpoint
    Network(String),
}

impl SubmitError {
    /// Text shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(errors) => errors.join(", "),
            SubmitError::Rejected(msg) => msg.clone(),
            SubmitError::Network(_) => "Network error. Please try again.".to_string(),
        }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Network(detail) => write!(f, "Network error: {}", detail),
            other => write!(f, "{}", other.user_message()),
        }
    }
}

impl std::error::Error for SubmitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_by_status() {
        let err = ChainError::Http { status: 404, message: "gone".into(), error_code: None };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_not_found_by_error_code() {
        let err = ChainError::Http {
            status: 400,
            message: "Account lookup failed".into(),
            error_code: Some("account_not_found".into()),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_server_error_is_not_not_found() {
        let err = ChainError::Http { status: 503, message: "unavailable".into(), error_code: None };
        assert!(!err.is_not_found());
        assert!(!ChainError::Timeout("30s".into()).is_not_found());
    }

    #[test]
    fn test_submit_error_messages() {
        let err = SubmitError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.user_message(), "a, b");
        assert_eq!(SubmitError::Network("dns".into()).user_message(), "Network error. Please try again.");
    }
}
