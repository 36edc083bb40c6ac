//! Configuration
//!
//! Network, contract and timing settings. Values come from a key lookup so the
//! CLI can read the process environment and the web build can read `option_env!`.

use std::time::Duration;

use log::{info, warn};
use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_NODE_URL: &str = "https://fullnode.testnet.aptoslabs.com/v1";
pub const DEFAULT_NETWORK_NAME: &str = "Testnet";
pub const DEFAULT_MODULE_ADDRESS: &str =
    "0x5bd3338c9f09619c16a5207af405b84e98d041c8194ea90c2243be7dba513423";
pub const DEFAULT_MODULE_NAME: &str = "project_voting";
pub const DEFAULT_SUBMIT_PATH: &str = "/api/submit-project";

pub const ENV_NODE_URL: &str = "VIBE_NODE_URL";
pub const ENV_API_KEY: &str = "VIBE_API_KEY";
pub const ENV_MODULE_ADDRESS: &str = "VIBE_MODULE_ADDRESS";
pub const ENV_MODULE_NAME: &str = "VIBE_MODULE_NAME";
pub const ENV_SUBMIT_PATH: &str = "VIBE_SUBMIT_PATH";

/// Fullnode endpoint and the network it is expected to serve
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    /// Base URL without trailing slash, e.g. `https://fullnode.testnet.aptoslabs.com/v1`
    pub node_url: String,
    /// Sent as a bearer token to avoid public rate limits
    pub api_key: Option<String>,
    /// Human name of the expected network
    pub name: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_string(),
            api_key: None,
            name: DEFAULT_NETWORK_NAME.to_string(),
        }
    }
}

/// Where the voting module is published
#[derive(Debug, Clone, PartialEq)]
pub struct ContractConfig {
    pub module_address: String,
    pub module_name: String,
}

impl ContractConfig {
    /// Fully qualified `address::module::function` identifier.
    pub fn function_id(&self, function: &str) -> String {
        format!("{}::{}::{}", self.module_address, self.module_name, function)
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            module_address: DEFAULT_MODULE_ADDRESS.to_string(),
            module_name: DEFAULT_MODULE_NAME.to_string(),
        }
    }
}

/// Fixed delays used by the vote flow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoteTimings {
    /// Upper bound on waiting for a submitted transaction
    pub confirm_timeout: Duration,
    /// Interval between transaction status polls
    pub poll_interval: Duration,
    /// Wait after confirmation before re-reading counts
    pub propagation_delay: Duration,
    /// Wait before the single retry of a failed re-read
    pub retry_delay: Duration,
    pub success_reset: Duration,
    pub error_reset: Duration,
}

impl Default for VoteTimings {
    fn default() -> Self {
        Self {
            confirm_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(1),
            propagation_delay: Duration::from_secs(2),
            retry_delay: Duration::from_secs(3),
            success_reset: Duration::from_secs(2),
            error_reset: Duration::from_secs(3),
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    pub network: NetworkConfig,
    pub contract: ContractConfig,
    /// Path of the submission API route, relative to the site origin
    pub submit_path: String,
    pub timings: VoteTimings,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            contract: ContractConfig::default(),
            submit_path: DEFAULT_SUBMIT_PATH.to_string(),
            timings: VoteTimings::default(),
        }
    }
}

impl ShowcaseConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| -> String {
            match lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
                Some(value) => value,
                None => {
                    info!("{key} not set, using default: {default}");
                    default.to_string()
                }
            }
        };

        let node_url = parse_node_url(&var(ENV_NODE_URL, DEFAULT_NODE_URL))?;
        let module_address = parse_address(ENV_MODULE_ADDRESS, &var(ENV_MODULE_ADDRESS, DEFAULT_MODULE_ADDRESS))?;
        let module_name = var(ENV_MODULE_NAME, DEFAULT_MODULE_NAME);
        if !module_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid(ENV_MODULE_NAME, &module_name, "expected a Move identifier"));
        }

        let mut submit_path = var(ENV_SUBMIT_PATH, DEFAULT_SUBMIT_PATH);
        if !submit_path.starts_with('/') {
            warn!("{ENV_SUBMIT_PATH} should be absolute, prefixing '/'");
            submit_path.insert(0, '/');
        }

        let api_key = lookup(ENV_API_KEY).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            network: NetworkConfig {
                node_url,
                api_key,
                name: DEFAULT_NETWORK_NAME.to_string(),
            },
            contract: ContractConfig { module_address, module_name },
            submit_path,
            timings: VoteTimings::default(),
        })
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_node_url(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|e| invalid(ENV_NODE_URL, raw, &e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(ENV_NODE_URL, raw, "expected an http(s) URL"));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

/// Validate an account address: `0x` followed by 1 to 64 hex digits.
pub fn parse_address(key: &str, raw: &str) -> Result<String, ConfigError> {
    let hex = raw
        .strip_prefix("0x")
        .ok_or_else(|| invalid(key, raw, "address must start with 0x"))?;
    if hex.is_empty() || hex.len() > 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(key, raw, "address must be 1-64 hex digits"));
    }
    Ok(raw.to_lowercase())
}
