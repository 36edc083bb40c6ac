//! Submission Client
//!
//! Posts the form to the API route and interprets its answer.

use serde::Deserialize;

use crate::domain::{FormData, SubmitReceipt};
use crate::error::SubmitError;

const DEFAULT_FAILURE: &str = "Failed to submit project";

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client for `POST {endpoint}`
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SubmissionClient {
    /// `endpoint` must be absolute (reqwest cannot resolve relative URLs in the browser).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Site origin plus the configured route path.
    pub fn for_origin(origin: &str, path: &str) -> Self {
        Self::new(format!("{}{}", origin.trim_end_matches('/'), path))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validate, then post. Validation failures never touch the network.
    pub async fn submit(&self, form: &FormData) -> Result<SubmitReceipt, SubmitError> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(SubmitError::Validation(errors));
        }

        log::info!("Submitting project '{}' to {}", form.title, self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        interpret_response(status, &body)
    }
}

/// Map the endpoint's status and body to a receipt or a banner message.
pub fn interpret_response(status: u16, body: &str) -> Result<SubmitReceipt, SubmitError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| {
            log::error!("Unreadable submission response: {}", e);
            SubmitError::Network(e.to_string())
        });
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FAILURE.to_string());
    log::warn!("Submission rejected ({}): {}", status, message);
    Err(SubmitError::Rejected(message))
}
