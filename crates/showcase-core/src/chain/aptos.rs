//! Aptos Fullnode REST Client
//!
//! Implements `ChainReader` over `/view`, `/transactions/by_hash` and `/accounts`.

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::traits::{ChainReader, TxStatus};
use crate::config::NetworkConfig;
use crate::error::ChainError;

/// HTTP client for one fullnode
#[derive(Debug, Clone)]
pub struct AptosClient {
    client: reqwest::Client,
    node_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ViewRequest<'a> {
    function: &'a str,
    type_arguments: Vec<String>,
    arguments: &'a [String],
}

/// Error body returned by the node on non-2xx responses
#[derive(Deserialize)]
struct NodeError {
    message: String,
    #[serde(default)]
    error_code: Option<String>,
}

#[derive(Deserialize)]
struct TransactionResponse {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    vm_status: Option<String>,
}

impl AptosClient {
    pub fn new(config: &NetworkConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            node_url: config.node_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.node_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ChainError> {
        let response = self.authorize(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

/// Turn a node response into a value or a typed error.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ChainError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(ChainError::from);
    }

    match serde_json::from_str::<NodeError>(body) {
        Ok(err) => Err(ChainError::Http {
            status,
            message: err.message,
            error_code: err.error_code,
        }),
        Err(_) => Err(ChainError::Http {
            status,
            message: body.trim().to_string(),
            error_code: None,
        }),
    }
}

#[async_trait(?Send)]
impl ChainReader for AptosClient {
    async fn view(&self, function: &str, arguments: &[String]) -> Result<Vec<Value>, ChainError> {
        log::debug!("view {} {:?}", function, arguments);
        let body = ViewRequest {
            function,
            type_arguments: Vec::new(),
            arguments,
        };
        self.send(self.client.post(self.url("view")).json(&body)).await
    }

    async fn transaction_status(&self, hash: &str) -> Result<TxStatus, ChainError> {
        let tx: TransactionResponse = self
            .send(self.client.get(self.url(&format!("transactions/by_hash/{}", hash))))
            .await?;

        if tx.kind == "pending_transaction" {
            return Ok(TxStatus::Pending);
        }
        Ok(TxStatus::Committed {
            success: tx.success.unwrap_or(false),
            vm_status: tx.vm_status.unwrap_or_default(),
        })
    }

    async fn account(&self, address: &str) -> Result<(), ChainError> {
        let _: Value = self
            .send(self.client.get(self.url(&format!("accounts/{}", address))))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = AptosClient::new(&NetworkConfig {
            node_url: "https://node.example/v1/".into(),
            ..Default::default()
        });
        assert_eq!(client.node_url(), "https://node.example/v1");
        assert_eq!(client.url("/view"), "https://node.example/v1/view");
    }

    #[test]
    fn test_decode_success() {
        let values: Vec<Value> = decode_response(200, r#"["4","1"]"#).unwrap();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_decode_node_error() {
        let body = r#"{"message":"Account not found by Address(0x1) and Ledger version(5)","error_code":"account_not_found","vm_error_code":null}"#;
        let err = decode_response::<Value>(404, body).unwrap_err();
        assert_eq!(
            err,
            ChainError::Http {
                status: 404,
                message: "Account not found by Address(0x1) and Ledger version(5)".into(),
                error_code: Some("account_not_found".into()),
            }
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_plain_error_body() {
        let err = decode_response::<Value>(502, "Bad Gateway\n").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_decode_malformed_success() {
        let err = decode_response::<Vec<Value>>(200, "{not json").unwrap_err();
        assert!(matches!(err, ChainError::Decode(_)));
    }
}
