// Path: crates/client/src/client.rs

//! The HTTP face of the protocol.
//!
//! [`ActionClient`] wraps a single `reqwest::Client` (a cheap, clonable
//! connection pool) and performs the three wire operations: the descriptor
//! GET, the execution POST, and the registry GET. Every operation is a
//! single attempt; retrying is left to the caller's discretion.

use blink_types::action::{ActionDescriptor, ExecutionRequest, ExecutionResult};
use blink_types::error::ClientError;
use blink_types::registry::ActionRegistry;
use reqwest::{header::ACCEPT, Client, Url};

/// The HTTP client for action endpoints.
#[derive(Debug, Clone, Default)]
pub struct ActionClient {
    client: Client,
}

impl ActionClient {
    /// Creates a client with a default connection pool.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Creates a client over a caller-configured `reqwest::Client`, e.g. one
    /// with an external timeout applied.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches and validates an action descriptor.
    ///
    /// One GET with `Accept: application/json`. Fails with
    /// [`ClientError::Network`] on transport failure or a non-success
    /// status, [`ClientError::Decode`] when the body is not valid JSON, and
    /// [`ClientError::Validation`] when the JSON is not descriptor-shaped.
    /// A descriptor-supplied advisory is logged as a warning and carried on
    /// the returned value; it does not fail the fetch.
    pub async fn fetch_descriptor(&self, endpoint: &Url) -> Result<ActionDescriptor, ClientError> {
        let body = self.get_json_body(endpoint).await?;
        let raw: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            ClientError::Decode(format!("descriptor from {} is not valid JSON: {}", endpoint, e))
        })?;
        let descriptor = ActionDescriptor::validate(&raw)?;
        if let Some(advisory) = &descriptor.error {
            tracing::warn!(
                target: "blink_client",
                "descriptor from {} carries an advisory: {}",
                endpoint,
                advisory.message
            );
        }
        Ok(descriptor)
    }

    /// Executes a bound action endpoint on behalf of a signer account.
    ///
    /// One POST with a JSON body `{"account": ...}`. Fails with
    /// [`ClientError::Network`] on transport failure or a non-success
    /// status, and [`ClientError::Decode`] when the response cannot be
    /// parsed into an [`ExecutionResult`]. The returned transaction payload
    /// is opaque to this client.
    pub async fn execute(
        &self,
        endpoint: &Url,
        request: &ExecutionRequest,
    ) -> Result<ExecutionResult, ClientError> {
        tracing::debug!(target: "blink_client", "POST {}", endpoint);
        let response = self
            .client
            .post(endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("POST {} failed: {}", endpoint, e)))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            ClientError::Network(format!("POST {}: could not read body: {}", endpoint, e))
        })?;
        if !status.is_success() {
            return Err(ClientError::Network(format!(
                "HTTP {} from {}: {}",
                status.as_u16(),
                endpoint,
                ascii_snippet(&body)
            )));
        }
        serde_json::from_slice(&body).map_err(|e| {
            ClientError::Decode(format!(
                "execution response from {} did not decode: {}; body='{}'",
                endpoint,
                e,
                ascii_snippet(&body)
            ))
        })
    }

    /// Fetches the community registry of action-hosting websites.
    pub async fn fetch_registry(&self, endpoint: &Url) -> Result<ActionRegistry, ClientError> {
        let body = self.get_json_body(endpoint).await?;
        serde_json::from_slice(&body).map_err(|e| {
            ClientError::Decode(format!(
                "registry from {} did not decode: {}; body='{}'",
                endpoint,
                e,
                ascii_snippet(&body)
            ))
        })
    }

    /// Performs a GET with `Accept: application/json` and returns the body
    /// of a successful response, mapping transport and status failures to
    /// [`ClientError::Network`].
    async fn get_json_body(&self, endpoint: &Url) -> Result<Vec<u8>, ClientError> {
        let response = self
            .client
            .get(endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("GET {} failed: {}", endpoint, e)))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            ClientError::Network(format!("GET {}: could not read body: {}", endpoint, e))
        })?;
        if !status.is_success() {
            return Err(ClientError::Network(format!(
                "HTTP {} from {}: {}",
                status.as_u16(),
                endpoint,
                ascii_snippet(&body)
            )));
        }
        Ok(body.to_vec())
    }
}

/// Renders an untrusted response body as a short, single-line excerpt safe
/// to embed in an error message.
fn ascii_snippet(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let snippet: String = text.trim().chars().take(160).collect();
    snippet
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_snippet_sanitizes_and_truncates() {
        let noisy = b"  Too many\nrequests\t";
        assert_eq!(ascii_snippet(noisy), "Too many\\nrequests");

        let long = "x".repeat(500);
        assert_eq!(ascii_snippet(long.as_bytes()).len(), 160);
    }
}
