//! Figma REST API client.
//!
//! Fetches the two documents the analyzer consumes: the full file tree and
//! the target node subtree, combined into the [`FigmaData`] envelope.
//! Transport and authentication failures are errors here; tolerance for a
//! missing target node lives in the analyzer's entry point, not in the
//! transport.

use figtree_analysis::schema::{FigmaData, NodesResponse};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while talking to the Figma API.
#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, TLS).
    Http(reqwest::Error),
    /// Non-success HTTP status from the API.
    Status { status: u16, url: String },
    /// Response body did not match the expected shape.
    Decode(serde_json::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(err) => write!(f, "figma request failed: {}", err),
            ClientError::Status { status, url } => {
                write!(f, "figma API returned status {} for {}", status, url)
            }
            ClientError::Decode(err) => write!(f, "cannot decode figma response: {}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(err) => Some(err),
            ClientError::Status { .. } => None,
            ClientError::Decode(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err)
    }
}

/// Authenticated client for one Figma account token.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl FigmaClient {
    pub fn new(token: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the complete file tree. The analyzer only cross-references
    /// this, so it stays an opaque JSON value.
    pub async fn get_file(&self, file_key: &str) -> Result<serde_json::Value, ClientError> {
        let url = format!("{}/files/{}", self.base_url, file_key);
        self.get_json(&url).await
    }

    /// Fetch the target node subtree via the nodes endpoint.
    pub async fn get_node(
        &self,
        file_key: &str,
        node_id: &str,
    ) -> Result<NodesResponse, ClientError> {
        let url = format!("{}/files/{}/nodes?ids={}", self.base_url, file_key, node_id);
        let value: serde_json::Value = self.get_json(&url).await?;
        // The schema defaults absent fields, so only a wrong-typed field
        // can fail here; that is a real error, not an empty response.
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch both documents and assemble the envelope the analyzer's entry
    /// point consumes.
    pub async fn full_structure(
        &self,
        file_key: &str,
        node_id: &str,
    ) -> Result<FigmaData, ClientError> {
        info!(file_key, node_id, "fetching figma document");
        let full_file = self.get_file(file_key).await?;
        let specific_node = self.get_node(file_key, node_id).await?;
        Ok(FigmaData {
            full_file,
            specific_node,
            target_node_id: node_id.to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .header("X-FIGMA-TOKEN", &self.token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_formats_with_url() {
        let err = ClientError::Status {
            status: 403,
            url: "https://api.figma.com/v1/files/abc".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(text.contains("/files/abc"));
    }

    #[test]
    fn mismatched_nodes_shape_becomes_a_decode_error() {
        let value = serde_json::json!({"nodes": ["not", "a", "map"]});
        let err = serde_json::from_value::<NodesResponse>(value)
            .map_err(ClientError::from)
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
        assert!(err.to_string().contains("cannot decode"));
    }

    #[test]
    fn nodes_response_parses_from_api_shape() {
        let value = serde_json::json!({
            "name": "My File",
            "nodes": {
                "1:2": {
                    "document": {"id": "1:2", "type": "FRAME", "name": "Page"}
                }
            }
        });
        let response: NodesResponse = serde_json::from_value(value).unwrap();
        assert_eq!(response.nodes["1:2"].document.node_type, "FRAME");
    }
}
