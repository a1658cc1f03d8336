//! Gateway client: the only place the client crate does network I/O.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::{AnalysisRequest, AnalysisResult, ErrorBody};

/// Failure of one analyze call. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The gateway answered with an `{ "error": ... }` body.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Non-2xx without a usable error body.
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// The gateway could not be reached.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("Unreadable analysis result: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Anything that can classify resume text. `GatewayClient` in production, mocks in tests.
#[async_trait]
pub trait AnalyzeApi: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ApiError>;
}

#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: Client::builder().build().map_err(ApiError::Transport)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.base_url)
    }
}

#[async_trait]
impl AnalyzeApi for GatewayClient {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ApiError> {
        let response = self
            .client
            .post(self.analyze_url())
            .json(&AnalysisRequest { text })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ApiError::Decode);
        }

        let status = status.as_u16();
        let body = response.bytes().await.unwrap_or_default();
        debug!("Gateway returned {status}: {}", String::from_utf8_lossy(&body));

        match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(ErrorBody {
                error: Some(message),
            }) if !message.is_empty() => Err(ApiError::Rejected { status, message }),
            _ => Err(ApiError::Status { status }),
        }
    }
}

/// Serves `app` on an ephemeral local port and returns its base URL.
#[cfg(test)]
pub(crate) async fn spawn_stub_gateway(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_success_parses_result_and_ignores_extra_fields() {
        let app = Router::new().route(
            "/api/analyze",
            post(|| async {
                Json(json!({
                    "predicted_category": "Engineer",
                    "top_matches": [
                        { "category": "Engineer", "probability": 0.82 },
                        { "category": "Manager", "probability": 0.11 }
                    ],
                    "status": "success"
                }))
            }),
        );
        let client = GatewayClient::new(&spawn_stub_gateway(app).await).unwrap();

        let result = client.analyze("resume").await.unwrap();
        assert_eq!(result.predicted_category, "Engineer");
        assert_eq!(result.top_matches.len(), 2);
        assert_eq!(result.top_matches[1].category, "Manager");
    }

    #[tokio::test]
    async fn test_request_body_is_text_only() {
        let app = Router::new().route(
            "/api/analyze",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({ "text": " line one\nline two " }));
                Json(json!({ "predicted_category": "Engineer", "top_matches": [] }))
            }),
        );
        let client = GatewayClient::new(&spawn_stub_gateway(app).await).unwrap();

        let result = client.analyze(" line one\nline two ").await.unwrap();
        assert!(result.top_matches.is_empty());
    }

    #[tokio::test]
    async fn test_error_body_message_is_surfaced() {
        let app = Router::new().route(
            "/api/analyze",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Text field is required" })),
                )
            }),
        );
        let client = GatewayClient::new(&spawn_stub_gateway(app).await).unwrap();

        let err = client.analyze("resume").await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 400, .. }));
        assert_eq!(err.to_string(), "Text field is required");
    }

    #[tokio::test]
    async fn test_status_without_error_body_falls_back() {
        let app = Router::new().route(
            "/api/analyze",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") }),
        );
        let client = GatewayClient::new(&spawn_stub_gateway(app).await).unwrap();

        let err = client.analyze("resume").await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[tokio::test]
    async fn test_unreachable_gateway_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GatewayClient::new(&format!("http://{addr}/")).unwrap();
        let err = client.analyze("resume").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = GatewayClient::new("http://localhost:3001/").unwrap();
        assert_eq!(client.analyze_url(), "http://localhost:3001/api/analyze");
    }
}
