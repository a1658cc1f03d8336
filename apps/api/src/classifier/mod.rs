/// Classifier client: the only module that talks to the external classification service.
///
/// The gateway never interprets a classification. A successful body is relayed byte for
/// byte, so the only check applied to it is that it parses as JSON.
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Classifier returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Classifier returned a body that is not JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Outbound payload. `text` is carried as the raw JSON value the caller sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub text: Value,
}

/// The classification backend as seen by the gateway.
///
/// Carried in `AppState` as `Arc<dyn Classifier>`.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Sends one analysis request and returns the raw success body.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Bytes, ClassifierError>;

    /// Readiness probe against the service's `/ping` route.
    async fn ping(&self) -> Result<(), ClassifierError>;
}

/// `Classifier` over HTTP. One request per call, no retries, transport-default timeouts.
#[derive(Clone)]
pub struct HttpClassifier {
    client: Client,
    base_url: Url,
}

impl HttpClassifier {
    pub fn new(base_url: Url) -> Result<Self, ClassifierError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
        })
    }

    /// Appends `path` to the base URL, keeping any path prefix the base carries.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Bytes, ClassifierError> {
        let response = self
            .client
            .post(self.endpoint("analyze"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;

        debug!("Classifier call succeeded: {} bytes", body.len());
        Ok(body)
    }

    async fn ping(&self) -> Result<(), ClassifierError> {
        let response = self.client.get(self.endpoint("ping")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClassifierError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

/// Serves `app` on an ephemeral local port and returns its base URL.
#[cfg(test)]
pub(crate) async fn spawn_stub(app: axum::Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}
