use std::time::Duration;

use async_trait::async_trait;
use piimask_core::{Error, Result, Span};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::Classifier;

/// Classifier backed by a remote `/analyze` endpoint.
///
/// Sends `{"text": …, "threshold": …}` and expects
/// `{"entities": [{"entity", "start", "end", "score"}]}` back.
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
    threshold: f64,
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
    threshold: f64,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    entities: Vec<Span>,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>, threshold: f64, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(Error::Classifier(format!(
                "Endpoint must start with http:// or https://: {}",
                endpoint
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("piimask/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Classifier(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            threshold,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Span>> {
        debug!(endpoint = %self.endpoint, chars = text.chars().count(), "Calling classifier");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest {
                text,
                threshold: self.threshold,
            })
            .send()
            .await
            .map_err(|e| Error::Classifier(format!("Failed to reach {}: {}", self.endpoint, e)))?;

        if !response.status().is_success() {
            return Err(Error::Classifier(format!(
                "HTTP error {}: {}",
                response.status().as_u16(),
                self.endpoint
            )));
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| Error::Classifier(format!("Malformed classifier response: {}", e)))?;

        debug!(entities = body.entities.len(), "Classifier responded");
        Ok(body.entities)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
