use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::recognizer::{EntityRecognizer, RecognizedEntity, RecognizerError};

#[derive(Debug, Serialize)]
struct RecognizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    entities: Vec<RecognizedEntity>,
}

/// Calls an external named-entity recognition service.
///
/// Protocol: `POST <endpoint>` with `{"text": "..."}`, answered by
/// `{"entities": [{"text": "...", "label": "ORG"}]}`.
#[derive(Clone)]
pub struct HttpEntityRecognizer {
    client: Client,
    endpoint: String,
}

impl HttpEntityRecognizer {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, RecognizerError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl EntityRecognizer for HttpEntityRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<RecognizedEntity>, RecognizerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RecognizeRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RecognizerError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: RecognizeResponse = response.json().await?;
        debug!("Recognizer returned {} entities", body.entities.len());
        Ok(body.entities)
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}
