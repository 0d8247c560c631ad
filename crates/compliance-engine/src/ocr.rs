//! OCR adapter
//!
//! Text recognition runs out of process. The engine treats it as best-effort
//! enrichment: every failure, including a timeout, degrades to empty text and
//! is only reported through logging.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default bound on a single recognition call
pub const DEFAULT_OCR_TIMEOUT: Duration = Duration::from_secs(12);

/// Default recognition language tag
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("OCR request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OCR service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Screenshot is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Screenshot is empty")]
    EmptyImage,

    #[error("OCR timed out after {0}ms")]
    Timeout(u64),

    #[error("OCR is not configured")]
    Disabled,
}

/// Out-of-process text recognizer
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Recognize text in a base64 raster (a `data:` URL prefix is allowed)
    async fn recognize(&self, image_base64: &str, language: &str) -> Result<String, OcrError>;

    /// Name used in logs
    fn provider_name(&self) -> &str;
}

/// Recognizer used when no OCR service is configured; always fails
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRecognizer;

#[async_trait]
impl TextRecognizer for DisabledRecognizer {
    async fn recognize(&self, _image_base64: &str, _language: &str) -> Result<String, OcrError> {
        Err(OcrError::Disabled)
    }

    fn provider_name(&self) -> &str {
        "disabled"
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OcrRequestBody<'a> {
    image_url: String,
    lang: &'a str,
}

#[derive(Deserialize)]
struct OcrResponseBody {
    #[serde(default)]
    text: Option<String>,
}

/// JSON-over-HTTP OCR service client.
///
/// Posts `{"imageUrl": "data:image/png;base64,...", "lang": "eng"}` and
/// expects `{"text": "..."}` back.
pub struct HttpOcrClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOcrClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextRecognizer for HttpOcrClient {
    async fn recognize(&self, image_base64: &str, language: &str) -> Result<String, OcrError> {
        let image_url = to_data_url(image_base64)?;

        debug!(endpoint = %self.endpoint, bytes = image_url.len(), "sending screenshot to OCR");
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&OcrRequestBody {
                image_url,
                lang: language,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OcrError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: OcrResponseBody = resp.json().await?;
        Ok(body.text.unwrap_or_default())
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}

/// Validate the base64 payload and normalise it to a PNG data URL
fn to_data_url(image: &str) -> Result<String, OcrError> {
    let trimmed = image.trim();
    let (prefix, payload) = match trimmed.split_once(',') {
        Some((header, data)) if header.starts_with("data:") => (header, data),
        _ => ("data:image/png;base64", trimmed),
    };

    if payload.is_empty() {
        return Err(OcrError::EmptyImage);
    }
    STANDARD.decode(payload)?;

    Ok(format!("{},{}", prefix, payload))
}

/// Run OCR with a bounded timeout, degrading every failure to `""`.
///
/// Successful output is lower-cased and trimmed.
pub async fn extract_text_from_image(
    recognizer: &dyn TextRecognizer,
    image_base64: &str,
    language: &str,
    timeout: Duration,
) -> String {
    let result = match tokio::time::timeout(timeout, recognizer.recognize(image_base64, language))
        .await
    {
        Ok(result) => result,
        Err(_elapsed) => Err(OcrError::Timeout(timeout.as_millis() as u64)),
    };

    match result {
        Ok(text) => text.to_lowercase().trim().to_string(),
        Err(OcrError::Disabled) => {
            debug!("OCR disabled, relying on object text only");
            String::new()
        }
        Err(err) => {
            warn!(
                provider = recognizer.provider_name(),
                error = %err,
                "OCR extraction failed, continuing without OCR text"
            );
            String::new()
        }
    }
}
