use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pdf,
    Pptx,
    Docx,
    Txt,
    Image,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "pdf",
            DocumentType::Pptx => "pptx",
            DocumentType::Docx => "docx",
            DocumentType::Txt => "txt",
            DocumentType::Image => "image",
        }
    }
}

/// The text-extraction capability: raw document bytes and a declared type in,
/// one plain-text string out. Format decoding and any OCR fallback live
/// behind this boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(
        &self,
        file_name: &str,
        file_type: DocumentType,
        data: &[u8],
    ) -> AppResult<String>;
}

#[derive(Deserialize)]
struct ExtractionResponse {
    text: String,
}

/// Extractor backed by an HTTP extraction service (Tika-style: bytes in,
/// `{"text": ...}` out).
pub struct RemoteTextExtractor {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteTextExtractor {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.extractor_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TextExtractor for RemoteTextExtractor {
    async fn extract(
        &self,
        file_name: &str,
        file_type: DocumentType,
        data: &[u8],
    ) -> AppResult<String> {
        let response = self
            .http
            .post(format!("{}/extract", self.base_url))
            .query(&[("type", file_type.as_str()), ("name", file_name)])
            .body(data.to_vec())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExtractionFailure(format!(
                "extraction service returned {} for '{}'",
                response.status(),
                file_name
            )));
        }

        let body: ExtractionResponse = response.json().await?;
        if body.text.trim().is_empty() {
            return Err(AppError::ExtractionFailure(format!(
                "no text found in '{}'",
                file_name
            )));
        }

        Ok(body.text)
    }
}
