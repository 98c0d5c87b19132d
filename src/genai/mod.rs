//! Generative AI Integration
//!
//! Image synthesis and schema-constrained JSON generation behind the
//! [`GenerativeService`] trait, plus the material workflows built on them.

mod client;
mod material;

use async_trait::async_trait;
use serde_json::Value;

pub use client::GeminiClient;
pub use material::*;

/// Inline image returned by the image model
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 payload
    pub data: String,
}

impl InlineImage {
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    #[error("no API key configured for the generative AI service")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GenAiError {
    /// Short text for a notification
    pub fn user_message(&self) -> String {
        match self {
            GenAiError::MissingApiKey => "AI generation is not configured (missing API key).".to_string(),
            GenAiError::Http(_) => "Could not reach the AI service. Check your connection and try again.".to_string(),
            GenAiError::Api { status: 429, .. } => "The AI service is busy. Please try again shortly.".to_string(),
            GenAiError::Api { status, .. } => format!("The AI service rejected the request ({}).", status),
            GenAiError::Decode(_) => "The AI service sent an unexpected response.".to_string(),
        }
    }
}

/// Seam between the UI workflows and the AI provider
#[async_trait(?Send)]
pub trait GenerativeService {
    /// Photorealistic image for `prompt`. `Ok(None)` when the response
    /// carried no inline image.
    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>, GenAiError>;

    /// JSON text constrained by `schema`. `Ok(None)` when the response
    /// carried no text.
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<Option<String>, GenAiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        let image = InlineImage {
            mime_type: "image/png".to_string(),
            data: "iVBORw0KGgo=".to_string(),
        };
        assert_eq!(image.data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_user_messages() {
        assert!(GenAiError::MissingApiKey.user_message().contains("API key"));
        let busy = GenAiError::Api { status: 429, message: "quota".to_string() };
        assert!(busy.user_message().contains("busy"));
        let denied = GenAiError::Api { status: 403, message: "denied".to_string() };
        assert!(denied.user_message().contains("403"));
    }
}
