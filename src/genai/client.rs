//! Gemini REST Client
//!
//! `models/{model}:generateContent` over reqwest (fetch on wasm).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{GenAiError, GenerativeService, InlineImage};
use crate::config::GenAiConfig;

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn user_text(text: &str) -> Self {
        Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.to_string()),
                inline_data: None,
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }

    /// First part of the first candidate that carries inline data
    pub fn first_inline_image(&self) -> Option<InlineImage> {
        self.first_parts()
            .iter()
            .filter_map(|p| p.inline_data.as_ref())
            .find(|d| !d.data.is_empty())
            .map(|d| InlineImage {
                mime_type: d.mime_type.clone(),
                data: d.data.clone(),
            })
    }

    /// Text parts of the first candidate, concatenated
    pub fn text(&self) -> Option<String> {
        let text: String = self.first_parts().iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Message from a Google API error body, or the raw body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}

// ========================
// Client
// ========================

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GenAiConfig,
}

impl GeminiClient {
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.config.base_url.trim_end_matches('/'), model)
    }

    fn api_key(&self) -> Result<&str, GenAiError> {
        self.config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GenAiError::MissingApiKey)
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, GenAiError> {
        let api_key = self.api_key()?;
        let url = self.endpoint(model);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl GenerativeService for GeminiClient {
    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>, GenAiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: None,
        };
        let response = self.generate_content(&self.config.image_model, &request).await?;
        Ok(response.first_inline_image())
    }

    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<Option<String>, GenAiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        };
        let response = self.generate_content(&self.config.text_model, &request).await?;
        Ok(response.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> GenAiConfig {
        GenAiConfig {
            base_url: "https://example.test/v1beta/".to_string(),
            api_key: api_key.map(str::to_string),
            ..GenAiConfig::default()
        }
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new(config(Some("k")));
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_first_inline_image_skips_text_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{ "candidates": [ { "content": { "role": "model", "parts": [
                { "text": "Here is your texture." },
                { "inlineData": { "mimeType": "image/png", "data": "AAA" } },
                { "inlineData": { "mimeType": "image/jpeg", "data": "BBB" } }
            ] } } ] }"#,
        )
        .unwrap();

        let image = response.first_inline_image().unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "AAA");
    }

    #[test]
    fn test_empty_response_has_nothing() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_inline_image().is_none());
        assert!(response.text().is_none());

        let no_content: GenerateContentResponse = serde_json::from_str(r#"{ "candidates": [ {} ] }"#).unwrap();
        assert!(no_content.text().is_none());
    }

    #[test]
    fn test_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{ "candidates": [ { "content": { "parts": [ { "text": "{\"origin\":" }, { "text": "\"Oslo\"}" } ] } } ] }"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some(r#"{"origin":"Oslo"}"#));
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let schema = serde_json::json!({ "type": "OBJECT" });
        let request = GenerateContentRequest {
            contents: vec![Content::user_text("hi")],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &schema,
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!(json["contents"][0]["parts"][0].get("inlineData").is_none());
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{ "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" } }"#;
        assert_eq!(api_error_message(body), "API key not valid.");
        assert_eq!(api_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_request() {
        let client = GeminiClient::new(config(None));
        let err = client.generate_image("marble").await.unwrap_err();
        assert!(matches!(err, GenAiError::MissingApiKey));

        let client = GeminiClient::new(config(Some("")));
        let err = client.generate_json("marble", &Value::Null).await.unwrap_err();
        assert!(matches!(err, GenAiError::MissingApiKey));
    }
}
