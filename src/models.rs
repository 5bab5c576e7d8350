//! Core value types and provider API payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed generation parameters sent with every request.
pub const IMAGE_MODEL: &str = "dall-e-3";
pub const IMAGE_SIZE: &str = "1024x1024";
pub const IMAGE_QUALITY: &str = "standard";
pub const IMAGE_COUNT: u32 = 1;

/// A non-empty, trimmed user word that seeds the mandala design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspirationWord(String);

impl InspirationWord {
    /// Returns `None` when the input is empty or whitespace-only.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name offered when saving the generated design.
    pub fn download_filename(&self) -> String {
        format!("mandala_{}.png", self.0)
    }
}

impl fmt::Display for InspirationWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request body for image generation.
#[derive(Debug, Serialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
    pub quality: String,
}

/// Top-level image generation response.
#[derive(Debug, Deserialize)]
pub struct ImageGenerationResponse {
    pub data: Vec<ImageData>,
}

/// One generated image item (transient URL or inline base64).
#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
    pub b64_json: Option<String>,
}

/// Error body returned by the provider on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspiration_word_rejects_empty_input() {
        assert!(InspirationWord::new("").is_none());
        assert!(InspirationWord::new("   ").is_none());
        assert!(InspirationWord::new("\t\n").is_none());
    }

    #[test]
    fn test_inspiration_word_trims_input() {
        let word = InspirationWord::new("  ocean \n").unwrap();
        assert_eq!(word.as_str(), "ocean");
        assert_eq!(word.to_string(), "ocean");
    }

    #[test]
    fn test_download_filename_uses_word() {
        let word = InspirationWord::new("harmony").unwrap();
        assert_eq!(word.download_filename(), "mandala_harmony.png");
    }

    #[test]
    fn test_generation_request_serialization() {
        let request = ImageGenerationRequest {
            model: IMAGE_MODEL.to_string(),
            prompt: "a mandala".to_string(),
            n: IMAGE_COUNT,
            size: IMAGE_SIZE.to_string(),
            quality: IMAGE_QUALITY.to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"dall-e-3\""));
        assert!(json.contains("\"n\":1"));
        assert!(json.contains("\"size\":\"1024x1024\""));
        assert!(json.contains("\"quality\":\"standard\""));
    }

    #[test]
    fn test_image_data_deserializes_url_and_b64_forms() {
        let with_url: ImageData =
            serde_json::from_str(r#"{"url":"https://example.com/img.png"}"#).unwrap();
        assert_eq!(with_url.url.as_deref(), Some("https://example.com/img.png"));
        assert!(with_url.b64_json.is_none());

        let with_b64: ImageData = serde_json::from_str(r#"{"b64_json":"aGVsbG8="}"#).unwrap();
        assert!(with_b64.url.is_none());
        assert_eq!(with_b64.b64_json.as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn test_api_error_body_parses() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Incorrect API key provided");
        assert_eq!(parsed.error.code.as_deref(), Some("invalid_api_key"));
    }
}
