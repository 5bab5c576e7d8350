use super::ImageGenerationService;
use crate::image::codec;
use crate::models::{
    ApiErrorResponse, ImageGenerationRequest, ImageGenerationResponse, IMAGE_COUNT, IMAGE_QUALITY,
    IMAGE_SIZE,
};
use crate::session::Credential;
use crate::{Error, Result};
use async_trait::async_trait;
use image::DynamicImage;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the hosted image generation endpoint.
///
/// One generation is two HTTP round-trips: a POST that returns either a
/// transient URL or an inline base64 payload, then (for the URL form) a GET
/// for the raw bytes. The credential is a per-call parameter; the client
/// itself holds no secret.
pub struct OpenAiImageClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OpenAiImageClient {
    pub fn new(model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
        credential: &Credential,
    ) -> Result<Resp> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", credential.expose()))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to provider: {}", e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            tracing::error!("Provider API error (status {}): {}", status, error_text);
            return Err(classify_api_error(status, &error_text));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse provider response: {}\nBody: {}", e, body);
            Error::Provider(format!("Failed to parse provider response: {}", e))
        })
    }

    async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Fetching generated image from transient URL");
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

/// Map a non-2xx provider response onto the flat error taxonomy, preferring
/// the human-readable message from the structured error body when present.
fn classify_api_error(status: StatusCode, body: &str) -> Error {
    let detail = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|response| response.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Auth(detail),
        StatusCode::TOO_MANY_REQUESTS => Error::Quota(detail),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Error::Rejected(detail),
        _ => Error::Provider(format!("API error (status {}): {}", status, detail)),
    }
}

#[async_trait]
impl ImageGenerationService for OpenAiImageClient {
    async fn generate_image(
        &self,
        prompt: &str,
        credential: &Credential,
    ) -> Result<DynamicImage> {
        let request = ImageGenerationRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            n: IMAGE_COUNT,
            size: IMAGE_SIZE.to_string(),
            quality: IMAGE_QUALITY.to_string(),
        };

        tracing::debug!("Sending image generation request to provider");
        let response: ImageGenerationResponse = self
            .post("/v1/images/generations", &request, credential)
            .await?;

        let image_data = response
            .data
            .first()
            .ok_or_else(|| Error::Provider("No image data in response".to_string()))?;

        let image_bytes = if let Some(b64_json) = &image_data.b64_json {
            use base64::Engine as _;
            base64::engine::general_purpose::STANDARD
                .decode(b64_json)
                .map_err(|e| Error::Generic(format!("Failed to decode base64 image: {}", e)))?
        } else if let Some(url) = &image_data.url {
            self.fetch_image_bytes(url).await?
        } else {
            return Err(Error::Provider(
                "No image data (neither base64 nor URL) in response".to_string(),
            ));
        };

        tracing::debug!(
            "Retrieved {} payload ({} bytes)",
            codec::detect_image_mime(&image_bytes),
            image_bytes.len()
        );
        codec::decode(&image_bytes)
    }
}
