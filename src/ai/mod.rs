//! Provider integration for text-to-image generation
//!
//! Wraps the remote image endpoint behind a small service trait so the
//! interactive session can run against either the real provider or a mock.

pub mod client;
pub mod mock;

pub use client::OpenAiImageClient;
pub use mock::MockImageClient;

use crate::session::Credential;
use crate::Result;
use async_trait::async_trait;
use image::DynamicImage;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate one image for the prompt, authorized by the credential, and
    /// return it fully decoded. The call is atomic: either a bitmap comes
    /// back or an error does, with no partial state.
    async fn generate_image(&self, prompt: &str, credential: &Credential)
        -> Result<DynamicImage>;
}
