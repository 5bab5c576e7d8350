use super::ImageGenerationService;
use crate::session::Credential;
use crate::{Error, Result};
use async_trait::async_trait;
use image::{DynamicImage, RgbaImage};
use std::sync::{Arc, Mutex};

enum MockOutcome {
    Image(DynamicImage),
    Failure(String),
}

/// Test double for the generation provider.
///
/// Queued outcomes are replayed in order and cycle when exhausted; with no
/// queued outcomes every call yields a 1x1 bitmap. Probes expose the call
/// count and the last prompt that reached the provider boundary.
#[derive(Clone)]
pub struct MockImageClient {
    responses: Arc<Mutex<Vec<MockOutcome>>>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_image_response(self, image: DynamicImage) -> Self {
        self.responses.lock().unwrap().push(MockOutcome::Image(image));
        self
    }

    pub fn with_error_response(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockOutcome::Failure(message.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    fn default_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 255])))
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_image(
        &self,
        prompt: &str,
        _credential: &Credential,
    ) -> Result<DynamicImage> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(Self::default_image());
        }

        let index = (*count - 1) % responses.len();
        match &responses[index] {
            MockOutcome::Image(image) => Ok(image.clone()),
            MockOutcome::Failure(message) => Err(Error::Provider(message.clone())),
        }
    }
}
