//! Transient per-session state: the provider credential and the most recent
//! successfully generated mandala. Nothing here outlives the session; the
//! context is owned by the caller and passed explicitly to the app loop.

use crate::models::InspirationWord;
use image::DynamicImage;
use std::fmt;

/// Opaque secret authorizing calls to the generation provider.
///
/// Held only in process memory. The `Debug` form is redacted so the secret
/// cannot end up in logs.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` when the input is empty or whitespace-only; that is
    /// the only validation performed.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw secret, for building the authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

/// A decoded mandala paired with the word that inspired it.
pub struct GeneratedMandala {
    word: InspirationWord,
    image: DynamicImage,
}

impl GeneratedMandala {
    pub fn new(word: InspirationWord, image: DynamicImage) -> Self {
        Self { word, image }
    }

    pub fn word(&self) -> &InspirationWord {
        &self.word
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

/// One user's interactive lifetime with the tool.
///
/// Mutated only by explicit user actions: entering a key, or a generation
/// that succeeds. A failed generation leaves the last image untouched.
#[derive(Default)]
pub struct Session {
    credential: Option<Credential>,
    last_image: Option<GeneratedMandala>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    pub fn last_image(&self) -> Option<&GeneratedMandala> {
        self.last_image.as_ref()
    }

    pub fn set_last_image(&mut self, mandala: GeneratedMandala) {
        self.last_image = Some(mandala);
    }
}
