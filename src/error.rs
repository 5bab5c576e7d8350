//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authorization rejected by provider: {0}")]
    Auth(String),

    #[error("Request rejected by provider: {0}")]
    Rejected(String),

    #[error("Provider quota or rate limit reached: {0}")]
    Quota(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
