//! Interactive generator for black and white mandala art.
//!
//! Takes an inspiration word from the user, asks a remote text-to-image
//! provider for a matching mandala design, and keeps the decoded result in a
//! per-session context so it can be re-displayed, saved to disk, or encoded
//! as a downloadable data URI.

pub mod ai;
pub mod app;
pub mod error;
pub mod image;
pub mod models;
pub mod prompts;
pub mod session;

pub use error::{Error, Result};
