//! Bitmap decoding and download encoding
//!
//! Turns raw provider payloads into in-memory bitmaps and serializes them
//! back to PNG (bytes, files, or a data URI) for the download affordances.

pub mod codec;
pub mod encode;
