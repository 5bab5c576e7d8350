use crate::Result;
use image::DynamicImage;

/// Decode raw image bytes into a bitmap.
///
/// The container format (PNG, JPEG, ...) is auto-detected from the header.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Best-effort MIME label for a raw payload, used in diagnostics only.
pub fn detect_image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        _ => "application/octet-stream",
    }
}
