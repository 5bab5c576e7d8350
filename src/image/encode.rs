use crate::Result;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// Serialize a bitmap to an in-memory PNG container.
pub fn to_png_bytes(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode a bitmap as a `data:image/png;base64,...` string suitable for a
/// browser download link.
pub fn to_data_uri(image: &DynamicImage) -> Result<String> {
    use base64::Engine as _;
    let bytes = to_png_bytes(image)?;
    Ok(format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    ))
}

/// Write a bitmap to disk as a PNG file.
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
