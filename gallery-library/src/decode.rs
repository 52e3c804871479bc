use crate::error::GalleryError;
use image::ImageReader;
use std::io::Cursor;

/// Reads the pixel dimensions (width, height) of encoded image bytes.
///
/// Only the header is parsed for formats that support it, the pixels are
/// never decoded.
pub fn decode_dimensions(bytes: &[u8]) -> Result<(u32, u32), GalleryError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| GalleryError::ImageDecode(format!("Failed to guess format: {}", e)))?;

    if reader.format().is_none() {
        return Err(GalleryError::ImageDecode("Unknown image format".to_string()));
    }

    let dimensions = reader
        .into_dimensions()
        .map_err(|e| GalleryError::ImageDecode(format!("Failed to read dimensions: {}", e)))?;

    log::debug!("Decoded dimensions: {}x{}", dimensions.0, dimensions.1);

    Ok(dimensions)
}

/// Aspect ratio (height / width) of encoded image bytes
pub fn decode_aspect_ratio(bytes: &[u8]) -> Result<f64, GalleryError> {
    let (width, height) = decode_dimensions(bytes)?;

    if width == 0 || height == 0 {
        return Err(GalleryError::InvalidAspectRatio(format!(
            "Image has empty dimensions {}x{}",
            width, height
        )));
    }

    Ok(height as f64 / width as f64)
}
