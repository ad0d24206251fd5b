//! JPEG encoding of raw canvas pixels.
//!
//! The 2D canvas hands back RGBA pixel data; the export artifact is a
//! maximum-quality JPEG.  JPEG has no alpha channel, and every pixel
//! the painter produces is opaque, so the alpha byte is simply dropped.

use image::ImageEncoder;

/// JPEG quality used for the export artifact (maximum).
pub const JPEG_QUALITY: u8 = 100;

/// Errors that can occur while encoding the export image.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// The pixel buffer does not match the stated dimensions.
    #[error("pixel buffer of {actual} bytes does not match {width}x{height} RGBA ({expected} bytes)")]
    BufferSize {
        /// Stated width in pixels.
        width: u32,
        /// Stated height in pixels.
        height: u32,
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// JPEG encoding failed.
    #[error("JPEG encoding failed: {0}")]
    JpegEncode(String),
}

impl From<image::ImageError> for RasterError {
    fn from(err: image::ImageError) -> Self {
        Self::JpegEncode(err.to_string())
    }
}

/// Encode an RGBA pixel buffer as a maximum-quality JPEG.
///
/// # Errors
///
/// Returns [`RasterError::BufferSize`] when `rgba` is not exactly
/// `width * height * 4` bytes, and [`RasterError::JpegEncode`] when
/// the encoder fails.
pub fn rgba_to_jpeg(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, RasterError> {
    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4);
    if rgba.len() != expected {
        return Err(RasterError::BufferSize {
            width,
            height,
            expected,
            actual: rgba.len(),
        });
    }

    // Drop the alpha byte of each pixel.
    let mut rgb = Vec::with_capacity(expected / 4 * 3);
    for pixel in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&pixel[..3]);
    }

    let mut jpeg = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    encoder.write_image(&rgb, width, height, image::ExtendedColorType::Rgb8)?;
    Ok(jpeg)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn encodes_opaque_buffer_to_jpeg() {
        // 2x2 of solid brand red, fully opaque.
        let rgba: Vec<u8> = [0xD4, 0x05, 0x11, 0xFF].repeat(4);
        let jpeg = rgba_to_jpeg(&rgba, 2, 2).unwrap();

        // JPEG streams start with the SOI marker and end with EOI.
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn rejects_mismatched_buffer_length() {
        let result = rgba_to_jpeg(&[0u8; 10], 2, 2);
        assert!(matches!(
            result,
            Err(RasterError::BufferSize {
                expected: 16,
                actual: 10,
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_buffer_for_nonzero_dimensions() {
        assert!(matches!(
            rgba_to_jpeg(&[], 1, 1),
            Err(RasterError::BufferSize { .. })
        ));
    }
}
