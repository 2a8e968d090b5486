use crate::{Error, Result};
use image::{DynamicImage, GenericImageView, RgbImage, codecs::jpeg::JpegEncoder, imageops::FilterType};
use std::path::Path;
use tracing::debug;

pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// Where the user obtained the menu image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSource {
    Camera,
    #[default]
    PhotoLibrary,
}

/// A decoded menu bitmap supplied by the caller.
#[derive(Debug, Clone)]
pub struct MenuImage {
    inner: DynamicImage,
}

/// Compressed image bytes ready to be placed into a request body.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedPayload {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

impl MenuImage {
    pub fn new(inner: DynamicImage) -> Self {
        Self { inner }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = image::load_from_memory(bytes)?;
        debug!("Decoded menu image {}x{}", inner.width(), inner.height());
        Ok(Self { inner })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = image::open(path.as_ref())?;
        debug!(
            "Loaded menu image {}x{} from {}",
            inner.width(),
            inner.height(),
            path.as_ref().display()
        );
        Ok(Self { inner })
    }

    /// Wraps a packed RGB8 pixel buffer.
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let buffer = RgbImage::from_raw(width, height, pixels).ok_or_else(|| {
            Error::encode(format!(
                "pixel buffer does not match {}x{} RGB dimensions",
                width, height
            ))
        })?;
        Ok(Self {
            inner: DynamicImage::ImageRgb8(buffer),
        })
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Scales the image uniformly so it fits inside `max_width` x `max_height`.
    ///
    /// A zero-area image is returned unchanged; `encode_jpeg` rejects it.
    pub fn resize(&self, max_width: u32, max_height: u32) -> MenuImage {
        if self.is_empty() {
            return self.clone();
        }

        let (width, height) = fit_within(self.width(), self.height(), max_width, max_height);
        if (width, height) == self.dimensions() {
            return self.clone();
        }

        debug!(
            "Resizing menu image {}x{} -> {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        Self {
            inner: self.inner.resize_exact(width, height, FilterType::Triangle),
        }
    }

    /// Encodes the image as JPEG; `quality` is a fraction in 0.0..=1.0.
    pub fn encode_jpeg(&self, quality: f32) -> Result<EncodedPayload> {
        if self.is_empty() {
            return Err(Error::encode(format!(
                "cannot encode zero-area image ({}x{})",
                self.width(),
                self.height()
            )));
        }

        let jpeg_quality = jpeg_quality(quality);
        let rgb = self.inner.to_rgb8();
        let mut bytes = Vec::new();
        JpegEncoder::new_with_quality(&mut bytes, jpeg_quality)
            .encode_image(&rgb)
            .map_err(|e| Error::encode(e.to_string()))?;

        if bytes.is_empty() {
            return Err(Error::encode("JPEG encoder produced no output"));
        }

        debug!(
            "Encoded {}x{} menu image at quality {} into {} bytes",
            self.width(),
            self.height(),
            jpeg_quality,
            bytes.len()
        );

        Ok(EncodedPayload {
            bytes,
            mime_type: JPEG_MIME_TYPE,
        })
    }
}

/// Target dimensions for `width` x `height` scaled by
/// `min(max_width / width, max_height / height)`, rounded, at least 1px.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }

    let width_ratio = max_width as f64 / width as f64;
    let height_ratio = max_height as f64 / height as f64;
    let scale = width_ratio.min(height_ratio);

    let scaled = |side: u32, bound: u32| -> u32 {
        ((side as f64 * scale).round() as u32).clamp(1, bound.max(1))
    };

    (scaled(width, max_width), scaled(height, max_height))
}

fn jpeg_quality(quality: f32) -> u8 {
    (quality.clamp(0.0, 1.0) * 100.0).round().clamp(1.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fit_within_landscape() {
        assert_eq!(fit_within(4000, 3000, 1024, 1024), (1024, 768));
    }

    #[test]
    fn test_fit_within_portrait() {
        assert_eq!(fit_within(3000, 4000, 1024, 1024), (768, 1024));
    }

    #[test]
    fn test_fit_within_scales_small_images_up_to_the_box() {
        assert_eq!(fit_within(100, 50, 1024, 1024), (1024, 512));
    }

    #[test]
    fn test_fit_within_keeps_thin_images_visible() {
        assert_eq!(fit_within(10_000, 1, 1024, 1024), (1024, 1));
    }

    #[test]
    fn test_jpeg_quality_mapping() {
        assert_eq!(jpeg_quality(0.7), 70);
        assert_eq!(jpeg_quality(0.0), 1);
        assert_eq!(jpeg_quality(1.0), 100);
        assert_eq!(jpeg_quality(3.0), 100);
    }

    #[test]
    fn test_encode_rejects_zero_area() {
        let image = MenuImage::new(DynamicImage::new_rgb8(0, 10));
        let result = image.encode_jpeg(0.7);
        assert!(matches!(result, Err(Error::Encode(_))));
    }

    #[test]
    fn test_from_rgb_rejects_short_buffer() {
        assert!(MenuImage::from_rgb(4, 4, vec![0; 10]).is_err());
    }
}
