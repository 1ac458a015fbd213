//! Image identification and decoding for embeddable media.

use crate::resource::ResourceError;

/// The image formats a document can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    /// Guesses the format from the leading bytes without decoding.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        image::guess_format(bytes).ok().and_then(Self::from_codec)
    }

    fn from_codec(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(ImageFormat::Png),
            image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
            image::ImageFormat::Gif => Some(ImageFormat::Gif),
            _ => None,
        }
    }

    fn codec(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Gif => image::ImageFormat::Gif,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
        }
    }
}

/// A decoded image's format and pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width_px: u32,
    pub height_px: u32,
}

impl ImageInfo {
    /// Identifies and decodes `bytes`. Unknown formats fail as
    /// [`ResourceError::UnsupportedFormat`]; a recognised signature over a
    /// body that does not decode fails as [`ResourceError::LoadFailed`].
    pub fn read(path: &str, bytes: &[u8]) -> Result<Self, ResourceError> {
        let format = ImageFormat::sniff(bytes)
            .ok_or_else(|| ResourceError::UnsupportedFormat(path.to_string()))?;
        let image = image::load_from_memory_with_format(bytes, format.codec()).map_err(|e| {
            ResourceError::LoadFailed {
                path: path.to_string(),
                message: format!("Failed to decode image: {}", e),
            }
        })?;
        Ok(ImageInfo {
            format,
            width_px: image.width(),
            height_px: image.height(),
        })
    }

    /// Height over width; square when either side is zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width_px == 0 || self.height_px == 0 {
            1.0
        } else {
            self.height_px as f32 / self.width_px as f32
        }
    }
}
