//! 预览图

use image::ImageFormat;

use crate::error::{CoreError, CoreResult};

/// A fully received and decoded preview image.
///
/// Construction goes through [`PreviewImage::decode`], so a value of this type
/// is never a truncated or broken image.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    bytes: Vec<u8>,
    format: ImageFormat,
    width: u32,
    height: u32,
}

impl PreviewImage {
    /// Decodes the complete body; fails on unknown formats and truncated data.
    pub fn decode(bytes: Vec<u8>) -> CoreResult<Self> {
        let format =
            image::guess_format(&bytes).map_err(|e| CoreError::InvalidImage(e.to_string()))?;
        let decoded = image::load_from_memory_with_format(&bytes, format)
            .map_err(|e| CoreError::InvalidImage(e.to_string()))?;
        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            format,
            bytes,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
