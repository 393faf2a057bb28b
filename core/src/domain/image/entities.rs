use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tempfile::TempPath;

use crate::domain::common::entities::app_errors::CoreError;

/// Raster encodings accepted from uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEncoding {
    Jpeg,
    Png,
}

impl ImageEncoding {
    pub fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// A decoded upload whose encoding passed the JPEG/PNG allow-list.
#[derive(Debug, Clone)]
pub struct ValidatedRaster {
    pub encoding: ImageEncoding,
    image: DynamicImage,
}

impl ValidatedRaster {
    pub(crate) fn new(encoding: ImageEncoding, image: DynamicImage) -> Self {
        Self { encoding, image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

/// JPEG copy of an upload on disk. The file is removed by [`TemporaryAsset::release`]
/// or, failing that, when the value is dropped.
#[derive(Debug)]
pub struct TemporaryAsset {
    path: TempPath,
}

impl TemporaryAsset {
    pub(crate) fn new(path: TempPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn release(self) -> Result<(), CoreError> {
        self.path
            .close()
            .map_err(|e| CoreError::TemporaryAssetError(format!("failed to remove asset: {}", e)))
    }
}
