use std::{env, path::PathBuf};

use image::ImageFormat;
use tracing::debug;

use crate::domain::{
    common::{IngestConfig, entities::app_errors::CoreError},
    image::entities::{ImageEncoding, TemporaryAsset, ValidatedRaster},
};

const ASSET_PREFIX: &str = "foodvision-";
const ASSET_SUFFIX: &str = ".jpg";

/// Turns uploaded bytes into a temporary JPEG file for the provider.
#[derive(Debug, Clone)]
pub struct ImageIngestor {
    temp_dir: PathBuf,
    max_image_size: usize,
}

impl ImageIngestor {
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            temp_dir: config.temp_dir.clone().unwrap_or_else(env::temp_dir),
            max_image_size: config.max_image_size,
        }
    }

    pub fn max_image_size(&self) -> usize {
        self.max_image_size
    }

    /// Decodes `bytes` and checks the encoding against the allow-list.
    ///
    /// Anything that fails to decode is `InvalidImageFormat`; formats that decode
    /// fine but are neither JPEG nor PNG (BMP, GIF, WebP...) are `UnsupportedFormat`.
    pub fn validate(&self, bytes: &[u8]) -> Result<ValidatedRaster, CoreError> {
        if bytes.len() > self.max_image_size {
            return Err(CoreError::ImageTooLarge {
                max: self.max_image_size,
            });
        }

        let format = image::guess_format(bytes).map_err(|e| {
            debug!("unrecognised image signature: {}", e);
            CoreError::InvalidImageFormat
        })?;

        let decoded = image::load_from_memory_with_format(bytes, format).map_err(|e| {
            debug!(?format, "image decode failed: {}", e);
            CoreError::InvalidImageFormat
        })?;

        let encoding = ImageEncoding::from_format(format)
            .ok_or_else(|| CoreError::UnsupportedFormat(format!("{:?}", format)))?;

        Ok(ValidatedRaster::new(encoding, decoded))
    }

    /// Writes the raster as a uniquely named JPEG under the temp dir.
    pub fn materialize(&self, raster: &ValidatedRaster) -> Result<TemporaryAsset, CoreError> {
        let file = tempfile::Builder::new()
            .prefix(ASSET_PREFIX)
            .suffix(ASSET_SUFFIX)
            .tempfile_in(&self.temp_dir)
            .map_err(|e| {
                CoreError::TemporaryAssetError(format!("failed to create temp file: {}", e))
            })?;

        // Dropping `path` on the error branch removes the half-written file.
        let path = file.into_temp_path();
        raster
            .image()
            .to_rgb8()
            .save_with_format(&path, ImageFormat::Jpeg)
            .map_err(|e| CoreError::TemporaryAssetError(format!("failed to write jpeg: {}", e)))?;

        debug!(
            path = %path.display(),
            width = raster.width(),
            height = raster.height(),
            source = raster.encoding.mime_type(),
            "materialized temporary asset"
        );

        Ok(TemporaryAsset::new(path))
    }

    pub fn ingest(&self, bytes: &[u8]) -> Result<TemporaryAsset, CoreError> {
        let raster = self.validate(bytes)?;
        self.materialize(&raster)
    }
}
