pub mod entities;
pub mod services;

pub use entities::{ImageEncoding, TemporaryAsset, ValidatedRaster};
pub use services::ImageIngestor;
