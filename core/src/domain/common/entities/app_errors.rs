use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid image format. Upload a JPEG or PNG.")]
    InvalidImageFormat,

    #[error("Only JPEG or PNG images are supported (got {0}).")]
    UnsupportedFormat(String),

    #[error("Image too large. Max size is {max} bytes")]
    ImageTooLarge { max: usize },

    #[error("No valid Google API key available.")]
    NoCredentialAvailable,

    #[error("No food name provided or previously detected.")]
    NoFoodContext,

    #[error("Invalid x-session-id header. Expected 1 to {max} bytes of UTF-8.")]
    InvalidSessionId { max: usize },

    #[error("Provider call failed: {0}")]
    ProviderCallFailed(String),

    #[error("Temporary asset error: {0}")]
    TemporaryAssetError(String),
}

impl CoreError {
    /// Errors caused by the caller's input rather than by the service or the provider.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidImageFormat
                | CoreError::UnsupportedFormat(_)
                | CoreError::ImageTooLarge { .. }
                | CoreError::NoFoodContext
                | CoreError::InvalidSessionId { .. }
        )
    }
}
