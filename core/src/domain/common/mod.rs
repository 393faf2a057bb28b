use std::{path::PathBuf, time::Duration};

pub mod entities;
pub mod services;

pub const DEFAULT_MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const DEFAULT_MAX_SESSION_CLIENTS: usize = 10_000;

#[derive(Clone, Debug)]
pub struct FoodVisionConfig {
    pub llm: LLMConfig,
    pub ingest: IngestConfig,
    pub session: SessionConfig,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub api_keys: Vec<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("api_keys", &format_args!("[{} redacted]", self.api_keys.len()))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct IngestConfig {
    /// Directory for temporary JPEG assets. Falls back to the OS temp dir.
    pub temp_dir: Option<PathBuf>,
    pub max_image_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Lifetime of a client-scoped recognition slot after its last write.
    pub ttl: Duration,
    /// Upper bound on live client slots; the oldest write is evicted first.
    pub max_clients: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600),
            max_clients: DEFAULT_MAX_SESSION_CLIENTS,
        }
    }
}
