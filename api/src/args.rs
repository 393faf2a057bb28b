use std::{path::PathBuf, time::Duration};

use clap::Parser;
use foodvision_core::domain::common::{
    DEFAULT_MAX_IMAGE_SIZE, DEFAULT_MAX_SESSION_CLIENTS, FoodVisionConfig, IngestConfig, LLMConfig, SessionConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodvision", version, about = "Nigerian Food Vision API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub ingest: IngestArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated origins; `*` allows any origin.
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GOOGLE_API_KEY_1", hide_env_values = true)]
    pub google_api_key_1: String,

    #[arg(long, env = "GOOGLE_API_KEY_2", hide_env_values = true)]
    pub google_api_key_2: Option<String>,

    /// Additional keys, comma separated.
    #[arg(
        long,
        env = "GOOGLE_API_KEYS",
        value_delimiter = ',',
        hide_env_values = true
    )]
    pub google_api_keys: Vec<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    #[arg(long, env = "PROVIDER_TIMEOUT_SECS")]
    pub provider_timeout_secs: Option<u64>,
}

impl LlmArgs {
    pub fn api_keys(&self) -> Vec<String> {
        std::iter::once(self.google_api_key_1.clone())
            .chain(self.google_api_key_2.clone())
            .chain(self.google_api_keys.iter().cloned())
            .collect()
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct IngestArgs {
    #[arg(long, env = "MAX_IMAGE_SIZE", default_value_t = DEFAULT_MAX_IMAGE_SIZE)]
    pub max_image_size: usize,

    #[arg(long, env = "TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    #[arg(long, env = "SESSION_TTL_SECS", default_value_t = 3600)]
    pub session_ttl_secs: u64,

    /// Client slots held at once before the oldest is evicted.
    #[arg(long, env = "SESSION_MAX_CLIENTS", default_value_t = DEFAULT_MAX_SESSION_CLIENTS)]
    pub session_max_clients: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for FoodVisionConfig {
    fn from(args: Args) -> Self {
        FoodVisionConfig {
            llm: LLMConfig {
                api_keys: args.llm.api_keys(),
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                timeout: args.llm.provider_timeout_secs.map(Duration::from_secs),
            },
            ingest: IngestConfig {
                temp_dir: args.ingest.temp_dir,
                max_image_size: args.ingest.max_image_size,
            },
            session: SessionConfig {
                ttl: Duration::from_secs(args.session.session_ttl_secs),
                max_clients: args.session.session_max_clients,
            },
        }
    }
}
