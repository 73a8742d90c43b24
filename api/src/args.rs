use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use nutriscope_core::domain::common::{
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, DatasetConfig, LLMConfig, NutriscopeConfig,
};
use nutriscope_core::infrastructure::dataset::repositories::sample_dish_repository::{
    DEFAULT_SAMPLE_SEED, DEFAULT_SAMPLE_SIZE,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriscope", version, about = "3D food data dashboard and completion API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/nutriscope`.
    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3333"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "tls-cert", env = "TLS_CERT_PATH")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long = "tls-key", env = "TLS_KEY_PATH")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetSource {
    /// Seeded synthetic dishes.
    Sample,
    /// Macronutrient CSV file.
    Csv,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatasetArgs {
    #[arg(
        long = "dataset-source",
        env = "DATASET_SOURCE",
        value_enum,
        default_value_t = DatasetSource::Sample
    )]
    pub source: DatasetSource,

    #[arg(
        long = "dataset-path",
        env = "DATASET_PATH",
        default_value = "data/Macronutrients.csv"
    )]
    pub path: PathBuf,

    #[arg(long = "sample-size", env = "SAMPLE_SIZE", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    #[arg(long = "sample-seed", env = "SAMPLE_SEED", default_value_t = DEFAULT_SAMPLE_SEED)]
    pub sample_seed: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = DEFAULT_OPENAI_MODEL)]
    pub openai_model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = DEFAULT_OPENAI_BASE_URL
    )]
    pub openai_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<DatasetArgs> for DatasetConfig {
    fn from(args: DatasetArgs) -> Self {
        match args.source {
            DatasetSource::Sample => DatasetConfig::Sample {
                seed: args.sample_seed,
                size: args.sample_size,
            },
            DatasetSource::Csv => DatasetConfig::Csv { path: args.path },
        }
    }
}

impl From<LlmArgs> for LLMConfig {
    fn from(args: LlmArgs) -> Self {
        Self {
            openai_api_key: args.openai_api_key.filter(|key| !key.trim().is_empty()),
            openai_model: args.openai_model,
            openai_base_url: args.openai_base_url,
        }
    }
}

impl From<Args> for NutriscopeConfig {
    fn from(args: Args) -> Self {
        Self {
            dataset: args.dataset.into(),
            llm: args.llm.into(),
        }
    }
}
