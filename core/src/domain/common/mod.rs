use std::{fmt, path::PathBuf};

pub mod entities;
pub mod services;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4-1106-preview";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone, Debug)]
pub struct NutriscopeConfig {
    pub dataset: DatasetConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DatasetConfig {
    /// Seeded synthetic dish cloud.
    Sample { seed: u64, size: usize },
    /// Macronutrient table read from a CSV file.
    Csv { path: PathBuf },
}

#[derive(Clone)]
pub struct LLMConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLMConfig")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_config_debug_hides_key() {
        let config = LLMConfig {
            openai_api_key: Some("sk-secret".to_string()),
            ..LLMConfig::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains(DEFAULT_OPENAI_MODEL));
    }
}
