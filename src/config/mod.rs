#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::utils::error::{Result, TarotError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CARDS_DIR: &str = "static/json";
pub const DEFAULT_IMAGES_SUBPATH: &str = "/tarot-cards/images";

pub fn default_models() -> Vec<String> {
    vec![
        "openai/gpt-oss-120b".to_string(),
        "openai/gpt-oss-20b".to_string(),
    ]
}

/// Everything the core needs, resolved once at startup and passed into each
/// component at construction time. There is no ambient or global
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub deck: DeckConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub models: Vec<String>,
    pub max_analysis_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfig {
    pub cards_dir: String,
    pub images_subpath: String,
}

impl AppConfig {
    /// Resolve configuration from the environment. A missing API key is a
    /// fatal startup error: the service must not come up without model
    /// credentials.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| TarotError::MissingConfigError {
            field: "OPENAI_API_KEY".to_string(),
        })?;
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let config = Self {
            llm: LlmConfig {
                base_url,
                api_key,
                models: default_models(),
                max_analysis_length: crate::core::numerology::DEFAULT_MAX_ANALYSIS_LENGTH,
            },
            deck: DeckConfig {
                cards_dir: DEFAULT_CARDS_DIR.to_string(),
                images_subpath: DEFAULT_IMAGES_SUBPATH.to_string(),
            },
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("llm.base_url", &self.llm.base_url)?;
        validate_non_empty_string("llm.api_key", &self.llm.api_key)?;
        validate_positive_number("llm.models", self.llm.models.len(), 1)?;
        for model in &self.llm.models {
            validate_non_empty_string("llm.models", model)?;
        }
        validate_positive_number("llm.max_analysis_length", self.llm.max_analysis_length, 1)?;
        validate_non_empty_string("deck.cards_dir", &self.deck.cards_dir)?;
        validate_non_empty_string("deck.images_subpath", &self.deck.images_subpath)?;
        Ok(())
    }
}
