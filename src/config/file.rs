use crate::config::{AppConfig, DeckConfig, LlmConfig};
use crate::utils::error::{Result, TarotError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML configuration file. Every field has a default so a partial
/// file is fine; the API key always comes from the environment, never from
/// the file.
///
/// ```toml
/// [llm]
/// base_url = "https://api.openai.com/v1"
/// models = ["openai/gpt-oss-120b", "openai/gpt-oss-20b"]
/// max_analysis_length = 1000
///
/// [deck]
/// cards_dir = "static/json"
/// images_subpath = "/tarot-cards/images"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub llm: Option<LlmFileSection>,
    pub deck: Option<DeckFileSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmFileSection {
    pub base_url: Option<String>,
    pub models: Option<Vec<String>>,
    pub max_analysis_length: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckFileSection {
    pub cards_dir: Option<String>,
    pub images_subpath: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| TarotError::ConfigError {
            message: format!("cannot read config file {}: {}", path.display(), e),
        })?;
        toml::from_str(&raw).map_err(|e| TarotError::ConfigError {
            message: format!("cannot parse config file {}: {}", path.display(), e),
        })
    }

    /// Resolve into a validated [`AppConfig`], with file values layered over
    /// the defaults and the API key taken from the caller (environment).
    pub fn into_app_config(self, api_key: String, base_url_from_env: Option<String>) -> Result<AppConfig> {
        let llm = self.llm.unwrap_or_default();
        let deck = self.deck.unwrap_or_default();

        let config = AppConfig {
            llm: LlmConfig {
                base_url: llm
                    .base_url
                    .or(base_url_from_env)
                    .unwrap_or_else(|| crate::config::DEFAULT_BASE_URL.to_string()),
                api_key,
                models: llm.models.unwrap_or_else(crate::config::default_models),
                max_analysis_length: llm
                    .max_analysis_length
                    .unwrap_or(crate::core::numerology::DEFAULT_MAX_ANALYSIS_LENGTH),
            },
            deck: DeckConfig {
                cards_dir: deck
                    .cards_dir
                    .unwrap_or_else(|| crate::config::DEFAULT_CARDS_DIR.to_string()),
                images_subpath: deck
                    .images_subpath
                    .unwrap_or_else(|| crate::config::DEFAULT_IMAGES_SUBPATH.to_string()),
            },
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_file_parses() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[llm]
base_url = "http://localhost:8000/v1"
models = ["local-model"]
max_analysis_length = 500

[deck]
cards_dir = "cards"
images_subpath = "/img"
"#
        )
        .unwrap();

        let config = FileConfig::load(file.path())
            .unwrap()
            .into_app_config("key".to_string(), None)
            .unwrap();

        assert_eq!(config.llm.base_url, "http://localhost:8000/v1");
        assert_eq!(config.llm.models, vec!["local-model".to_string()]);
        assert_eq!(config.llm.max_analysis_length, 500);
        assert_eq!(config.deck.cards_dir, "cards");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[llm]\nmax_analysis_length = 800\n").unwrap();

        let config = FileConfig::load(file.path())
            .unwrap()
            .into_app_config("key".to_string(), None)
            .unwrap();

        assert_eq!(config.llm.base_url, crate::config::DEFAULT_BASE_URL);
        assert_eq!(config.llm.max_analysis_length, 800);
        assert_eq!(config.deck.cards_dir, crate::config::DEFAULT_CARDS_DIR);
    }

    #[test]
    fn test_env_base_url_wins_when_file_is_silent() {
        let config = FileConfig::default()
            .into_app_config("key".to_string(), Some("http://proxy:9000/v1".to_string()))
            .unwrap();
        assert_eq!(config.llm.base_url, "http://proxy:9000/v1");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = FileConfig::load(Path::new("/does/not/exist.toml"));
        assert!(matches!(result, Err(TarotError::ConfigError { .. })));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not [valid toml").unwrap();
        let result = FileConfig::load(file.path());
        assert!(matches!(result, Err(TarotError::ConfigError { .. })));
    }
}
