use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub decks: DeckConfig,
    pub card: CardConfig,
    pub dictionary: DictionaryConfig,
    pub generation: GenerationConfig,
    pub card_store: CardStoreConfig,
    pub http: HttpConfig,
    pub pipeline: PipelineConfig,
}

/// Destination decks, one per generation mode
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DeckConfig {
    /// Cards built from a dictionary lookup
    pub dictionary: String,
    /// Cards built from a free-form sentence only
    pub sentence: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            dictionary: "Swedish +".to_string(),
            sentence: "Swedish Adv.".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CardConfig {
    /// Card type name, must match the store exactly
    pub model_name: String,
    pub tags: Vec<String>,
    /// Card type field that receives the staged audio
    pub audio_field: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            model_name: "Basic (and reversed card with media)".to_string(),
            tags: vec!["swedish".to_string(), "auto-generated".to_string()],
            audio_field: "Audio".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    pub base_url: String,
    /// Lexin dictionary selector, e.g. `swe_swe` or `swe_eng`
    pub dictionary: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://lexin.nada.kth.se/lexin/service".to_string(),
            dictionary: "swe_swe".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GenerationConfig {
    /// OpenAI-compatible chat completions endpoint
    pub endpoint: String,
    pub model: String,
    /// Name of the env var holding the bearer token
    pub api_key_env: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://router.huggingface.co/v1/chat/completions".to_string(),
            model: "deepseek-ai/DeepSeek-V3-0324".to_string(),
            api_key_env: "HF_TOKEN".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CardStoreConfig {
    pub url: String,
}

impl Default for CardStoreConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8765".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 60 }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PipelineConfig {
    pub max_submit_attempts: u32,
    /// Parent of the per-run directory audio is staged in
    pub staging_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_submit_attempts: 3,
            staging_dir: std::env::temp_dir(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.max_submit_attempts == 0 {
            return Err(ConfigError::Invalid(
                "pipeline.max_submit_attempts must be at least 1".to_string(),
            ));
        }
        if self.decks.dictionary.trim().is_empty() || self.decks.sentence.trim().is_empty() {
            return Err(ConfigError::Invalid("deck names must not be empty".to_string()));
        }
        if self.card.model_name.trim().is_empty() {
            return Err(ConfigError::Invalid("card.model_name must not be empty".to_string()));
        }
        Ok(())
    }
}

pub fn load_config_from_file(file_path: &str) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
        path: file_path.to_string(),
        source,
    })?;
    let loaded_config = parse_config(&contents).map_err(|e| match e {
        ConfigError::Parse { source, .. } => ConfigError::Parse {
            path: file_path.to_string(),
            source,
        },
        other => other,
    })?;
    Ok(loaded_config)
}

/// Parses and validates config text. Missing keys take their defaults.
pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let loaded_config = toml::from_str::<Config>(contents).map_err(|source| ConfigError::Parse {
        path: "<inline>".to_string(),
        source,
    })?;
    loaded_config.validate()?;
    Ok(loaded_config)
}

/// Loads the given file, or the defaults when no path was supplied.
pub fn load_config(file_path: Option<&str>) -> Result<Config, ConfigError> {
    match file_path {
        Some(path) => load_config_from_file(path),
        None => {
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }
}
