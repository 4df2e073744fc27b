//! Lexin dictionary client

use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

use super::USER_AGENT;
use crate::config::DictionaryConfig;
use crate::error::FetchError;

/// Looks a word up and returns the service's raw JSON.
pub trait DictionaryClient {
    fn lookup(&self, word: &str) -> Result<Value, FetchError>;
}

pub struct LexinClient {
    http_client: Client,
    base_url: String,
    dictionary: String,
}

impl LexinClient {
    pub fn new(config: &DictionaryConfig, timeout: Duration) -> Result<Self, FetchError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            dictionary: config.dictionary.clone(),
        })
    }
}

/// `{base}?searchinfo=both,{dictionary},{word}&output=JSON`, query-encoded.
pub fn lexin_url(base_url: &str, dictionary: &str, word: &str) -> Result<Url, FetchError> {
    let searchinfo = format!("both,{},{}", dictionary, word);
    Url::parse_with_params(base_url, &[("searchinfo", searchinfo.as_str()), ("output", "JSON")])
        .map_err(|e| FetchError::Transport(format!("invalid dictionary url '{}': {}", base_url, e)))
}

impl DictionaryClient for LexinClient {
    fn lookup(&self, word: &str) -> Result<Value, FetchError> {
        let url = lexin_url(&self.base_url, &self.dictionary, word)?;
        tracing::debug!(word = %word, url = %url, "Querying dictionary");

        let response = self
            .http_client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                word: word.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().map_err(|e| FetchError::Decode(e.to_string()))
    }
}
