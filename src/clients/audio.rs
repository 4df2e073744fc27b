use reqwest::blocking::Client;
use std::fs;
use std::time::Duration;

use super::USER_AGENT;
use crate::media::{AudioStager, StageError};
use crate::types::card_data::AudioAsset;

/// Downloads pronunciation files over HTTP into the staging directory.
pub struct HttpAudioStager {
    http_client: Client,
}

impl HttpAudioStager {
    pub fn new(timeout: Duration) -> Result<Self, StageError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| StageError::Client(e.to_string()))?;
        Ok(Self { http_client })
    }
}

impl AudioStager for HttpAudioStager {
    fn stage(&self, asset: &AudioAsset) -> Result<(), StageError> {
        let download_error = |reason: String| StageError::Download {
            url: asset.source_url.clone(),
            reason,
        };

        let response = self
            .http_client
            .get(&asset.source_url)
            .send()
            .map_err(|e| download_error(e.to_string()))?;
        if !response.status().is_success() {
            return Err(download_error(format!("status {}", response.status())));
        }
        let bytes = response.bytes().map_err(|e| download_error(e.to_string()))?;

        if let Some(parent) = asset.local_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&asset.local_path, &bytes).map_err(|source| StageError::Write {
            path: asset.local_path.clone(),
            source,
        })?;
        tracing::debug!(url = %asset.source_url, bytes = bytes.len(), "Downloaded audio");
        Ok(())
    }
}
