//! Audio resolution: which pronunciation files a lookup points at and where
//! they go on disk. Audio is best effort; nothing in here can fail a card.

use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::card_data::{AudioAsset, LookupResult};

/// The lookup did not have the shape the phonetic walk expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not get audio files: {0}")]
pub struct MediaResolutionWarning(pub String);

#[derive(Debug, Error)]
pub enum StageError {
    #[error("could not build audio downloader: {0}")]
    Client(String),

    #[error("download of {url} failed: {reason}")]
    Download { url: String, reason: String },

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetches one asset's bytes to its `local_path`.
pub trait AudioStager {
    fn stage(&self, asset: &AudioAsset) -> Result<(), StageError>;
}

/// Audio for a lookup, or nothing. Shape problems are logged once and dropped.
pub fn resolve_audio(lookup: Option<&LookupResult>, staging_dir: &Path) -> Vec<AudioAsset> {
    let Some(lookup) = lookup else {
        return Vec::new();
    };
    match try_resolve_audio(lookup, staging_dir) {
        Ok(assets) => assets,
        Err(warning) => {
            warn!("{}", warning);
            Vec::new()
        }
    }
}

/// Walks `Result[0].Phonetic[*].File`, one asset per entry that names a file.
pub fn try_resolve_audio(
    lookup: &LookupResult,
    staging_dir: &Path,
) -> Result<Vec<AudioAsset>, MediaResolutionWarning> {
    let phonetics = lookup
        .as_value()
        .get("Result")
        .and_then(Value::as_array)
        .ok_or_else(|| MediaResolutionWarning("lookup has no 'Result' list".to_string()))?
        .first()
        .ok_or_else(|| MediaResolutionWarning("lookup 'Result' list is empty".to_string()))?
        .get("Phonetic")
        .ok_or_else(|| MediaResolutionWarning("first result has no 'Phonetic' entry".to_string()))?
        .as_array()
        .ok_or_else(|| MediaResolutionWarning("'Phonetic' is not a list".to_string()))?;

    let mut assets = Vec::new();
    let mut used_display_names = HashSet::new();
    let mut used_local_names = HashSet::new();

    for entry in phonetics {
        let entry = entry
            .as_object()
            .ok_or_else(|| MediaResolutionWarning(format!("phonetic entry is not an object: {}", entry)))?;
        let url = match entry.get("File") {
            None | Some(Value::Null) => continue,
            Some(Value::String(url)) if url.trim().is_empty() => continue,
            Some(Value::String(url)) => url.trim(),
            Some(other) => {
                return Err(MediaResolutionWarning(format!("phonetic 'File' is not a string: {}", other)));
            }
        };
        let Some(file_name) = file_name_from_url(url) else {
            debug!(url = %url, "Skipping audio link without a file name");
            continue;
        };
        // The store keys media by display name, so those must be distinct too
        let display_name = unique_name(&file_name, &mut used_display_names);
        let local_name = unique_name(&safe_file_name(&display_name), &mut used_local_names);
        assets.push(AudioAsset {
            source_url: url.to_string(),
            local_path: staging_dir.join(local_name),
            display_name,
        });
    }
    Ok(assets)
}

/// Final path segment of a URL, without query or fragment.
pub fn file_name_from_url(url: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let path = without_fragment.split('?').next().unwrap_or(without_fragment);
    let name = path.rsplit('/').next().unwrap_or(path);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn safe_file_name(name: &str) -> String {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    let re = UNSAFE.get_or_init(|| Regex::new(r"[^\w.\-]").expect("static regex"));
    let cleaned = re.replace_all(name, "_");
    if cleaned.trim_matches('.').is_empty() {
        "audio".to_string()
    } else {
        cleaned.into_owned()
    }
}

// Two links with the same file name must not share a name
fn unique_name(name: &str, used: &mut HashSet<String>) -> String {
    if used.insert(name.to_string()) {
        return name.to_string();
    }
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, format!(".{}", ext)),
        _ => (name, String::new()),
    };
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}{}", stem, n, ext);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Stages every asset, dropping the ones that fail.
pub fn stage_audio(stager: &dyn AudioStager, assets: Vec<AudioAsset>) -> Vec<AudioAsset> {
    assets
        .into_iter()
        .filter(|asset| match stager.stage(asset) {
            Ok(()) => {
                debug!(path = %asset.local_path.display(), "Staged audio");
                true
            }
            Err(e) => {
                warn!("Skipping audio {}: {}", asset.display_name, e);
                false
            }
        })
        .collect()
}
