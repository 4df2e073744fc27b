//! Error types for the flashcard pipeline.
//!
//! Fetch, generation and tag errors abort a run. Submit errors feed the
//! bounded retry loop in the pipeline. Media problems never surface here;
//! they degrade to an empty audio list (see `media::MediaResolutionWarning`).

use thiserror::Error;

/// Dictionary lookup failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch data for '{word}', status code {status}")]
    Status { word: String, status: u16 },

    #[error("dictionary request failed: {0}")]
    Transport(String),

    #[error("dictionary response was not valid JSON: {0}")]
    Decode(String),
}

/// Generation service failures
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Transport(String),

    #[error("generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("generation response had no message content")]
    EmptyResponse,

    #[error("missing API token: set the {0} environment variable")]
    MissingToken(String),
}

/// The generator did not follow the tagging format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not get values for tag: {tag}")]
pub struct MissingTagError {
    pub tag: String,
}

impl MissingTagError {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

/// Card store write failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The store answered with a non-null `error`, most often a duplicate note.
    #[error("failed to add card, possibly a duplicate: {0}")]
    DuplicateOrStore(String),

    /// The store could not be reached or answered with something unreadable.
    #[error("could not reach the card store, ensure Anki and AnkiConnect are running: {0}")]
    Transport(String),
}

/// Errors that end a pipeline run early
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid request: a word or a context sentence is required")]
    InvalidRequest,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("generator output did not follow the card format: {0}")]
    MissingTag(#[from] MissingTagError),

    #[error("confirmation failed: {0}")]
    Confirm(#[from] std::io::Error),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}. Please ensure it exists.")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
