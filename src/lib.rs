//*** START FILE: src/lib.rs ***//

// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod types {
    pub mod card_data;
}
pub mod parsing;
pub mod prompt;
pub mod media;
pub mod clients;
pub mod submitter;
pub mod confirm;
pub mod pipeline;
pub mod card_type;

pub use config::Config;
pub use error::{FetchError, GenerationError, MissingTagError, PipelineError, SubmitError};
pub use pipeline::{Collaborators, Pipeline, PipelineOutcome};
pub use types::card_data::{AudioAsset, CardFields, CardSubmission, GenerationRequest, LookupResult};

//*** END FILE: src/lib.rs ***//
