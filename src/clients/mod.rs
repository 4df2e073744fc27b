//! Blocking HTTP adapters for the external services.

pub mod audio;
pub mod card_store;
pub mod dictionary;
pub mod generation;

pub use audio::HttpAudioStager;
pub use card_store::{AnkiConnectClient, CardStore, StoreResponse};
pub use dictionary::{DictionaryClient, LexinClient};
pub use generation::{ChatCompletionClient, GenerationClient};

const USER_AGENT: &str = concat!("cardweave/", env!("CARGO_PKG_VERSION"));
