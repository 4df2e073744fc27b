//*** START FILE: src/submitter.rs ***//
use serde::Serialize;

use crate::clients::card_store::CardStore;
use crate::error::SubmitError;
use crate::types::card_data::{Ack, CardFields, CardSubmission};

/// The `note` object of an `addNote` call.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    pub deck_name: String,
    pub model_name: String,
    pub fields: CardFields,
    pub tags: Vec<String>,
    pub options: NoteOptions,
    pub audio: Vec<NoteMedia>,
    pub video: Vec<NoteMedia>,
    pub picture: Vec<NoteMedia>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    pub allow_duplicate: bool,
}

/// A staged file and the card fields it is attached to.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NoteMedia {
    pub path: String,
    pub filename: String,
    pub fields: Vec<String>,
}

pub struct CardSubmitter<'a> {
    store: &'a dyn CardStore,
    audio_field: String,
}

impl<'a> CardSubmitter<'a> {
    pub fn new(store: &'a dyn CardStore, audio_field: &str) -> Self {
        Self {
            store,
            audio_field: audio_field.to_string(),
        }
    }

    pub fn build_note(&self, submission: &CardSubmission) -> NoteRequest {
        NoteRequest {
            deck_name: submission.deck_name.clone(),
            model_name: submission.card_type_name.clone(),
            fields: submission.fields.clone(),
            tags: submission.tags.iter().cloned().collect(),
            // Never let the store silently keep a near-identical second card
            options: NoteOptions { allow_duplicate: false },
            audio: submission
                .audio
                .iter()
                .map(|asset| NoteMedia {
                    path: asset.local_path.to_string_lossy().into_owned(),
                    filename: asset.display_name.clone(),
                    fields: vec![self.audio_field.clone()],
                })
                .collect(),
            video: Vec::new(),
            picture: Vec::new(),
        }
    }

    /// One write attempt. A non-null `error` from the store is a rejection,
    /// usually a duplicate; failing to reach the store is a transport error.
    pub fn submit(&self, submission: &CardSubmission) -> Result<Ack, SubmitError> {
        let note = self.build_note(submission);
        let response = self.store.add_note(&note)?;
        match response.error {
            Some(error) => Err(SubmitError::DuplicateOrStore(error)),
            None => Ok(Ack { result: response.result }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::card_store::StoreResponse;
    use crate::types::card_data::AudioAsset;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    /// Rejects a note whose fields it has already stored, like the real store does.
    #[derive(Default)]
    struct DedupStore {
        stored: RefCell<Vec<NoteRequest>>,
    }

    impl CardStore for DedupStore {
        fn add_note(&self, note: &NoteRequest) -> Result<StoreResponse, SubmitError> {
            let mut stored = self.stored.borrow_mut();
            if !note.options.allow_duplicate && stored.iter().any(|n| n.fields.front == note.fields.front) {
                return Ok(StoreResponse {
                    result: Value::Null,
                    error: Some("cannot create note because it is a duplicate".to_string()),
                });
            }
            stored.push(note.clone());
            Ok(StoreResponse { result: json!(1000 + stored.len() as i64), error: None })
        }
    }

    struct DownStore;

    impl CardStore for DownStore {
        fn add_note(&self, _note: &NoteRequest) -> Result<StoreResponse, SubmitError> {
            Err(SubmitError::Transport("connection refused".to_string()))
        }
    }

    fn submission() -> CardSubmission {
        CardSubmission {
            deck_name: "Swedish +".to_string(),
            card_type_name: "Basic (and reversed card with media)".to_string(),
            fields: CardFields {
                front: "mild, minor".to_string(),
                back: "lindrig | mild".to_string(),
                extra: "(lindrigt, lindriga)".to_string(),
            },
            tags: BTreeSet::from(["swedish".to_string(), "auto-generated".to_string()]),
            audio: vec![AudioAsset {
                source_url: "http://lexin.nada.kth.se/sound/lindrig.mp3".to_string(),
                local_path: PathBuf::from("/tmp/lindrig.mp3"),
                display_name: "lindrig.mp3".to_string(),
            }],
        }
    }

    #[test]
    fn note_matches_store_contract() {
        let store = DedupStore::default();
        let submitter = CardSubmitter::new(&store, "Audio");
        let note = serde_json::to_value(submitter.build_note(&submission())).unwrap();
        assert_eq!(
            note,
            json!({
                "deckName": "Swedish +",
                "modelName": "Basic (and reversed card with media)",
                "fields": { "Front": "mild, minor", "Back": "lindrig | mild", "Extra": "(lindrigt, lindriga)" },
                "tags": ["auto-generated", "swedish"],
                "options": { "allowDuplicate": false },
                "audio": [{ "path": "/tmp/lindrig.mp3", "filename": "lindrig.mp3", "fields": ["Audio"] }],
                "video": [],
                "picture": []
            })
        );
    }

    #[test]
    fn second_identical_submission_is_a_duplicate() {
        let store = DedupStore::default();
        let submitter = CardSubmitter::new(&store, "Audio");

        let ack = submitter.submit(&submission()).unwrap();
        assert_eq!(ack.note_id(), Some(1001));

        let err = submitter.submit(&submission()).unwrap_err();
        assert!(matches!(err, SubmitError::DuplicateOrStore(ref msg) if msg.contains("duplicate")));
        assert_eq!(store.stored.borrow().len(), 1);
    }

    #[test]
    fn unreachable_store_is_a_transport_error() {
        let submitter = CardSubmitter::new(&DownStore, "Audio");
        assert_eq!(
            submitter.submit(&submission()).unwrap_err(),
            SubmitError::Transport("connection refused".to_string())
        );
    }
}
//*** END FILE: src/submitter.rs ***//
