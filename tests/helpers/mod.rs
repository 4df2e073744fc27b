//! Stub collaborators for driving the pipeline without a network.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fs;

use serde_json::{json, Value};

use cardweave::clients::{CardStore, DictionaryClient, GenerationClient, StoreResponse};
use cardweave::confirm::Confirmer;
use cardweave::media::{AudioStager, StageError};
use cardweave::prompt::Prompt;
use cardweave::submitter::NoteRequest;
use cardweave::{AudioAsset, CardFields, CardSubmission, FetchError, GenerationError, SubmitError};

pub const EXAMPLE_ONE_RESPONSE: &str = "Sure! Here is the card.\n\
<Front>mild, minor</Front>\n\
<Back>lindrig | mild</Back>\n\
<Extra>(lindrigt, lindriga)<br> Inte allvarlig, obetydlig, lätt<br><br><i>She only suffered minor injuries in the accident.</i><br>hon fick bara lindriga skador vid olyckan</Extra>\n";

pub const SENTENCE_RESPONSE: &str = "<Back>När går nästa färja?</Back>\n\
<Front>When does the next ferry go?</Front>\n\
<Extra><i>färja = ferry</i></Extra>";

/// Lexin-shaped payload for "lindrig", with identifier keys and no sound file.
pub fn lindrig_payload() -> Value {
    json!({
        "Status": "found",
        "Result": [{
            "Value": "lindrig",
            "ID": 1234,
            "VariantID": "1",
            "Type": "adj.",
            "Inflection": ["lindrigt", "lindriga"],
            "Lexeme": [{
                "ID": 99,
                "Definition": "inte allvarlig, obetydlig, lätt",
                "Example": [{ "ID": 7, "Content": "hon fick bara lindriga skador vid olyckan" }]
            }],
            "Phonetic": [{ "Content": "lin:drig" }]
        }]
    })
}

pub fn payload_with_sound(urls: &[&str]) -> Value {
    let phonetics: Vec<Value> = urls.iter().map(|u| json!({ "File": u, "Content": "x" })).collect();
    json!({ "Status": "found", "Result": [{ "Value": "gå", "ID": 5, "Phonetic": phonetics }] })
}

pub struct StubDictionary {
    pub payload: Value,
    pub lookups: RefCell<Vec<String>>,
}

impl StubDictionary {
    pub fn new(payload: Value) -> Self {
        Self { payload, lookups: RefCell::new(Vec::new()) }
    }
}

impl DictionaryClient for StubDictionary {
    fn lookup(&self, word: &str) -> Result<Value, FetchError> {
        self.lookups.borrow_mut().push(word.to_string());
        Ok(self.payload.clone())
    }
}

pub struct StubGenerator {
    pub response: String,
    pub prompts: RefCell<Vec<String>>,
}

impl StubGenerator {
    pub fn new(response: &str) -> Self {
        Self { response: response.to_string(), prompts: RefCell::new(Vec::new()) }
    }
}

impl GenerationClient for StubGenerator {
    fn generate(&self, prompt: Prompt) -> Result<String, GenerationError> {
        self.prompts.borrow_mut().push(prompt.into_string());
        Ok(self.response.clone())
    }
}

/// Writes a few fake bytes instead of downloading.
pub struct FileStager {
    pub staged: Cell<u32>,
}

impl FileStager {
    pub fn new() -> Self {
        Self { staged: Cell::new(0) }
    }
}

impl AudioStager for FileStager {
    fn stage(&self, asset: &AudioAsset) -> Result<(), StageError> {
        fs::write(&asset.local_path, b"ID3").map_err(|source| StageError::Write {
            path: asset.local_path.clone(),
            source,
        })?;
        self.staged.set(self.staged.get() + 1);
        Ok(())
    }
}

/// Writes part of the file, then fails as a dropped connection would.
pub struct TruncatingStager;

impl AudioStager for TruncatingStager {
    fn stage(&self, asset: &AudioAsset) -> Result<(), StageError> {
        fs::write(&asset.local_path, b"ID").map_err(|source| StageError::Write {
            path: asset.local_path.clone(),
            source,
        })?;
        Err(StageError::Download {
            url: asset.source_url.clone(),
            reason: "connection reset".to_string(),
        })
    }
}

/// Accepts notes and rejects ones whose fields it already holds.
#[derive(Default)]
pub struct DedupStore {
    pub notes: RefCell<Vec<NoteRequest>>,
    pub attempts: Cell<u32>,
    /// Whether every staged file existed when the note arrived
    pub audio_present: RefCell<Vec<bool>>,
}

impl CardStore for DedupStore {
    fn add_note(&self, note: &NoteRequest) -> Result<StoreResponse, SubmitError> {
        self.attempts.set(self.attempts.get() + 1);
        self.audio_present
            .borrow_mut()
            .push(note.audio.iter().all(|a| std::path::Path::new(&a.path).exists()));
        let mut notes = self.notes.borrow_mut();
        if notes.iter().any(|n| n.fields == note.fields) {
            return Ok(StoreResponse {
                result: Value::Null,
                error: Some("cannot create note because it is a duplicate".to_string()),
            });
        }
        notes.push(note.clone());
        Ok(StoreResponse { result: json!(1_700_000_000_000i64 + notes.len() as i64), error: None })
    }
}

/// Says yes and remembers what it was shown.
#[derive(Default)]
pub struct RecordingConfirmer {
    pub shown: Vec<CardFields>,
}

impl Confirmer for RecordingConfirmer {
    fn confirm(&mut self, submission: &CardSubmission, _attempt: u32) -> std::io::Result<bool> {
        self.shown.push(submission.fields.clone());
        Ok(true)
    }
}
