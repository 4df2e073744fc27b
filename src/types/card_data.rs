//*** START FILE: src/types/card_data.rs ***//
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::PipelineError;

/// Identifier keys the dictionary attaches everywhere; useless to the generator.
pub const PRUNED_KEYS: [&str; 2] = ["ID", "VariantID"];

/// Removes every key in `keys` from all objects in `data`, at any depth.
pub fn remove_keys(data: Value, keys: &[&str]) -> Value {
    match data {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .map(|(k, v)| (k, remove_keys(v, keys)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|item| remove_keys(item, keys)).collect())
        }
        other => other,
    }
}

/// A dictionary entry with its identifier keys stripped.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct LookupResult(Value);

impl LookupResult {
    pub fn from_raw(raw: Value) -> Self {
        LookupResult(remove_keys(raw, &PRUNED_KEYS))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn to_json(&self) -> String {
        self.0.to_string()
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.to_json())
    }
}

/// What the generator is asked to work from.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    WordOnly(LookupResult),
    WordAndContext(LookupResult, String),
    ContextOnly(String),
}

impl GenerationRequest {
    /// The only way to build a request. Blank context counts as absent.
    pub fn new(lookup: Option<LookupResult>, context: Option<String>) -> Result<Self, PipelineError> {
        let context = context.filter(|c| !c.trim().is_empty());
        match (lookup, context) {
            (Some(lookup), None) => Ok(GenerationRequest::WordOnly(lookup)),
            (Some(lookup), Some(context)) => Ok(GenerationRequest::WordAndContext(lookup, context)),
            (None, Some(context)) => Ok(GenerationRequest::ContextOnly(context)),
            (None, None) => Err(PipelineError::InvalidRequest),
        }
    }

    pub fn lookup(&self) -> Option<&LookupResult> {
        match self {
            GenerationRequest::WordOnly(lookup) | GenerationRequest::WordAndContext(lookup, _) => Some(lookup),
            GenerationRequest::ContextOnly(_) => None,
        }
    }

    pub fn is_sentence_mode(&self) -> bool {
        matches!(self, GenerationRequest::ContextOnly(_))
    }
}

/// The card's three text fields, named the way the card type names them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CardFields {
    #[serde(rename = "Front")]
    pub front: String,
    #[serde(rename = "Back")]
    pub back: String,
    #[serde(rename = "Extra")]
    pub extra: String,
}

/// One pronunciation file, staged locally for the duration of a submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AudioAsset {
    pub source_url: String,
    pub local_path: PathBuf,
    pub display_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CardSubmission {
    pub deck_name: String,
    pub card_type_name: String,
    pub fields: CardFields,
    pub tags: BTreeSet<String>,
    pub audio: Vec<AudioAsset>,
}

/// The store's `result` for an accepted note.
#[derive(Debug, Clone, PartialEq)]
pub struct Ack {
    pub result: Value,
}

impl Ack {
    pub fn note_id(&self) -> Option<i64> {
        self.result.as_i64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contains_key(value: &Value, key: &str) -> bool {
        match value {
            Value::Object(map) => map.contains_key(key) || map.values().any(|v| contains_key(v, key)),
            Value::Array(items) => items.iter().any(|v| contains_key(v, key)),
            _ => false,
        }
    }

    #[test]
    fn pruning_reaches_every_depth() {
        let raw = json!({
            "Status": "found",
            "ID": 1,
            "Result": [{
                "Value": "mild",
                "VariantID": "7",
                "Lexeme": [{ "ID": 9, "Definition": "inte allvarlig", "Example": [{ "ID": 3, "Content": "en lindrig skada" }] }],
                "Phonetic": [{ "File": "http://example.org/mild.mp3", "ID": 12 }]
            }]
        });
        let pruned = LookupResult::from_raw(raw);
        assert!(!contains_key(pruned.as_value(), "ID"));
        assert!(!contains_key(pruned.as_value(), "VariantID"));
        assert_eq!(
            pruned.as_value(),
            &json!({
                "Status": "found",
                "Result": [{
                    "Value": "mild",
                    "Lexeme": [{ "Definition": "inte allvarlig", "Example": [{ "Content": "en lindrig skada" }] }],
                    "Phonetic": [{ "File": "http://example.org/mild.mp3" }]
                }]
            })
        );
    }

    #[test]
    fn pruning_leaves_scalars_and_lookalike_keys() {
        let raw = json!(["ID", { "Id": 1, "IDs": [2], "VariantIDs": null }, 4.5]);
        assert_eq!(LookupResult::from_raw(raw.clone()).as_value(), &raw);
    }

    #[test]
    fn request_factory_selects_mode() {
        let lookup = LookupResult::from_raw(json!({ "Result": [] }));

        let word_only = GenerationRequest::new(Some(lookup.clone()), None).unwrap();
        assert!(matches!(word_only, GenerationRequest::WordOnly(_)));

        let both = GenerationRequest::new(Some(lookup), Some("hon är mild".to_string())).unwrap();
        assert!(matches!(both, GenerationRequest::WordAndContext(_, ref context) if context == "hon är mild"));
        assert!(both.lookup().is_some());

        let sentence = GenerationRequest::new(None, Some("when does the next ferry go?".to_string())).unwrap();
        assert!(sentence.is_sentence_mode());
        assert!(sentence.lookup().is_none());
    }

    #[test]
    fn request_factory_rejects_empty_input() {
        assert!(matches!(GenerationRequest::new(None, None), Err(PipelineError::InvalidRequest)));
        assert!(matches!(
            GenerationRequest::new(None, Some("   ".to_string())),
            Err(PipelineError::InvalidRequest)
        ));
    }

    #[test]
    fn card_fields_serialize_with_card_type_names() {
        let fields = CardFields { front: "mild".into(), back: "lindrig".into(), extra: String::new() };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({ "Front": "mild", "Back": "lindrig", "Extra": "" })
        );
    }
}
//*** END FILE: src/types/card_data.rs ***//
