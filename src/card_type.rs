//! Preflight for the card store: is it reachable, and does the configured
//! card type exist with the fields this tool writes to?
//!
//! Creating the card type (templates, styling) is left to the user.

use crate::clients::AnkiConnectClient;
use crate::config::CardConfig;
use crate::error::SubmitError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardTypeStatus {
    Ready,
    Missing { available: Vec<String> },
    MissingFields { fields: Vec<String> },
}

/// Fields the pipeline fills: the three text fields plus the audio field.
pub fn required_fields(card: &CardConfig) -> Vec<String> {
    let mut fields: Vec<String> = ["Front", "Back", "Extra"].iter().map(|f| f.to_string()).collect();
    if !fields.contains(&card.audio_field) {
        fields.push(card.audio_field.clone());
    }
    fields
}

/// Required fields absent from `available`, in required order.
pub fn missing_fields(required: &[String], available: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|field| !available.contains(field))
        .cloned()
        .collect()
}

pub fn check_card_type(client: &AnkiConnectClient, card: &CardConfig) -> Result<CardTypeStatus, SubmitError> {
    let model_names = client.model_names()?;
    if !model_names.contains(&card.model_name) {
        return Ok(CardTypeStatus::Missing { available: model_names });
    }
    let field_names = client.model_field_names(&card.model_name)?;
    let missing = missing_fields(&required_fields(card), &field_names);
    if missing.is_empty() {
        Ok(CardTypeStatus::Ready)
    } else {
        Ok(CardTypeStatus::MissingFields { fields: missing })
    }
}
