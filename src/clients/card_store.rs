//! AnkiConnect client
//!
//! Every call is a POST of `{action, version, params}`; the answer is
//! always `{result, error}`. Interpreting `error` is the caller's job.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

use super::USER_AGENT;
use crate::error::SubmitError;
use crate::submitter::NoteRequest;

const ANKI_CONNECT_VERSION: u32 = 6;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoreResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<String>,
}

/// The write side of the card store. `Err` means the store was not reached.
pub trait CardStore {
    fn add_note(&self, note: &NoteRequest) -> Result<StoreResponse, SubmitError>;
}

#[derive(Debug, Serialize)]
struct Envelope<'a, P: Serialize> {
    action: &'a str,
    version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<P>,
}

pub struct AnkiConnectClient {
    http_client: Client,
    url: String,
}

impl AnkiConnectClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(Self {
            http_client,
            url: url.to_string(),
        })
    }

    fn invoke<P: Serialize>(&self, action: &str, params: Option<P>) -> Result<StoreResponse, SubmitError> {
        let envelope = Envelope {
            action,
            version: ANKI_CONNECT_VERSION,
            params,
        };
        tracing::debug!(action = %action, url = %self.url, "Calling card store");

        let response = self
            .http_client
            .post(&self.url)
            .json(&envelope)
            .send()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Transport(format!("card store returned {}", status)));
        }
        response
            .json::<StoreResponse>()
            .map_err(|e| SubmitError::Transport(format!("undecodable card store response: {}", e)))
    }

    /// Names of all card types (note models) the store knows.
    pub fn model_names(&self) -> Result<Vec<String>, SubmitError> {
        let response = self.invoke::<Value>("modelNames", None)?;
        string_list(response)
    }

    /// Field names of one card type, in order.
    pub fn model_field_names(&self, model_name: &str) -> Result<Vec<String>, SubmitError> {
        let response = self.invoke("modelFieldNames", Some(json!({ "modelName": model_name })))?;
        string_list(response)
    }
}

fn string_list(response: StoreResponse) -> Result<Vec<String>, SubmitError> {
    if let Some(error) = response.error {
        return Err(SubmitError::DuplicateOrStore(error));
    }
    serde_json::from_value(response.result)
        .map_err(|e| SubmitError::Transport(format!("expected a list of names: {}", e)))
}

impl CardStore for AnkiConnectClient {
    fn add_note(&self, note: &NoteRequest) -> Result<StoreResponse, SubmitError> {
        self.invoke("addNote", Some(json!({ "note": note })))
    }
}
