//! Prompt construction for the two generation modes.
//!
//! Dictionary mode works from a pruned lookup (optionally with a user
//! sentence woven into Extra). Sentence mode works from free text alone.
//! Building a prompt is pure string assembly; nothing here talks to the
//! generation service.

pub mod templates;

use std::fmt;

use crate::types::card_data::{GenerationRequest, LookupResult};
use templates::*;

/// A rendered instruction for the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which instruction set a request uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Dictionary,
    Sentence,
}

impl PromptMode {
    pub fn of(request: &GenerationRequest) -> Self {
        if request.is_sentence_mode() {
            PromptMode::Sentence
        } else {
            PromptMode::Dictionary
        }
    }
}

pub fn build_prompt(request: &GenerationRequest) -> Prompt {
    let system_prompt = match request {
        GenerationRequest::WordOnly(lookup) => dictionary_prompt(lookup, None),
        GenerationRequest::WordAndContext(lookup, context) => dictionary_prompt(lookup, Some(context)),
        GenerationRequest::ContextOnly(context) => sentence_prompt(context),
    };
    Prompt(system_prompt)
}

fn dictionary_prompt(lookup: &LookupResult, context: Option<&str>) -> String {
    let mut prompt = String::new();
    prompt.push_str(DICTIONARY_INSTRUCTIONS);
    if let Some(context) = context {
        prompt.push('\n');
        prompt.push_str(CONTEXT_WEAVE_INSTRUCTIONS);
        prompt.push_str(context.trim());
        prompt.push('\n');
    }
    prompt.push('\n');
    prompt.push_str(DICTIONARY_EXAMPLES);
    prompt.push('\n');
    prompt.push_str(INPUT_JSON_LABEL);
    prompt.push_str(&lookup.to_json());
    prompt.push('\n');
    prompt
}

fn sentence_prompt(context: &str) -> String {
    let mut prompt = String::new();
    prompt.push_str(SENTENCE_INSTRUCTIONS);
    prompt.push('\n');
    prompt.push_str(SENTENCE_EXAMPLES);
    prompt.push('\n');
    prompt.push_str(USER_INPUT_LABEL);
    prompt.push_str(context.trim());
    prompt.push('\n');
    prompt
}
