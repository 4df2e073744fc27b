//*** START FILE: src/pipeline.rs ***//
use std::collections::BTreeSet;
use tempfile::TempDir;
use tracing::{debug, info, warn};

use crate::clients::{CardStore, DictionaryClient, GenerationClient};
use crate::config::Config;
use crate::confirm::Confirmer;
use crate::error::{PipelineError, SubmitError};
use crate::media::{self, AudioStager};
use crate::parsing::parse_card_fields;
use crate::prompt::{build_prompt, PromptMode};
use crate::submitter::CardSubmitter;
use crate::types::card_data::{Ack, AudioAsset, CardSubmission, GenerationRequest, LookupResult};

/// How a run ended when it did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    Submitted { ack: Ack, attempts: u32 },
    /// The operator said no. `attempts` counts the writes tried before that.
    Aborted { attempts: u32 },
    RetriesExhausted { attempts: u32, last_error: SubmitError },
}

/// A card ready for confirmation, plus the mode it was generated in.
///
/// Staged audio lives in a directory owned by the card; dropping the card
/// removes it along with anything a failed download left behind.
#[derive(Debug)]
pub struct PreparedCard {
    pub mode: PromptMode,
    pub submission: CardSubmission,
    _staging: Option<TempDir>,
}

/// The external services one run talks to.
pub struct Collaborators<'a> {
    pub dictionary: &'a dyn DictionaryClient,
    pub generator: &'a dyn GenerationClient,
    pub stager: &'a dyn AudioStager,
    pub store: &'a dyn CardStore,
}

pub struct Pipeline<'a> {
    config: &'a Config,
    dictionary: &'a dyn DictionaryClient,
    generator: &'a dyn GenerationClient,
    stager: &'a dyn AudioStager,
    submitter: CardSubmitter<'a>,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, collaborators: Collaborators<'a>) -> Self {
        Self {
            config,
            dictionary: collaborators.dictionary,
            generator: collaborators.generator,
            stager: collaborators.stager,
            submitter: CardSubmitter::new(collaborators.store, &config.card.audio_field),
        }
    }

    /// Lookup, generate, parse, stage audio, then confirm and submit.
    pub fn run(
        &self,
        word: &str,
        context: Option<&str>,
        confirmer: &mut dyn Confirmer,
    ) -> Result<PipelineOutcome, PipelineError> {
        let prepared = self.prepare(word, context)?;
        let outcome = self.confirm_and_submit(&prepared.submission, confirmer);
        drop(prepared);
        outcome
    }

    /// Everything up to the confirmation gate. No writes happen here.
    pub fn prepare(&self, word: &str, context: Option<&str>) -> Result<PreparedCard, PipelineError> {
        let word = word.trim();
        let context = context.map(str::trim).filter(|c| !c.is_empty());
        if word.is_empty() && context.is_none() {
            return Err(PipelineError::InvalidRequest);
        }

        // --- 1. Dictionary lookup (skipped in sentence mode) ---
        let lookup = if word.is_empty() {
            debug!("No word given, skipping dictionary lookup");
            None
        } else {
            info!(word = %word, "Looking up word");
            let lookup = LookupResult::from_raw(self.dictionary.lookup(word)?);
            debug!("Dictionary result:\n{}", lookup.to_pretty_json());
            Some(lookup)
        };

        // --- 2. Prompt ---
        let request = GenerationRequest::new(lookup, context.map(String::from))?;
        let mode = PromptMode::of(&request);
        let prompt = build_prompt(&request);
        debug!(mode = ?mode, "System prompt:\n{}", prompt);

        // --- 3. Generate and parse ---
        info!(mode = ?mode, "Generating card");
        let chat_response = self.generator.generate(prompt)?;
        debug!("Generator response:\n{}", chat_response);
        let fields = parse_card_fields(&chat_response)?;

        // --- 4. Audio ---
        let (audio, staging) = match request.lookup() {
            Some(lookup) => self.stage_lookup_audio(lookup),
            None => (Vec::new(), None),
        };

        let deck_name = match mode {
            PromptMode::Dictionary => self.config.decks.dictionary.clone(),
            PromptMode::Sentence => self.config.decks.sentence.clone(),
        };
        let submission = CardSubmission {
            deck_name,
            card_type_name: self.config.card.model_name.clone(),
            fields,
            tags: self.config.card.tags.iter().cloned().collect::<BTreeSet<_>>(),
            audio,
        };
        Ok(PreparedCard { mode, submission, _staging: staging })
    }

    /// Stages a lookup's audio into a fresh directory under the configured parent.
    fn stage_lookup_audio(&self, lookup: &LookupResult) -> (Vec<AudioAsset>, Option<TempDir>) {
        let parent = &self.config.pipeline.staging_dir;
        let staging = match tempfile::Builder::new().prefix("cardweave-").tempdir_in(parent) {
            Ok(dir) => dir,
            Err(e) => {
                warn!(dir = %parent.display(), "Could not create audio staging directory, continuing without audio: {}", e);
                return (Vec::new(), None);
            }
        };
        let assets = media::resolve_audio(Some(lookup), staging.path());
        if assets.is_empty() {
            return (Vec::new(), None);
        }
        info!(count = assets.len(), dir = %staging.path().display(), "Staging audio");
        (media::stage_audio(self.stager, assets), Some(staging))
    }

    /// The confirmation gate and bounded retry loop.
    ///
    /// Each attempt is confirmed first; "no" ends the run without a write.
    /// Store rejections and transport failures both use up an attempt.
    pub fn confirm_and_submit(
        &self,
        submission: &CardSubmission,
        confirmer: &mut dyn Confirmer,
    ) -> Result<PipelineOutcome, PipelineError> {
        let max_attempts = self.config.pipeline.max_submit_attempts.max(1);
        let mut attempt = 1;
        loop {
            if !confirmer.confirm(submission, attempt)? {
                info!("Exiting without adding the card.");
                return Ok(PipelineOutcome::Aborted { attempts: attempt - 1 });
            }
            match self.submitter.submit(submission) {
                Ok(ack) => {
                    info!(deck = %submission.deck_name, result = %ack.result, "Card added");
                    return Ok(PipelineOutcome::Submitted { ack, attempts: attempt });
                }
                Err(e) => {
                    warn!(attempt, max_attempts, "{}", e);
                    if attempt >= max_attempts {
                        return Ok(PipelineOutcome::RetriesExhausted {
                            attempts: attempt,
                            last_error: e,
                        });
                    }
                    attempt += 1;
                }
            }
        }
    }
}

impl PipelineOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, PipelineOutcome::Submitted { .. })
    }
}

//*** END FILE: src/pipeline.rs ***//
