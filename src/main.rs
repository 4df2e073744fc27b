//*** START FILE: src/main.rs ***//
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardweave::card_type::{check_card_type, CardTypeStatus};
use cardweave::clients::{AnkiConnectClient, ChatCompletionClient, HttpAudioStager, LexinClient};
use cardweave::config::load_config;
use cardweave::confirm::{AutoConfirm, Confirmer, TerminalConfirmer};
use cardweave::{Collaborators, Pipeline, PipelineOutcome};

/// Generate an Anki card for a Swedish word, a sentence, or both.
#[derive(Parser, Debug)]
#[command(name = "cardweave")]
#[command(version)]
struct Args {
    /// The Swedish word to look up. Pass "" to build a card from the context alone.
    #[arg(required_unless_present = "check")]
    word: Option<String>,

    /// Optional sentence or request to add context to the card
    context: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, env = "CARDWEAVE_CONFIG")]
    config: Option<String>,

    /// Generation model, overrides the config file
    #[arg(short, long)]
    model: Option<String>,

    /// Add the card without asking
    #[arg(short, long)]
    yes: bool,

    /// Only check that the card store has the configured card type
    #[arg(long)]
    check: bool,

    /// Log prompts and responses
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "cardweave=debug" } else { "cardweave=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(model) = args.model {
        config.generation.model = model;
    }
    let timeout = config.http.timeout();

    let store = AnkiConnectClient::new(&config.card_store.url, timeout)
        .context("Failed to build card store client")?;

    if args.check {
        return run_check(&store, &config);
    }

    let dictionary = LexinClient::new(&config.dictionary, timeout)
        .context("Failed to build dictionary client")?;
    let generator = ChatCompletionClient::from_config(&config.generation, timeout)
        .context("Failed to build generation client")?;
    let stager = HttpAudioStager::new(timeout).context("Failed to build audio downloader")?;
    info!(model = %generator.model(), "Using generation model");

    let pipeline = Pipeline::new(
        &config,
        Collaborators {
            dictionary: &dictionary,
            generator: &generator,
            stager: &stager,
            store: &store,
        },
    );

    let mut confirmer: Box<dyn Confirmer> = if args.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(TerminalConfirmer::stdio())
    };

    let outcome = pipeline.run(args.word.as_deref().unwrap_or(""), args.context.as_deref(), confirmer.as_mut())?;
    match outcome {
        PipelineOutcome::Submitted { ack, attempts } => match ack.note_id() {
            Some(note_id) => println!("Card added (note {}, attempts: {}).", note_id, attempts),
            None => println!("Card added (result: {}, attempts: {}).", ack.result, attempts),
        },
        PipelineOutcome::Aborted { .. } => {
            println!("No card added.");
        }
        PipelineOutcome::RetriesExhausted { attempts, last_error } => {
            error!(attempts, "Giving up on adding the card: {}", last_error);
        }
    }
    Ok(())
}

fn run_check(store: &AnkiConnectClient, config: &cardweave::Config) -> Result<()> {
    let status = check_card_type(store, &config.card)
        .context("Anki is not running or AnkiConnect is not installed")?;
    match status {
        CardTypeStatus::Ready => {
            println!("Card type '{}' is ready.", config.card.model_name);
        }
        CardTypeStatus::Missing { available } => {
            println!(
                "Card type '{}' does not exist. Available card types: {}",
                config.card.model_name,
                available.join(", ")
            );
        }
        CardTypeStatus::MissingFields { fields } => {
            println!(
                "Card type '{}' is missing the fields: {}",
                config.card.model_name,
                fields.join(", ")
            );
        }
    }
    Ok(())
}
//*** END FILE: src/main.rs ***//
