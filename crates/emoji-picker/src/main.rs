//! Emoji picker - command line preview.
//!
//! Loads an emoji dataset, builds the picker rows for a filter and skin tone,
//! and prints them the way the results list would show them.

use std::path::PathBuf;

use clap::Parser;
use emoji_core::{Categories, EmojiId, EmojiTable, PickerConfig, SkinTone};
use emoji_picker::PickerState;

// =============================================================================
// Arguments
// =============================================================================

/// Emoji picker - print the picker rows for a dataset
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON emoji dataset
    #[arg(value_name = "FILE")]
    dataset: PathBuf,

    /// Search text; empty browses by category
    #[arg(default_value = "")]
    filter: String,

    /// Skin tone code applied to recent emojis (e.g. 1F3FD)
    #[arg(long = "skin", value_name = "TONE")]
    skin_tone: Option<SkinTone>,

    /// Recently used emoji ids, most relevant first
    #[arg(long, value_name = "ID,ID", value_delimiter = ',')]
    recent: Vec<EmojiId>,

    /// Config file to use instead of the default picker.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// =============================================================================
// Initialization
// =============================================================================

/// Load config, dataset and categories, then build the picker state.
fn create_state(cli: &Cli) -> Result<PickerState, String> {
    let mut config = match &cli.config {
        Some(path) => PickerConfig::load_from(path),
        None => PickerConfig::load(),
    }
    .map_err(|e| format!("Failed to load config: {}", e))?;

    if let Some(tone) = &cli.skin_tone {
        config.skin_tone = tone.clone();
    }
    tracing::debug!(?config, "Config loaded");

    let emojis = EmojiTable::load(&cli.dataset)
        .map_err(|e| format!("Failed to load dataset: {}", e))?;
    tracing::info!("Loaded {} emojis from {}", emojis.len(), cli.dataset.display());

    let categories = Categories::from_table(&emojis);
    let mut state = PickerState::new(emojis, categories, &config)
        .map_err(|e| format!("Failed to build emoji rows: {}", e))?;

    state.set_recent(cli.recent.clone());
    state.set_filter(cli.filter.clone());
    Ok(state)
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let state = match create_state(&cli) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if state.is_search_empty() {
        println!("No results for \"{}\"", state.filter());
        return;
    }

    println!("{}", state.layout().render_text());

    let offsets = state.layout().offsets();
    for (category, offset) in offsets.categories.iter().zip(&offsets.offsets) {
        tracing::info!("{category} ends at {offset}px");
    }
}
