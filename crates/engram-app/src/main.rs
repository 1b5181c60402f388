use std::path::PathBuf;

use clap::{Parser, Subcommand};
use engram_config::Config;
use engram_core::{ProgressTracker, RecordStore};
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod export;
mod state;
mod ui;

#[derive(Parser)]
#[command(name = "engram", about = "Vocabulary flashcards in the terminal")]
struct Cli {
    /// Vocabulary file (tab-separated: headword, phonetics, definition)
    #[arg(long)]
    words: Option<PathBuf>,

    /// Progress file holding the sequential-mode cursor
    #[arg(long)]
    progress: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the vocabulary as a Markdown checklist table
    Export {
        /// Output path for the Markdown file
        #[arg(long, short)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::new();
    if let Some(words) = cli.words {
        config.vocabulary_file = words;
    }
    if let Some(progress) = cli.progress {
        config.progress_file = progress;
    }

    let store = RecordStore::load(&config.vocabulary_file)?;

    if store.skipped_lines() > 0 {
        tracing::warn!(
            "skipped {} malformed line(s) in {}",
            store.skipped_lines(),
            config.vocabulary_file.display()
        );
    }

    // Both fatal conditions must surface before any UI is shown.
    if store.is_empty() {
        anyhow::bail!(
            "'{}' is empty or not in headword<TAB>phonetics<TAB>definition format",
            config.vocabulary_file.display()
        );
    }

    if let Some(Command::Export { output }) = cli.command {
        export::write_markdown(&store, &output)?;
        println!("Exported {} words to {}", store.len(), output.display());
        return Ok(());
    }

    tracing::info!(
        "loaded {} words from {}",
        store.len(),
        config.vocabulary_file.display()
    );

    let tracker = ProgressTracker::new(&config.progress_file);
    let mut app = controller::App::new(store, tracker, &config)?;
    app.run()
}
