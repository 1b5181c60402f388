use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::ui::UiConfig;

pub mod ui;

/// Application context, built once at startup and passed down explicitly.
/// Nothing below this struct reads ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tab-separated vocabulary file (headword, phonetics, definition).
    pub vocabulary_file: PathBuf,
    /// JSON document holding the sequential-mode cursor.
    pub progress_file: PathBuf,

    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        let vocabulary_file = env::var("ENGRAM_WORDS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/words_with_phonetics.txt"));

        let progress_file = env::var("ENGRAM_PROGRESS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("progress.json"));

        Config {
            vocabulary_file,
            progress_file,
            ui: UiConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
