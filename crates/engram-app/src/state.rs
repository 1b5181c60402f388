use std::time::Instant;

use engram_types::StudyMode;
use rand::Rng;

/// Result of the last spelling check, shown until the card changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong { answer: String },
}

/// In-memory session state owned by the controller.
///
/// `current_index` is the persisted sequential-mode cursor; quiz modes draw
/// into `quiz_index` and never touch it.
pub struct SessionState {
    pub mode: StudyMode,
    pub current_index: usize,
    pub show_definition: bool,
    pub quiz_index: usize,
    pub revealed: bool,
    pub input: String,
    pub feedback: Option<Feedback>,
    /// One-shot deadline for advancing after a correct spelling answer.
    pub auto_advance_at: Option<Instant>,
}

impl SessionState {
    pub fn new(start_index: usize) -> Self {
        Self {
            mode: StudyMode::Sequential,
            current_index: start_index,
            show_definition: true,
            quiz_index: 0,
            revealed: false,
            input: String::new(),
            feedback: None,
            auto_advance_at: None,
        }
    }

    /// Sequential navigation wraps at both ends.
    pub fn next_word(&mut self, len: usize) {
        self.current_index = (self.current_index + 1) % len;
    }

    pub fn prev_word(&mut self, len: usize) {
        self.current_index = (self.current_index + len - 1) % len;
    }

    pub fn toggle_definition(&mut self) {
        self.show_definition = !self.show_definition;
    }

    /// Switch modes, resetting any quiz state.
    pub fn enter_mode(&mut self, mode: StudyMode, len: usize) {
        self.mode = mode;
        match mode {
            StudyMode::Sequential => {
                self.show_definition = true;
                self.feedback = None;
                self.auto_advance_at = None;
                self.input.clear();
            }
            _ => self.draw_card(len),
        }
    }

    pub fn next_mode(&self) -> StudyMode {
        match self.mode {
            StudyMode::Sequential => StudyMode::WordToDefinition,
            StudyMode::WordToDefinition => StudyMode::DefinitionToWord,
            StudyMode::DefinitionToWord => StudyMode::Spelling,
            StudyMode::Spelling => StudyMode::Sequential,
        }
    }

    /// Draw a fresh quiz card: uniform over the whole list, with
    /// replacement, so repeats are possible.
    pub fn draw_card(&mut self, len: usize) {
        self.quiz_index = rand::rng().random_range(0..len);
        self.revealed = false;
        self.input.clear();
        self.feedback = None;
        self.auto_advance_at = None;
    }
}
