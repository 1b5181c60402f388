use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use engram_core::RecordStore;
use engram_types::StudyMode;

use crate::state::SessionState;

pub mod flashcard;
pub mod sequential;
pub mod spelling;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Top-level key dispatch: global keys first, then the active mode's handler.
pub fn handle_key(
    code: KeyCode,
    modifiers: KeyModifiers,
    session: &mut SessionState,
    store: &RecordStore,
    auto_advance: Duration,
) -> KeyOutcome {
    match code {
        KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyOutcome::Quit;
        }
        // Tab works even in spelling mode, where letter keys are input.
        KeyCode::Tab => {
            session.enter_mode(session.next_mode(), store.len());
            return KeyOutcome::Continue;
        }
        _ => {}
    }

    if session.mode != StudyMode::Spelling {
        match code {
            KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Char('1') => {
                session.enter_mode(StudyMode::Sequential, store.len());
                return KeyOutcome::Continue;
            }
            KeyCode::Char('2') => {
                session.enter_mode(StudyMode::WordToDefinition, store.len());
                return KeyOutcome::Continue;
            }
            KeyCode::Char('3') => {
                session.enter_mode(StudyMode::DefinitionToWord, store.len());
                return KeyOutcome::Continue;
            }
            KeyCode::Char('4') => {
                session.enter_mode(StudyMode::Spelling, store.len());
                return KeyOutcome::Continue;
            }
            _ => {}
        }
    }

    match session.mode {
        StudyMode::Sequential => sequential::handle_key(code, session, store),
        StudyMode::WordToDefinition | StudyMode::DefinitionToWord => {
            flashcard::handle_key(code, session, store)
        }
        StudyMode::Spelling => spelling::handle_key(code, session, store, auto_advance),
    }

    KeyOutcome::Continue
}
