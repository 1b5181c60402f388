use crossterm::event::KeyCode;
use engram_core::RecordStore;

use crate::state::SessionState;

/// Flashcard quiz, both directions: one side of a random card is shown,
/// reveal exposes the rest, next draws a fresh card.
pub fn handle_key(code: KeyCode, session: &mut SessionState, store: &RecordStore) {
    match code {
        KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Enter => session.revealed = true,
        KeyCode::Char('n') | KeyCode::Right => session.draw_card(store.len()),
        _ => {}
    }
}
