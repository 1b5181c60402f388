use crossterm::event::KeyCode;
use engram_core::RecordStore;

use crate::state::SessionState;

/// Sequential review: manual forward/backward navigation over the whole
/// list, with the definition toggleable. The only mode that moves the
/// persisted cursor.
pub fn handle_key(code: KeyCode, session: &mut SessionState, store: &RecordStore) {
    match code {
        KeyCode::Char('n') | KeyCode::Right => session.next_word(store.len()),
        KeyCode::Char('p') | KeyCode::Left => session.prev_word(store.len()),
        KeyCode::Char('d') | KeyCode::Char(' ') => session.toggle_definition(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::test_support::store;

    #[test]
    fn next_and_prev_move_the_cursor() {
        let store = store(&[
            ("cat", "[kæt]", "A small domesticated animal."),
            ("dog", "[dɒg]", "A loyal pet."),
        ]);
        let mut session = SessionState::new(0);

        handle_key(KeyCode::Char('n'), &mut session, &store);
        assert_eq!(session.current_index, 1);
        handle_key(KeyCode::Left, &mut session, &store);
        assert_eq!(session.current_index, 0);
        handle_key(KeyCode::Char('p'), &mut session, &store);
        assert_eq!(session.current_index, 1);
    }

    #[test]
    fn definition_toggles() {
        let store = store(&[("cat", "[kæt]", "A small domesticated animal.")]);
        let mut session = SessionState::new(0);
        assert!(session.show_definition);
        handle_key(KeyCode::Char('d'), &mut session, &store);
        assert!(!session.show_definition);
        handle_key(KeyCode::Char(' '), &mut session, &store);
        assert!(session.show_definition);
    }
}
