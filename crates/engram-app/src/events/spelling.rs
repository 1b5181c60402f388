use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use engram_core::RecordStore;

use crate::state::{Feedback, SessionState};

/// Spelling test: type the headword given its phonetics and definition.
pub fn handle_key(
    code: KeyCode,
    session: &mut SessionState,
    store: &RecordStore,
    auto_advance: Duration,
) {
    match code {
        KeyCode::Char(c) => session.input.push(c),
        KeyCode::Backspace => {
            session.input.pop();
        }
        KeyCode::Right => session.draw_card(store.len()),
        KeyCode::Enter => check_answer(session, store, auto_advance),
        _ => {}
    }
}

/// Case-insensitive comparison against the headword; input is trimmed.
/// A correct answer schedules the one-shot auto-advance; a wrong one reveals
/// the answer and leaves the input editable for another try.
fn check_answer(session: &mut SessionState, store: &RecordStore, auto_advance: Duration) {
    if session.feedback == Some(Feedback::Correct) {
        // Already correct, just waiting on the timer.
        return;
    }

    let Some(word) = store.get(session.quiz_index) else {
        return;
    };

    if session.input.trim().to_lowercase() == word.headword.to_lowercase() {
        session.feedback = Some(Feedback::Correct);
        session.auto_advance_at = Some(Instant::now() + auto_advance);
    } else {
        session.feedback = Some(Feedback::Wrong {
            answer: word.headword.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use engram_types::StudyMode;

    use super::*;
    use crate::events::test_support::store;

    const ADVANCE: Duration = Duration::from_millis(1000);

    fn spelling_session(store: &RecordStore) -> SessionState {
        let mut session = SessionState::new(0);
        session.enter_mode(StudyMode::Spelling, store.len());
        session
    }

    fn type_answer(session: &mut SessionState, store: &RecordStore, answer: &str) {
        for c in answer.chars() {
            handle_key(KeyCode::Char(c), session, store, ADVANCE);
        }
        handle_key(KeyCode::Enter, session, store, ADVANCE);
    }

    #[test]
    fn correct_answer_schedules_auto_advance() {
        let store = store(&[("cat", "[kæt]", "A small domesticated animal.")]);
        let mut session = spelling_session(&store);
        type_answer(&mut session, &store, "cat");
        assert_eq!(session.feedback, Some(Feedback::Correct));
        assert!(session.auto_advance_at.is_some());
    }

    #[test]
    fn comparison_ignores_case_and_surrounding_whitespace() {
        let store = store(&[("Cat", "[kæt]", "A small domesticated animal.")]);
        let mut session = spelling_session(&store);
        type_answer(&mut session, &store, "  cAT ");
        assert_eq!(session.feedback, Some(Feedback::Correct));
    }

    #[test]
    fn wrong_answer_reveals_the_headword() {
        let store = store(&[("cat", "[kæt]", "A small domesticated animal.")]);
        let mut session = spelling_session(&store);
        type_answer(&mut session, &store, "kat");
        assert_eq!(
            session.feedback,
            Some(Feedback::Wrong {
                answer: "cat".into()
            })
        );
        assert!(session.auto_advance_at.is_none());
    }

    #[test]
    fn wrong_answer_can_be_retried() {
        let store = store(&[("cat", "[kæt]", "A small domesticated animal.")]);
        let mut session = spelling_session(&store);
        type_answer(&mut session, &store, "kat");

        // Fix the input and resubmit.
        for _ in 0..3 {
            handle_key(KeyCode::Backspace, &mut session, &store, ADVANCE);
        }
        type_answer(&mut session, &store, "cat");
        assert_eq!(session.feedback, Some(Feedback::Correct));
    }

    #[test]
    fn resubmitting_while_correct_keeps_the_original_deadline() {
        let store = store(&[("cat", "[kæt]", "A small domesticated animal.")]);
        let mut session = spelling_session(&store);
        type_answer(&mut session, &store, "cat");
        let deadline = session.auto_advance_at;
        handle_key(KeyCode::Enter, &mut session, &store, ADVANCE);
        assert_eq!(session.auto_advance_at, deadline);
    }

    #[test]
    fn right_arrow_skips_to_a_fresh_card() {
        let store = store(&[("cat", "[kæt]", "A small domesticated animal.")]);
        let mut session = spelling_session(&store);
        type_answer(&mut session, &store, "kat");
        handle_key(KeyCode::Right, &mut session, &store, ADVANCE);
        assert!(session.input.is_empty());
        assert!(session.feedback.is_none());
    }
}
