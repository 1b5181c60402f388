use engram_core::RecordStore;
use engram_types::{StudyMode, WordRecord};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{Feedback, SessionState};

pub fn draw(frame: &mut Frame, session: &SessionState, store: &RecordStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], session, store);
    render_card(frame, chunks[1], session, store);
    render_footer(frame, chunks[2], session);
}

fn render_header(frame: &mut Frame, area: Rect, session: &SessionState, store: &RecordStore) {
    let mut spans = vec![
        Span::styled("Engram", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  |  "),
        Span::styled(session.mode.label(), Style::default().fg(Color::Cyan)),
    ];

    if session.mode == StudyMode::Sequential {
        spans.push(Span::raw(format!(
            "  {}/{}",
            session.current_index + 1,
            store.len()
        )));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_card(frame: &mut Frame, area: Rect, session: &SessionState, store: &RecordStore) {
    let word = match session.mode {
        StudyMode::Sequential => store.get(session.current_index),
        _ => store.get(session.quiz_index),
    };
    // The store is non-empty and indices stay in bounds, but an empty card
    // beats a panic inside the draw closure.
    let Some(word) = word else { return };

    let mut lines = vec![Line::raw("")];

    match session.mode {
        StudyMode::Sequential => {
            lines.push(headword_line(word));
            lines.push(phonetics_line(word));
            if session.show_definition {
                lines.push(Line::raw(""));
                lines.push(definition_line(word));
            }
        }
        StudyMode::WordToDefinition => {
            lines.push(headword_line(word));
            lines.push(phonetics_line(word));
            if session.revealed {
                lines.push(Line::raw(""));
                lines.push(definition_line(word));
            }
        }
        StudyMode::DefinitionToWord => {
            lines.push(definition_line(word));
            if session.revealed {
                lines.push(Line::raw(""));
                lines.push(headword_line(word));
                lines.push(phonetics_line(word));
            }
        }
        StudyMode::Spelling => {
            lines.push(phonetics_line(word));
            lines.push(definition_line(word));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("> {}_", session.input),
                Style::default().fg(Color::Yellow),
            )));
            if let Some(feedback) = &session.feedback {
                lines.push(Line::raw(""));
                lines.push(feedback_line(feedback));
            }
        }
    }

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(card, area);
}

fn headword_line(word: &WordRecord) -> Line<'_> {
    Line::from(Span::styled(
        word.headword.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn phonetics_line(word: &WordRecord) -> Line<'_> {
    Line::from(Span::styled(
        word.phonetics.as_str(),
        Style::default().fg(Color::DarkGray),
    ))
}

fn definition_line(word: &WordRecord) -> Line<'_> {
    Line::raw(word.definition.as_str())
}

fn feedback_line(feedback: &Feedback) -> Line<'_> {
    match feedback {
        Feedback::Correct => Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green),
        )),
        Feedback::Wrong { answer } => Line::from(Span::styled(
            format!("Wrong, the answer is: {answer}"),
            Style::default().fg(Color::Red),
        )),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, session: &SessionState) {
    let hints = match session.mode {
        StudyMode::Sequential => "n/→ next  p/← prev  d toggle definition  1-4 mode  q quit",
        StudyMode::WordToDefinition | StudyMode::DefinitionToWord => {
            "space reveal  n/→ next card  1-4 mode  q quit"
        }
        StudyMode::Spelling => "type the word, Enter checks  → next card  Tab mode  Esc quit",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
