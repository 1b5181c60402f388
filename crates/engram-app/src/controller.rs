use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use engram_config::Config;
use engram_core::{ProgressTracker, RecordStore};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::events::{self, KeyOutcome};
use crate::state::SessionState;
use crate::ui;

/// Owns the terminal, the loaded word list, and the session state.
///
/// Single-threaded throughout: keys are handled to completion between
/// draws, and the spelling auto-advance is a deadline checked from the poll
/// loop rather than a timer task.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    store: RecordStore,
    tracker: ProgressTracker,
    session: SessionState,
    tick_rate: Duration,
    auto_advance: Duration,
}

impl App {
    pub fn new(store: RecordStore, tracker: ProgressTracker, config: &Config) -> Result<Self> {
        let start_index = tracker.load(store.len());
        tracing::info!("resuming at word {}/{}", start_index + 1, store.len());

        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;

        Ok(Self {
            terminal,
            store,
            tracker,
            session: SessionState::new(start_index),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            auto_advance: Duration::from_millis(config.ui.auto_advance_ms),
        })
    }

    /// Run until the user quits, then restore the terminal and flush the
    /// cursor. The save happens exactly once, on this path only.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();

        self.restore_terminal();

        if let Err(e) = self.tracker.save(self.session.current_index) {
            // Never let a failed save take down a session that already
            // happened in memory.
            tracing::error!("failed to save progress: {e}");
        } else {
            tracing::info!("progress saved at word {}", self.session.current_index + 1);
        }

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.terminal
                .draw(|frame| ui::draw(frame, &self.session, &self.store))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let outcome = events::handle_key(
                            key.code,
                            key.modifiers,
                            &mut self.session,
                            &self.store,
                            self.auto_advance,
                        );
                        if outcome == KeyOutcome::Quit {
                            return Ok(());
                        }
                    }
                }
            }

            // One-shot delayed advance after a correct spelling answer.
            if let Some(deadline) = self.session.auto_advance_at {
                if Instant::now() >= deadline {
                    self.session.draw_card(self.store.len());
                }
            }
        }
    }

    fn restore_terminal(&mut self) {
        disable_raw_mode().ok();
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).ok();
        self.terminal.show_cursor().ok();
    }
}
