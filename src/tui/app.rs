//! TUI application state and event handling.
//!
//! The `App` struct owns all interactive state and runs the main event loop
//! via `run()`. It manages:
//!
//! - **Query input**: a single editable line, submitted with Enter
//! - **History recall**: Up/Down walk the shared history cache into the
//!   input line, preserving whatever was typed before recall started
//! - **Session observation**: the loop snapshots the query session every
//!   tick, so lookups settling on the tokio runtime show up on the next
//!   frame without any callback plumbing into the UI
//! - **Status messages**: transient feedback for clipboard operations
//! - **Dirty state tracking**: rendering only when state changes

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::history::HistoryCache;
use crate::query::{QuerySession, SessionState};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Transient status message with expiry
#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    expires_at: Instant,
}

pub struct App {
    history: Arc<Mutex<HistoryCache>>,
    session: QuerySession,
    input: String,
    // History recall state
    recall_index: Option<usize>,
    saved_input: String,
    // Status message (clipboard feedback, etc.)
    status_message: Option<StatusMessage>,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
    last_session_state: SessionState,
}

impl App {
    /// Create the app; a seed query (clipboard word or most recent history
    /// entry) is submitted immediately when present.
    pub fn new(
        history: Arc<Mutex<HistoryCache>>,
        session: QuerySession,
        seed: Option<String>,
    ) -> Self {
        let mut app = Self {
            history,
            session,
            input: String::new(),
            recall_index: None,
            saved_input: String::new(),
            status_message: None,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
            last_session_state: SessionState::Idle,
        };

        if let Some(seed) = seed {
            app.input = seed;
            app.submit_input();
        }

        app
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // A lookup settling on the runtime changes session state
            // between ticks; notice it here
            let session_state = self.session.state();
            if session_state != self.last_session_state {
                self.last_session_state = session_state.clone();
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let history_entries = self.history_snapshot();
                terminal.draw(|f| {
                    let state = RenderState {
                        input: &self.input,
                        history: &history_entries,
                        history_selected: self.recall_index,
                        session_state: &session_state,
                        status_message: self.status_message.as_ref().map(|m| m.text.as_str()),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => return,
            Action::Quit => self.should_quit = true,
            Action::ClearInput => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.recall_index = None;
                    self.session.reset();
                }
            }
            Action::Submit => self.submit_input(),
            Action::HistoryPrev => self.recall(1),
            Action::HistoryNext => self.recall(-1),
            Action::CopyResult => self.copy_result(),
            Action::InputChar(c) => {
                self.input.push(c);
                self.recall_index = None;
            }
            Action::DeleteChar => {
                self.input.pop();
                self.recall_index = None;
            }
        }
        self.needs_redraw = true;
    }

    /// Submit the input line as a query; blank input is a silent no-op
    fn submit_input(&mut self) {
        if self.session.submit(&self.input) {
            self.recall_index = None;
            // A submit ends any recall; the pre-recall input must not
            // resurface later
            self.saved_input.clear();
        }
    }

    /// Walk the history list into the input line.
    ///
    /// `direction` is +1 towards older entries, -1 back towards the input
    /// the user had typed before recall started. Walking forward with no
    /// recall in progress is a no-op: there is nothing to return to, and
    /// the typed input must stay untouched.
    fn recall(&mut self, direction: isize) {
        let entries = self.history_snapshot();
        if entries.is_empty() {
            return;
        }

        let next = match (self.recall_index, direction) {
            (None, 1) => {
                self.saved_input = self.input.clone();
                Some(0)
            }
            (None, _) => return,
            (Some(i), 1) => Some((i + 1).min(entries.len() - 1)),
            (Some(0), _) => None,
            (Some(i), _) => Some(i - 1),
        };

        self.recall_index = next;
        self.input = match next {
            Some(i) => entries[i].clone(),
            None => self.saved_input.clone(),
        };
    }

    fn copy_result(&mut self) {
        let text = match self.session.state() {
            SessionState::Success(result) => result.plain_text(),
            _ => {
                self.set_status("✗ No result to copy", STATUS_ERROR_DURATION_MS);
                return;
            }
        };

        match copy_to_clipboard(&text) {
            Ok(()) => self.set_status("✓ Result copied to clipboard", STATUS_SUCCESS_DURATION_MS),
            Err(err) => self.set_status(format!("✗ Copy failed: {}", err), STATUS_ERROR_DURATION_MS),
        }
    }

    fn history_snapshot(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }
}
