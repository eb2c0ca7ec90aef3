use crate::boot::{BootEvent, BootView};
use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::models::Typewriter;
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::search::models::NON_NAVIGABLE_URL;
use std::time::Duration;

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub boot: BootView,
    pub search: SearchState,
    pub ui: UiState,
}

pub struct SearchState {
    /// Text currently in the search bar. The submitted query lives in the
    /// session controller.
    pub query: String,
    pub selected_index: usize,
    pub result_count: usize,
}

pub struct UiState {
    pub message: Option<String>,
    pub greeting: Typewriter,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Boot,
            boot: BootView::default(),
            search: SearchState {
                query: String::new(),
                selected_index: 0,
                result_count: 0,
            },
            ui: UiState {
                message: None,
                greeting: Typewriter::new(
                    GREETING_TEXT,
                    Duration::from_millis(GREETING_CHAR_INTERVAL_MS),
                ),
            },
        }
    }

    /// State for a session that starts directly on the search screen.
    pub fn without_boot() -> Self {
        let mut state = Self::new();
        state.boot.complete = true;
        state.mode = Mode::Search;
        state
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::Boot(event) => {
                if self.boot.complete {
                    return Command::None;
                }
                self.boot.apply(&event);
                if event == BootEvent::Complete {
                    self.mode = Mode::Search;
                    Command::MountSearch
                } else {
                    Command::None
                }
            }
            Message::QueryChanged(q) => {
                self.search.query = q;
                Command::None
            }
            Message::SubmitQuery => {
                let query = self.search.query.trim();
                if query.is_empty() {
                    return Command::None;
                }
                self.search.selected_index = 0;
                self.ui.message = Some("[searching...]".to_string());
                Command::SubmitSearch(query.to_string())
            }
            Message::SearchResolved { result_count } => {
                // Degraded results look like any other result set.
                self.search.result_count = result_count;
                self.search.selected_index = 0;
                self.ui.message = None;
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.result_count {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::ShowHelp => {
                if self.mode == Mode::Search {
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = Mode::Search;
                }
                Command::None
            }
            Message::CopyUrl(url) => {
                if url.is_empty() || url == NON_NAVIGABLE_URL {
                    self.ui.message = Some("Result is not navigable".to_string());
                    Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
                } else {
                    Command::CopyToClipboard(url)
                }
            }
            Message::GreetingTick(elapsed) => {
                self.ui.greeting.reveal(elapsed);
                Command::None
            }
        }
    }
}
