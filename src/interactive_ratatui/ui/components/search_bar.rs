use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::theme::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const PLACEHOLDER: &str = "Enter search query... (privacy protected)";

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_searching: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query. The cursor only moves when the text actually
    /// changed, so redraws keep the user's editing position.
    pub fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.cursor_position = self.query.chars().count();
        }
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let len = chars.len();
        let mut pos = from;

        while pos < len && chars.get(pos).is_some_and(|c| !c.is_whitespace()) {
            pos += 1;
        }
        while pos < len && chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }

        pos
    }

    /// Delete characters in `start..end` and leave the cursor at `start`.
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_count() {
            return false;
        }

        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn delete_before_cursor(&mut self) -> Option<Message> {
        if self.cursor_position > 0 && self.delete_range(self.cursor_position - 1, self.cursor_position)
        {
            self.changed()
        } else {
            None
        }
    }

    fn delete_under_cursor(&mut self) -> Option<Message> {
        let pos = self.cursor_position;
        if self.delete_range(pos, pos + 1) {
            self.changed()
        } else {
            None
        }
    }

    fn title(&self) -> String {
        let mut title = if self.is_searching {
            " ⚡ Searching... ".to_string()
        } else {
            " Search ".to_string()
        };
        if let Some(msg) = &self.message {
            title.push_str(&format!("- {msg} "));
        }
        title
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let input_text = if self.query.is_empty() {
            vec![
                Span::styled(" ", Styles::input_cursor()),
                Span::styled(PLACEHOLDER, Styles::dimmed()),
            ]
        } else if self.cursor_position < self.char_count() {
            let split = self.byte_index(self.cursor_position);
            let (before, rest) = self.query.split_at(split);
            let mut rest_chars = rest.chars();
            let under = rest_chars.next().map(String::from).unwrap_or_default();

            vec![
                Span::raw(before),
                Span::styled(under, Styles::input_cursor()),
                Span::raw(rest_chars.as_str()),
            ]
        } else {
            vec![
                Span::raw(self.query.as_str()),
                Span::styled(" ", Styles::input_cursor()),
            ]
        };

        let input = Paragraph::new(Line::from(input_text))
            .block(
                Block::default()
                    .title(self.title())
                    .borders(Borders::ALL)
                    .border_style(Styles::border()),
            )
            .style(Styles::text());

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    None
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                KeyCode::Char('f') => {
                    if self.cursor_position < self.char_count() {
                        self.cursor_position += 1;
                    }
                    None
                }
                KeyCode::Char('h') => self.delete_before_cursor(),
                KeyCode::Char('d') => self.delete_under_cursor(),
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    if self.delete_range(start, self.cursor_position) {
                        self.changed()
                    } else {
                        None
                    }
                }
                KeyCode::Char('u') => {
                    if self.delete_range(0, self.cursor_position) {
                        self.changed()
                    } else {
                        None
                    }
                }
                KeyCode::Char('k') => {
                    let len = self.char_count();
                    if self.delete_range(self.cursor_position, len) {
                        self.changed()
                    } else {
                        None
                    }
                }
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter => Some(Message::SubmitQuery),
            KeyCode::Char(c) => {
                let byte_pos = self.byte_index(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                self.changed()
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_under_cursor(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                None
            }
            _ => None,
        }
    }
}
