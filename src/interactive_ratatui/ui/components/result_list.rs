use crate::interactive_ratatui::constants::PAGE_SIZE;
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::theme::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crate::search::models::SearchResult;
use crate::session::SessionView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

pub const SCANNING_TEXT: &str = "⚡ Scanning secure networks...";
pub const COMPLETED_TEXT: &str = "Search completed anonymously";
pub const FOOTER_TEXT: &str = "End of results • Search performed anonymously • No data logged";

pub fn empty_results_text(query: &str) -> String {
    format!("No results found for \"{query}\". Try different keywords.")
}

#[derive(Default)]
pub struct ResultList {
    results: Vec<SearchResult>,
    query: String,
    has_searched: bool,
    is_searching: bool,
    state: ListState,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_view(&mut self, view: &SessionView<'_>) {
        self.has_searched = view.has_searched();
        self.is_searching = view.is_searching();
        if self.query != view.query {
            self.query = view.query.to_string();
        }
        if self.results != view.results {
            self.results = view.results.to_vec();
            self.state.select(if self.results.is_empty() { None } else { Some(0) });
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.results.len() {
            self.state.select(Some(index));
        }
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.state.selected().and_then(|i| self.results.get(i))
    }

    fn select(&mut self, index: usize) -> Option<Message> {
        if self.results.is_empty() {
            return None;
        }
        let index = index.min(self.results.len() - 1);
        if self.state.selected() == Some(index) {
            return None;
        }
        self.state.select(Some(index));
        Some(Message::SelectResult(index))
    }

    fn card(result: &SearchResult, width: usize) -> ListItem<'_> {
        let mut lines = vec![
            Line::from(Span::styled(result.title.as_str(), Styles::title())),
            Line::from(Span::styled(result.url.as_str(), Styles::url())),
        ];

        // Cards keep a fixed height, so long snippets are cut to one line
        lines.push(Line::from(Span::styled(
            truncate(&result.snippet, width),
            Styles::text(),
        )));

        if !result.tags().is_empty() {
            let mut spans = Vec::new();
            for tag in result.tags() {
                spans.push(Span::styled(format!(" {tag} "), Styles::tag()));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        ListItem::new(lines)
    }

    fn render_centered(f: &mut Frame, area: Rect, text: String) {
        let paragraph = Paragraph::new(text)
            .style(Styles::text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.has_searched {
            return;
        }
        if self.is_searching {
            Self::render_centered(f, area, SCANNING_TEXT.to_string());
            return;
        }
        if self.results.is_empty() {
            Self::render_centered(f, area, empty_results_text(&self.query));
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(0),    // Cards
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Search Results ({} found)", self.results.len()),
                Styles::title(),
            ),
            Span::raw("  "),
            Span::styled(COMPLETED_TEXT, Styles::dimmed()),
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Styles::border()),
        );
        f.render_widget(title, chunks[0]);

        let width = chunks[1].width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|result| Self::card(result, width))
            .collect();
        let list = List::new(items)
            .highlight_style(Styles::selected())
            .highlight_symbol("▌ ");
        f.render_stateful_widget(list, chunks[1], &mut self.state);

        let footer = Paragraph::new(FOOTER_TEXT)
            .style(Styles::dimmed())
            .alignment(Alignment::Center);
        f.render_widget(footer, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let current = self.selected_index();
        let last = self.results.len().saturating_sub(1);

        match key.code {
            KeyCode::Up => self.select(current.saturating_sub(1)),
            KeyCode::Down => self.select(current + 1),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.select(current.saturating_sub(1))
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.select(current + 1)
            }
            KeyCode::PageUp => self.select(current.saturating_sub(PAGE_SIZE)),
            KeyCode::PageDown => self.select(current + PAGE_SIZE),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(last),
            KeyCode::Char('y') if key.modifiers == KeyModifiers::CONTROL => self
                .selected_result()
                .map(|result| Message::CopyUrl(result.url.clone())),
            _ => None,
        }
    }
}
