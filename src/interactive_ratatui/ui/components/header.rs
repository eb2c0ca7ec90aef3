use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::theme::{ColorScheme, Styles};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const APP_TITLE: &str = "CyberSearch";
pub const APP_VERSION: &str = "v1.0";
pub const BADGES: [&str; 3] = ["Privacy: ON", "Encrypted", "No Tracking"];

/// Title bar with the privacy badges, followed by the typewriter greeting.
#[derive(Default)]
pub struct Header {
    greeting: String,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_greeting(&mut self, visible: &str) {
        if self.greeting != visible {
            self.greeting = visible.to_string();
        }
    }

    fn badge_line() -> Line<'static> {
        let mut spans = Vec::new();
        for (i, badge) in BADGES.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            // The tracking badge carries the red eye marker
            let marker_style = if i == BADGES.len() - 1 {
                Style::default().fg(ColorScheme::ALERT)
            } else {
                Styles::text()
            };
            spans.push(Span::styled("● ", marker_style));
            spans.push(Span::styled(*badge, Styles::badge()));
        }
        Line::from(spans).right_aligned()
    }
}

impl Component for Header {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title bar
                Constraint::Length(1), // Greeting
            ])
            .split(area);

        let title_bar = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)])
            .split(chunks[0]);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(format!(">_ {APP_TITLE} "), Styles::title()),
            Span::styled(APP_VERSION, Styles::dimmed()),
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Styles::border()),
        );
        f.render_widget(title, title_bar[0]);

        let badges = Paragraph::new(Self::badge_line()).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Styles::border()),
        );
        f.render_widget(badges, title_bar[1]);

        let greeting = Paragraph::new(Line::from(vec![
            Span::styled(self.greeting.as_str(), Styles::text()),
            Span::styled("█", Styles::cursor()),
        ]));
        f.render_widget(greeting, chunks[1]);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
