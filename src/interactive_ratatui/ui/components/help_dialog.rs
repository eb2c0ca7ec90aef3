use crate::interactive_ratatui::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::theme::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "CyberSearch - Anonymous Web Search",
                Styles::title(),
            )]),
            Line::from(Span::styled(
                "No logs • No tracking • Complete privacy",
                Styles::dimmed(),
            )),
            Line::from(""),
            Line::from(vec![Span::styled("Search:", Styles::banner())]),
            Line::from("  Enter        - Submit the query"),
            Line::from("  ↑/↓          - Select a result"),
            Line::from("  Ctrl+P/N     - Select a result"),
            Line::from("  PgUp/PgDn    - Jump a page of results"),
            Line::from("  Home/End     - First/last result"),
            Line::from("  Ctrl+Y       - Copy the selected URL"),
            Line::from(""),
            Line::from(vec![Span::styled("Editing:", Styles::banner())]),
            Line::from("  Ctrl+A/E     - Start/end of line"),
            Line::from("  Ctrl+B/F     - Move one character"),
            Line::from("  Alt+B/F      - Move one word"),
            Line::from("  Ctrl+W       - Delete previous word"),
            Line::from("  Ctrl+U/K     - Delete to start/end of line"),
            Line::from(""),
            Line::from(vec![Span::styled("General:", Styles::banner())]),
            Line::from("  F1           - Show this help"),
            Line::from("  Esc          - Quit"),
            Line::from("  Ctrl+C (x2)  - Quit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Styles::border()),
            )
            .style(Styles::text())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
