use crate::boot::{BootView, LineKind, STATUS_PREFIX, classify_line};
use crate::interactive_ratatui::constants::{MONITOR_HEIGHT, MONITOR_WIDTH};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::theme::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

pub const MONITOR_BRAND: &str = " CYBER-MON v2.1 ";
pub const BOOT_CURSOR: &str = "█";

/// The framed monitor that replays the boot transcript.
#[derive(Default)]
pub struct BootScreen {
    view: BootView,
}

impl BootScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_view(&mut self, view: &BootView) {
        if self.view != *view {
            self.view = view.clone();
        }
    }

    /// Area of the monitor frame. While the transition runs the monitor
    /// fills the whole screen.
    pub fn monitor_area(&self, area: Rect) -> Rect {
        if self.view.transitioning {
            return area;
        }
        let width = MONITOR_WIDTH.min(area.width);
        let height = MONITOR_HEIGHT.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    fn styled_line(line: &str) -> Line<'_> {
        match classify_line(line) {
            LineKind::Status => {
                let rest = &line[STATUS_PREFIX.len()..];
                Line::from(vec![
                    Span::styled(STATUS_PREFIX, Styles::status_ok()),
                    Span::styled(rest, Styles::text()),
                ])
            }
            LineKind::Banner => Line::from(Span::styled(line, Styles::banner())),
            LineKind::Plain => Line::from(Span::styled(line, Styles::text())),
        }
    }

    fn visible_lines(&self, rows: usize) -> Vec<Line<'_>> {
        let cursor_rows = usize::from(self.view.is_typing());
        let capacity = rows.saturating_sub(cursor_rows);
        let skip = self.view.transcript.len().saturating_sub(capacity);

        let mut lines: Vec<Line> = self
            .view
            .transcript
            .iter()
            .skip(skip)
            .map(|line| Self::styled_line(line))
            .collect();

        if self.view.is_typing() {
            lines.push(Line::from(Span::styled(BOOT_CURSOR, Styles::cursor())));
        }
        lines
    }
}

impl Component for BootScreen {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let monitor = self.monitor_area(area);
        f.render_widget(Clear, monitor);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Styles::monitor_frame())
            .title_bottom(Line::from(Span::styled(MONITOR_BRAND, Styles::dimmed())).centered());
        let inner = block.inner(monitor);

        let screen = Paragraph::new(self.visible_lines(inner.height as usize)).block(block);
        f.render_widget(screen, monitor);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // The boot sequence cannot be interrupted from inside the monitor
        None
    }
}
