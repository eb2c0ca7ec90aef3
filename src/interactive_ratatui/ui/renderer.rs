use crate::interactive_ratatui::constants::{
    EXIT_PROMPT, HEADER_HEIGHT, NOTICE_HEIGHT, SEARCH_BAR_HEIGHT,
};
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component,
    boot_screen::BootScreen,
    header::Header,
    help_dialog::HelpDialog,
    is_exit_prompt,
    result_list::ResultList,
    search_bar::SearchBar,
    theme::{ColorScheme, Styles},
};
use crate::session::SessionView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub const PRIVACY_NOTICE: &str =
    "Your search is encrypted and anonymous. We don't store your queries or track your activity.";
pub const KEY_HINTS: &str = "Enter: Search | ↑/↓: Select | Ctrl+Y: Copy URL | F1: Help | Esc: Quit";

#[derive(Default)]
pub struct Renderer {
    boot_screen: BootScreen,
    header: Header,
    search_bar: SearchBar,
    result_list: ResultList,
    help_dialog: HelpDialog,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState, session: SessionView<'_>) {
        match state.mode {
            Mode::Boot => self.render_boot_mode(f, state),
            Mode::Search => self.render_search_mode(f, state, session),
            Mode::Help => self.render_help_mode(f, state, session),
        }
    }

    fn render_boot_mode(&mut self, f: &mut Frame, state: &AppState) {
        self.boot_screen.set_view(&state.boot);
        self.boot_screen.render(f, f.area());
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState, session: SessionView<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(NOTICE_HEIGHT),
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Status line
            ])
            .split(f.area());

        self.header.set_greeting(state.ui.greeting.visible());

        self.search_bar.set_query(state.search.query.clone());
        self.search_bar.set_searching(session.is_searching());
        let message = if is_exit_prompt(&state.ui.message) {
            None
        } else {
            state.ui.message.clone()
        };
        self.search_bar.set_message(message);

        self.result_list.set_view(&session);
        self.result_list.set_selected_index(state.search.selected_index);

        self.header.render(f, chunks[0]);
        self.search_bar.render(f, chunks[1]);

        let notice = Paragraph::new(Line::from(vec![
            Span::styled("🛡 ", Styles::text()),
            Span::styled(PRIVACY_NOTICE, Styles::text()),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(notice, chunks[2]);

        self.result_list.render(f, chunks[3]);

        let status = if is_exit_prompt(&state.ui.message) {
            Paragraph::new(EXIT_PROMPT).style(
                Style::default()
                    .fg(ColorScheme::ALERT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Paragraph::new(KEY_HINTS).style(Styles::dimmed())
        };
        f.render_widget(status.alignment(Alignment::Center), chunks[4]);
    }

    fn render_help_mode(&mut self, f: &mut Frame, state: &AppState, session: SessionView<'_>) {
        // First render the search mode underneath
        self.render_search_mode(f, state, session);
        self.help_dialog.render(f, f.area());
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
