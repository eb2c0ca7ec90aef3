use ratatui::style::{Color, Modifier, Style};

// Phosphor-green terminal palette
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Green;
    pub const BRIGHT: Color = Color::LightGreen;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const FRAME: Color = Color::Gray;
    pub const ALERT: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const SELECTION_BG: Color = Color::Rgb(0, 48, 0);
}

pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::BRIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(ColorScheme::PRIMARY)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn badge() -> Style {
        Style::default().fg(ColorScheme::BRIGHT)
    }

    pub fn border() -> Style {
        Style::default().fg(ColorScheme::PRIMARY)
    }

    pub fn monitor_frame() -> Style {
        Style::default().fg(ColorScheme::FRAME)
    }

    pub fn status_ok() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn banner() -> Style {
        Style::default()
            .fg(ColorScheme::BRIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn cursor() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::SLOW_BLINK)
    }

    pub fn url() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn tag() -> Style {
        Style::default().fg(Color::Black).bg(ColorScheme::PRIMARY)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn message() -> Style {
        Style::default().fg(ColorScheme::WARNING)
    }

    pub fn input_cursor() -> Style {
        Style::default().bg(ColorScheme::PRIMARY).fg(Color::Black)
    }
}
