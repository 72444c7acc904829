use ratatui::style::{Color, Modifier, Style};
use std::sync::OnceLock;

/// Styles for every element of the widget, built once per process.
#[derive(Debug, Clone)]
pub struct Theme {
    pub app: Style,
    pub title: Style,
    pub input: Style,
    pub input_focused: Style,
    pub counter: Style,
    pub dropdown: Style,
    pub dropdown_item: Style,
    pub dropdown_highlight: Style,
    pub pinned: Style,
    pub pinned_highlight: Style,
    pub delete_button: Style,
    pub footer: Style,
}

static THEME: OnceLock<Theme> = OnceLock::new();

pub fn stylesheet() -> &'static Theme {
    THEME.get_or_init(Theme::build)
}

impl Theme {
    fn build() -> Self {
        let app_bg = Color::Rgb(0xC4, 0xC4, 0xC4);
        let dropdown_bg = Color::Rgb(0xE3, 0xE3, 0xE3);
        let hover = Color::Rgb(0x65, 0xCD, 0xF9);
        let pinned_bg = Color::Rgb(0xE2, 0x7B, 0xEB);

        Self {
            app: Style::default().bg(app_bg).fg(Color::Black),
            title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            input: Style::default().bg(Color::White).fg(Color::Black),
            input_focused: Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::UNDERLINED),
            counter: Style::default().fg(Color::DarkGray),
            dropdown: Style::default().bg(dropdown_bg).fg(Color::Black),
            dropdown_item: Style::default()
                .bg(dropdown_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            dropdown_highlight: Style::default()
                .bg(hover)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            pinned: Style::default().bg(pinned_bg).fg(Color::Black),
            pinned_highlight: Style::default()
                .bg(pinned_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::REVERSED),
            delete_button: Style::default()
                .bg(pinned_bg)
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().fg(Color::DarkGray),
        }
    }
}
