//! Colors of the dark theme and the styles built from them.

use ratatui::style::{Color, Modifier, Style};

pub const BASE_TEXT: Color = Color::Rgb(0xec, 0xf9, 0xff);
pub const PRIMARY: Color = Color::Rgb(0x60, 0x5d, 0xff);
pub const PRIMARY_TEXT: Color = Color::Rgb(0xed, 0xf1, 0xfe);
pub const ACCENT: Color = Color::Rgb(0x00, 0xd3, 0xbb);

// 256-color indexes shared by the table chrome
pub const BORDER: Color = Color::Indexed(62);
pub const MUTED: Color = Color::Indexed(240);
pub const SELECTED_FG: Color = Color::Indexed(229);
pub const SELECTED_BG: Color = Color::Indexed(57);

pub fn text() -> Style {
    Style::default().fg(BASE_TEXT)
}

pub fn tab_active() -> Style {
    Style::default()
        .fg(PRIMARY_TEXT)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    text()
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn table_header() -> Style {
    Style::default()
        .fg(BASE_TEXT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn row_selected() -> Style {
    Style::default().fg(SELECTED_FG).bg(SELECTED_BG)
}

pub fn help() -> Style {
    Style::default().fg(MUTED)
}

pub fn detail() -> Style {
    Style::default().fg(ACCENT)
}
