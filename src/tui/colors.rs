use ratatui::style::{Color, Modifier, Style};

pub const STATUS_BG: Color = Color::Rgb(0, 95, 135);
pub const POPUP_BG: Color = Color::Rgb(25, 25, 35);

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn button(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD)
    }
}

/// Matched terms in dropdown rows
pub fn highlight() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn placeholder() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn no_results() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC)
}

/// Alternating row background for the list
pub fn row_bg(index: usize) -> Color {
    if index % 2 == 1 {
        Color::Rgb(25, 25, 35)
    } else {
        Color::Reset
    }
}
