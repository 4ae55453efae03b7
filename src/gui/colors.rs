use eframe::egui::Color32;

/// Matched terms in dropdown rows (matches the TUI palette).
pub const HIGHLIGHT_BG: Color32 = Color32::from_rgb(255, 220, 80);
pub const HIGHLIGHT_FG: Color32 = Color32::BLACK;

pub const TEXT: Color32 = Color32::from_rgb(220, 220, 220);
pub const MUTED: Color32 = Color32::from_rgb(150, 150, 150);

/// Alternating row background for the list
pub fn row_bg(index: usize) -> Color32 {
    if index % 2 == 1 {
        Color32::from_rgb(32, 32, 42)
    } else {
        Color32::TRANSPARENT
    }
}
