// Helper utilities for TUI components
use ratatui::style::Color;
use tracing::warn;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse color from string
/// Accepts named colors and "#RRGGBB"; anything else falls back to `fallback`
pub fn parse_color(color: &str, fallback: Color) -> Color {
    let normalized = color.trim().to_lowercase();
    if let Some(hex) = normalized.strip_prefix('#') {
        if hex.len() == 6 {
            if let Ok(value) = u32::from_str_radix(hex, 16) {
                return hex_color(value);
            }
        }
    }
    match normalized.as_str() {
        "default" | "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Color::DarkGray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        _ => {
            warn!(color, ?fallback, "unknown color name, using fallback");
            fallback
        }
    }
}
