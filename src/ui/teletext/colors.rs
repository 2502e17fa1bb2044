use crossterm::style::Color;

use super::styled_line::Tone;

// Teletext palette
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn result_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn heading_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn muted_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green

/// Palette colour for a text role
pub fn tone_fg(tone: Tone) -> Color {
    match tone {
        Tone::Heading => heading_fg(),
        Tone::Text => text_fg(),
        Tone::Score => result_fg(),
        Tone::Muted => muted_fg(),
        Tone::Error => error_fg(),
    }
}
