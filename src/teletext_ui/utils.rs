use crossterm::style::Color;

use crate::ui::teletext::colors::tone_fg;
use crate::ui::teletext::{StyledLine, Tone};

/// Extracts the 256-colour code from a crossterm colour, with a fallback for
/// non-ANSI colours
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

/// Colour code for a text role
pub fn tone_code(tone: Tone) -> u8 {
    get_ansi_code(tone_fg(tone), 231)
}

/// Appends `line` to `buffer` at 1-based `row` and `column`, coloured per segment
pub fn push_styled_line(buffer: &mut String, line: &StyledLine, row: usize, column: usize) {
    if line.segments().is_empty() {
        return;
    }
    buffer.push_str(&format!("\x1b[{row};{column}H"));
    for segment in line.segments() {
        buffer.push_str(&format!(
            "\x1b[38;5;{}m{}",
            tone_code(segment.tone),
            segment.text
        ));
    }
    buffer.push_str("\x1b[0m");
}
