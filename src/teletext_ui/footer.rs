//! Footer line: navigation controls, loading spinner and error marker

use crate::teletext_ui::utils::get_ansi_code;
use crate::ui::teletext::colors::*;
use crate::ui::teletext::loading_indicator::LoadingIndicator;

/// Text shown inside the footer bar
pub fn footer_text(
    total_pages: usize,
    loading_indicator: Option<&LoadingIndicator>,
    error_warning_active: bool,
) -> String {
    let controls = if total_pages > 1 {
        "q=Lopeta ←→=Sivut"
    } else {
        "q=Lopeta"
    };

    let mut text = match loading_indicator {
        Some(loading) => format!(
            "{controls} {} {}",
            loading.current_frame(),
            loading.message()
        ),
        None => controls.to_string(),
    };

    if error_warning_active {
        text.push_str("  ⚠️");
    }
    text
}

/// Appends the footer bar at 0-based row `footer_y` to `buffer`
pub fn render_footer(
    buffer: &mut String,
    footer_y: usize,
    width: usize,
    total_pages: usize,
    loading_indicator: Option<&LoadingIndicator>,
    error_warning_active: bool,
) {
    let text = footer_text(total_pages, loading_indicator, error_warning_active);
    let footer_width = width.saturating_sub(6);
    let header_bg_code = get_ansi_code(header_bg(), 21);
    let text_fg_code = get_ansi_code(text_fg(), 231);

    buffer.push_str(&format!(
        "\x1b[{};1H\x1b[48;5;{}m{}\x1b[38;5;{}m{:^width$}{}\x1b[0m",
        footer_y + 1,
        header_bg_code,
        "   ",
        text_fg_code,
        text,
        "   ",
        width = footer_width
    ));
}

pub fn calculate_footer_position(
    ignore_height_limit: bool,
    current_line: usize,
    screen_height: u16,
) -> usize {
    if ignore_height_limit {
        // Non-interactive: directly below the content
        current_line + 1
    } else {
        // Interactive: last terminal row
        screen_height.saturating_sub(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_footer_position_interactive() {
        assert_eq!(calculate_footer_position(false, 10, 24), 23);
    }

    #[test]
    fn test_calculate_footer_position_non_interactive() {
        assert_eq!(calculate_footer_position(true, 10, 24), 11);
    }

    #[test]
    fn test_footer_text_variants() {
        assert_eq!(footer_text(1, None, false), "q=Lopeta");
        assert_eq!(footer_text(3, None, false), "q=Lopeta ←→=Sivut");

        let loading = LoadingIndicator::new("Haetaan otteluita...");
        assert_eq!(
            footer_text(1, Some(&loading), true),
            "q=Lopeta | Haetaan otteluita...  ⚠️"
        );
    }

    #[test]
    fn test_render_footer_positions_bar() {
        let mut buffer = String::new();
        render_footer(&mut buffer, 23, 80, 1, None, false);
        assert!(buffer.starts_with("\x1b[24;1H"));
        assert!(buffer.contains("q=Lopeta"));
        assert!(buffer.ends_with("\x1b[0m"));
    }
}
