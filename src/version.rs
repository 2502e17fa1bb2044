use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

/// Frames `lines` in a double-line box, the first line split off as a title
fn status_box(lines: &[String]) -> Vec<String> {
    let inner = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let rule = "═".repeat(inner + 2);
    let mut out = vec![format!("╔{rule}╗")];
    for (i, line) in lines.iter().enumerate() {
        out.push(format!("║ {line:<inner$} ║"));
        if i == 0 && lines.len() > 2 {
            out.push(format!("╠{rule}╣"));
        }
    }
    out.push(format!("╚{rule}╝"));
    out
}

/// Prints the program name and version in a teletext coloured box
pub fn print_version() {
    let lines = vec![
        "Football Scores 235".to_string(),
        String::new(),
        format!("{CRATE_NAME} {CURRENT_VERSION}"),
        "Data: football-data.org v1".to_string(),
    ];
    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(51)), // Teletext cyan
        Print(format!("{}\n", status_box(&lines).join("\n"))),
        ResetColor
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_box_is_rectangular() {
        let lines = vec![
            "Title".to_string(),
            String::new(),
            "A longer line here".to_string(),
        ];
        let boxed = status_box(&lines);
        assert_eq!(boxed.len(), 6);
        let width = boxed[0].chars().count();
        assert!(boxed.iter().all(|l| l.chars().count() == width));
        assert!(boxed[2].starts_with('╠'));
    }
}
