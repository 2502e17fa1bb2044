// src/teletext_ui/core.rs - Teletext page state and rendering

use crate::constants::ui::{CONTENT_MARGIN, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::data_fetcher::models::Team;
use crate::error::AppError;
use crate::ui::teletext::colors::*;
use crate::ui::teletext::{FixtureCard, LoadingIndicator};
use crossterm::{execute, style::Print};
use std::io::{Stdout, Write};

use super::rows::TeletextRow;
use super::utils::{get_ansi_code, push_styled_line};

/// Width of the coloured title block in the header
const TITLE_WIDTH: usize = 20;

/// First content line (1-based); line 3 stays blank
const FIRST_CONTENT_LINE: usize = 4;

#[derive(Debug)]
pub struct TeletextPage {
    page_number: u16,
    title: String,
    subheader: String,
    header_note: Option<String>,
    pub(super) content_rows: Vec<TeletextRow>,
    pub(super) current_page: usize,
    pub(super) screen_height: u16,
    pub(super) show_footer: bool,
    pub(super) ignore_height_limit: bool,
    loading_indicator: Option<LoadingIndicator>,
    error_warning_active: bool,
}

impl TeletextPage {
    /// Creates an empty page.
    ///
    /// With `ignore_height_limit` the page never paginates and uses a fixed
    /// 80x24 geometry instead of querying the terminal.
    ///
    /// # Example
    /// ```
    /// use football_scores::TeletextPage;
    ///
    /// let page = TeletextPage::new(
    ///     235,
    ///     "JALKAPALLO".to_string(),
    ///     "VALIOLIIGA".to_string(),
    ///     true,
    ///     true,
    /// );
    /// assert_eq!(page.total_pages(), 1);
    /// ```
    pub fn new(
        page_number: u16,
        title: String,
        subheader: String,
        show_footer: bool,
        ignore_height_limit: bool,
    ) -> Self {
        let screen_height = if ignore_height_limit {
            DEFAULT_HEIGHT
        } else {
            crossterm::terminal::size()
                .map(|(_, height)| height)
                .unwrap_or(DEFAULT_HEIGHT)
        };

        TeletextPage {
            page_number,
            title,
            subheader,
            header_note: None,
            content_rows: Vec::new(),
            current_page: 0,
            screen_height,
            show_footer,
            ignore_height_limit,
            loading_indicator: None,
            error_warning_active: false,
        }
    }

    /// Text shown after the page number in the header, e.g. "KIERROS 12"
    pub fn set_header_note(&mut self, note: impl Into<String>) {
        self.header_note = Some(note.into());
    }

    /// Adds the column captions followed by one row per team
    pub fn add_standings(&mut self, standing: &[Team]) {
        self.content_rows.push(TeletextRow::StandingsHeader);
        self.content_rows
            .extend(standing.iter().cloned().map(TeletextRow::Standing));
    }

    pub fn add_section_header(&mut self, title: impl Into<String>) {
        self.content_rows
            .push(TeletextRow::SectionHeader(title.into()));
    }

    pub fn add_fixture_card(&mut self, card: FixtureCard) {
        self.content_rows.push(TeletextRow::FixtureCard(card));
    }

    pub fn add_error_message(&mut self, message: &str) {
        self.content_rows
            .push(TeletextRow::ErrorMessage(message.to_string()));
    }

    pub fn add_notice(&mut self, message: &str) {
        self.content_rows.push(TeletextRow::Notice(message.to_string()));
    }

    pub fn rows(&self) -> &[TeletextRow] {
        &self.content_rows
    }

    pub fn set_loading_indicator(&mut self, indicator: Option<LoadingIndicator>) {
        self.loading_indicator = indicator;
    }

    /// Advances the spinner, if one is shown
    pub fn update_loading_indicator(&mut self) {
        if let Some(indicator) = &mut self.loading_indicator {
            indicator.next_frame();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading_indicator.is_some()
    }

    /// Shows a warning marker in the footer
    pub fn set_error_warning(&mut self, active: bool) {
        self.error_warning_active = active;
    }

    /// Re-reads the terminal height and keeps the current page in range
    pub fn handle_resize(&mut self) {
        if self.ignore_height_limit {
            return;
        }
        if let Ok((_, height)) = crossterm::terminal::size() {
            self.screen_height = height;
        }
        let current = self.current_page;
        self.set_current_page(current);
    }

    fn header_text(&self) -> String {
        match &self.header_note {
            Some(note) => format!("{} {}", self.page_number, note),
            None => self.page_number.to_string(),
        }
    }

    /// Builds the full screen as one string of ANSI sequences.
    ///
    /// Interactive pages start by homing the cursor and clearing the screen;
    /// non-interactive pages are written in place.
    pub fn build_buffer(&self, width: u16) -> String {
        let width = width as usize;
        let (visible_rows, _) = self.get_page_content();
        let mut buffer = String::with_capacity(width * self.screen_height as usize * 4);

        if !self.ignore_height_limit {
            buffer.push_str("\x1b[H"); // Move to home position
            buffer.push_str("\x1b[0J"); // Clear from cursor down
        }

        let header_width = width.saturating_sub(TITLE_WIDTH);
        buffer.push_str(&format!(
            "\x1b[1;1H\x1b[48;5;{}m\x1b[38;5;{}m{:<title_width$}\x1b[48;5;{}m\x1b[38;5;231m{:>width$}\x1b[0m",
            get_ansi_code(title_bg(), 46),
            get_ansi_code(header_fg(), 21),
            self.title,
            get_ansi_code(header_bg(), 21),
            self.header_text(),
            title_width = TITLE_WIDTH,
            width = header_width
        ));

        let total_pages = self.total_pages();
        let page_info = if total_pages > 1 && !self.ignore_height_limit {
            format!("{}/{}", self.current_page + 1, total_pages)
        } else {
            String::new()
        };
        buffer.push_str(&format!(
            "\x1b[2;1H\x1b[38;5;{}m{:<title_width$}{:>width$}\x1b[0m",
            get_ansi_code(subheader_fg(), 46),
            self.subheader,
            page_info,
            title_width = TITLE_WIDTH,
            width = header_width
        ));

        let mut current_line = FIRST_CONTENT_LINE;
        for row in visible_rows {
            for line in row.lines() {
                push_styled_line(&mut buffer, &line, current_line, CONTENT_MARGIN + 1);
                current_line += 1;
            }
        }

        if self.show_footer {
            let footer_y = super::footer::calculate_footer_position(
                self.ignore_height_limit,
                current_line,
                self.screen_height,
            );
            super::footer::render_footer(
                &mut buffer,
                footer_y,
                width,
                total_pages,
                self.loading_indicator.as_ref(),
                self.error_warning_active,
            );
        }

        buffer
    }

    /// Writes the current page to the terminal in a single write.
    pub fn render_buffered(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        let width = if self.ignore_height_limit {
            DEFAULT_WIDTH
        } else {
            // Hide cursor to prevent visual artifacts during rendering
            execute!(stdout, crossterm::cursor::Hide)?;
            let (width, _) = crossterm::terminal::size()?;
            width
        };

        let buffer = self.build_buffer(width);
        execute!(stdout, Print(buffer))?;

        if !self.ignore_height_limit {
            execute!(stdout, crossterm::cursor::Show)?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// All rows as plain text without colours, cursor movement or pagination
    pub fn render_plain(&self) -> String {
        let mut out = vec![
            format!(
                "{:<title_width$}{}",
                self.title,
                self.header_text(),
                title_width = TITLE_WIDTH
            ),
            self.subheader.clone(),
            String::new(),
        ];
        out.extend(
            self.content_rows
                .iter()
                .flat_map(TeletextRow::lines)
                .map(|line| line.plain()),
        );
        while out.last().is_some_and(|line| line.is_empty()) {
            out.pop();
        }
        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}
