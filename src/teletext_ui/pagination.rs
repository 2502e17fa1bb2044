// src/teletext_ui/pagination.rs - Splitting content rows into screen-sized pages

use super::core::TeletextPage;
use super::rows::TeletextRow;
use crate::constants::ui::RESERVED_ROWS;

impl TeletextPage {
    fn available_height(&self) -> u16 {
        self.screen_height.saturating_sub(RESERVED_ROWS)
    }

    /// Number of rows on each page, in page order.
    ///
    /// A row taller than the whole screen still gets a page of its own.
    fn rows_per_page(&self) -> Vec<usize> {
        let available_height = self.available_height();
        let mut pages = Vec::new();
        let mut current_height = 0u16;
        let mut current_items = 0usize;

        for row in &self.content_rows {
            let row_height = row.height();
            if current_items > 0 && current_height + row_height > available_height {
                pages.push(current_items);
                current_items = 0;
                current_height = 0;
            }
            current_items += 1;
            current_height += row_height;
        }
        if current_items > 0 {
            pages.push(current_items);
        }
        pages
    }

    /// Rows of the current page and whether more rows follow it.
    ///
    /// With `ignore_height_limit` all rows are returned at once.
    pub(super) fn get_page_content(&self) -> (Vec<&TeletextRow>, bool) {
        if self.ignore_height_limit {
            return (self.content_rows.iter().collect(), false);
        }

        let pages = self.rows_per_page();
        let Some(&items) = pages.get(self.current_page) else {
            return (Vec::new(), false);
        };
        let start: usize = pages.iter().take(self.current_page).sum();
        let end = (start + items).min(self.content_rows.len());
        (
            self.content_rows[start..end].iter().collect(),
            end < self.content_rows.len(),
        )
    }

    /// Total number of pages; an empty page still counts as one
    pub fn total_pages(&self) -> usize {
        if self.ignore_height_limit {
            return 1;
        }
        self.rows_per_page().len().max(1)
    }

    /// Current page (0-based)
    pub fn get_current_page(&self) -> usize {
        self.current_page
    }

    /// Sets the current page, clamped to the last page
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages() - 1);
    }

    /// Moves to the next page, wrapping to the first
    pub fn next_page(&mut self) {
        let total = self.total_pages();
        if total <= 1 {
            return;
        }
        self.current_page = (self.current_page + 1) % total;
    }

    /// Moves to the previous page, wrapping to the last
    pub fn previous_page(&mut self) {
        let total = self.total_pages();
        if total <= 1 {
            return;
        }
        self.current_page = if self.current_page == 0 {
            total - 1
        } else {
            self.current_page - 1
        };
    }
}
