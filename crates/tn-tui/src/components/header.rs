//! Header bar component.
//!
//! Displays the application title and the directory being browsed.

use camino::Utf8Path;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use super::truncate_start;
use crate::theme::Theme;

/// Application title.
pub const TITLE: &str = "Go Test Runner";

const DIRECTORY_LABEL: &str = "Directory: ";
const SEPARATOR: &str = " │ ";

/// The header bar component.
pub struct HeaderBar<'a> {
    /// Directory being browsed.
    directory: &'a Utf8Path,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    /// Creates a new header bar.
    #[must_use]
    pub const fn new(directory: &'a Utf8Path, theme: &'a Theme) -> Self {
        Self { directory, theme }
    }
}

impl Widget for &HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fixed = TITLE.width() + SEPARATOR.width() + DIRECTORY_LABEL.width();
        let available = usize::from(area.width).saturating_sub(fixed);
        let directory = truncate_start(self.directory.as_str(), available);

        let line = Line::from(vec![
            Span::styled(TITLE, self.theme.header_style),
            Span::styled(SEPARATOR, self.theme.dimmed_style()),
            Span::styled(DIRECTORY_LABEL, self.theme.dimmed_style()),
            Span::styled(directory, self.theme.base_style()),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.border_style);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
