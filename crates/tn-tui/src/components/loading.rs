//! Loading indicator shown while a scan or run is in flight.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The loading indicator.
pub struct LoadingView<'a> {
    /// Spinner frame counter.
    spinner: usize,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> LoadingView<'a> {
    /// Creates a loading indicator showing frame `spinner`.
    #[must_use]
    pub const fn new(spinner: usize, theme: &'a Theme) -> Self {
        Self { spinner, theme }
    }

    /// The spinner glyph for the current frame.
    #[must_use]
    pub const fn frame(&self) -> &'static str {
        FRAMES[self.spinner % FRAMES.len()]
    }
}

impl Widget for &LoadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.frame(), self.theme.accent_style()),
            Span::raw(" "),
            Span::styled("Loading tests...", self.theme.base_style()),
        ]);

        // Vertically center when there is room.
        let top = area.height.saturating_sub(1) / 2;
        let area = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
