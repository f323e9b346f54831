//! Entry list component.
//!
//! Displays the listing of the current directory with the cursor, one line
//! per entry, preceded by a scan error banner when the last scan failed.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph, StatefulWidget,
    Widget, Wrap,
};
use tn_core::Entry;

use super::truncate_end;
use crate::theme::Theme;

/// Shown in place of the listing when a directory has nothing to offer.
pub const EMPTY_MESSAGE: &str = "No tests found in this directory.";

/// Cursor marker before the selected entry.
pub const CURSOR_MARKER: &str = "> ";

/// Columns taken by the cursor marker, the icon, and the space after it.
const PREFIX_WIDTH: usize = 5;

/// The listing view.
pub struct EntryList<'a> {
    /// Entries to display.
    entries: &'a [Entry],
    /// Index of the selected entry.
    cursor: usize,
    /// Message of the last failed scan.
    error: Option<&'a str>,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> EntryList<'a> {
    /// Creates a new listing view.
    #[must_use]
    pub const fn new(
        entries: &'a [Entry],
        cursor: usize,
        error: Option<&'a str>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            entries,
            cursor,
            error,
            theme,
        }
    }

    fn build_item(&self, entry: &Entry, width: usize) -> ListItem<'a> {
        let kind = entry.kind();
        let name = truncate_end(&entry.name, width.saturating_sub(PREFIX_WIDTH));
        ListItem::new(Line::from(vec![
            Span::raw(Theme::entry_icon(kind)),
            Span::raw(" "),
            Span::styled(name, self.theme.entry_style(kind)),
        ]))
    }

    fn render_banner(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.error_style())
            .title(Span::styled(" Error ", self.theme.error_style()));
        Paragraph::new(message.to_owned())
            .style(self.theme.error_style())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

impl Widget for &EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = match self.error {
            Some(message) => {
                let [banner, rest] =
                    Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
                self.render_banner(message, banner, buf);
                rest
            }
            None => area,
        };

        if self.entries.is_empty() {
            Paragraph::new(Line::styled(EMPTY_MESSAGE, self.theme.dimmed_style()))
                .render(area, buf);
            return;
        }

        let width = usize::from(area.width);
        let items: Vec<ListItem<'_>> = self
            .entries
            .iter()
            .map(|entry| self.build_item(entry, width))
            .collect();

        let list = List::new(items)
            .highlight_style(self.theme.highlight_style)
            .highlight_symbol(CURSOR_MARKER)
            .highlight_spacing(HighlightSpacing::Always);

        let mut state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
