//! Status bar component.
//!
//! Displays the mode indicator and the keys that apply in that mode.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::Mode;
use crate::theme::Theme;

/// The status bar component.
pub struct StatusBar<'a> {
    /// The mode whose hints are shown.
    mode: Mode,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar.
    #[must_use]
    pub const fn new(mode: Mode, theme: &'a Theme) -> Self {
        Self { mode, theme }
    }

    /// Key hints as `(keys, description)` pairs.
    #[must_use]
    pub const fn hints(mode: Mode) -> &'static [(&'static str, &'static str)] {
        match mode {
            Mode::Loading => &[("q", "quit")],
            Mode::Browsing => &[
                ("↑/k ↓/j", "move"),
                ("enter", "open/run"),
                ("t", "run tests"),
                ("⌫", "parent"),
                ("r", "refresh"),
                ("q", "quit"),
            ],
            Mode::ShowingResult => &[("q/esc", "back"), ("ctrl+c", "quit")],
        }
    }

    fn build_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.mode.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];

        for (i, (keys, description)) in Self::hints(self.mode).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(*keys, self.theme.accent_style()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*description, self.theme.dimmed_style()));
        }

        Line::from(spans)
    }
}

impl Widget for &StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line())
            .style(self.theme.status_bar_style)
            .render(area, buf);
    }
}
