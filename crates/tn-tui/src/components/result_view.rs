//! Result view component.
//!
//! Shows the path that was run, a PASS/FAIL banner, the captured output,
//! and the failure description when there is one. Output taller than its
//! block shows its last lines, where test summaries are printed.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use tn_core::ExecutionResult;

use crate::theme::Theme;

/// Banner for a successful run.
pub const PASS_BANNER: &str = "✓ PASS";

/// Banner for a failed run.
pub const FAIL_BANNER: &str = "✗ FAIL";

/// The result view.
pub struct ResultView<'a> {
    /// The result to display.
    result: &'a ExecutionResult,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> ResultView<'a> {
    /// Creates a new result view.
    #[must_use]
    pub const fn new(result: &'a ExecutionResult, theme: &'a Theme) -> Self {
        Self { result, theme }
    }

    fn banner(&self) -> Line<'a> {
        let text = if self.result.succeeded() {
            PASS_BANNER
        } else {
            FAIL_BANNER
        };
        Line::styled(text, self.theme.outcome_style(self.result.succeeded()))
    }
}

impl Widget for &ResultView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let error = self.result.error_text();
        let error_height = if error.is_empty() { 0 } else { 4 };

        let [summary, output_area, error_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(error_height),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Path: ", self.theme.dimmed_style()),
                Span::styled(self.result.path().as_str(), self.theme.base_style()),
            ]),
            Line::raw(""),
            self.banner(),
        ])
        .render(summary, buf);

        let output_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(" Output: ", self.theme.accent_style()));
        let visible = usize::from(output_block.inner(output_area).height);
        Paragraph::new(tail(self.result.output(), visible))
            .style(self.theme.base_style())
            .block(output_block)
            .render(output_area, buf);

        if !error.is_empty() {
            let error_block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.error_style())
                .title(Span::styled(" Error: ", self.theme.error_style()));
            Paragraph::new(error.to_owned())
                .style(self.theme.error_style())
                .wrap(Wrap { trim: false })
                .block(error_block)
                .render(error_area, buf);
        }
    }
}

/// Returns the last `lines` lines of `output`.
fn tail(output: &str, lines: usize) -> Text<'_> {
    let all: Vec<&str> = output.lines().collect();
    let start = all.len().saturating_sub(lines);
    Text::from(all[start..].iter().map(|line| Line::raw(*line)).collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_keeps_last_lines() {
        let text = tail("one\ntwo\nthree\nfour\n", 2);
        let lines: Vec<String> = text.lines.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["three", "four"]);
    }

    #[test]
    fn test_tail_short_output() {
        assert_eq!(tail("only\n", 10).lines.len(), 1);
        assert!(tail("", 10).lines.is_empty());
    }
}
