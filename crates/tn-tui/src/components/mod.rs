//! UI components for the TUI.
//!
//! This module contains the widget implementations for each part of the
//! screen. All of them are stateless: they borrow what they draw and
//! implement [`Widget`](ratatui::widgets::Widget) for a shared reference.
//!
//! - [`HeaderBar`]: title and current directory
//! - [`EntryList`]: the classified listing with the cursor
//! - [`LoadingView`]: spinner shown while a task is in flight
//! - [`ResultView`]: outcome and output of a run
//! - [`StatusBar`]: mode and key hints

mod entry_list;
mod header;
mod loading;
mod result_view;
mod status_bar;

pub use entry_list::EntryList;
pub use header::HeaderBar;
pub use loading::LoadingView;
pub use result_view::ResultView;
pub use status_bar::StatusBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Shortens `text` to `max_width` columns, keeping its beginning.
pub(crate) fn truncate_end(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Shortens `text` to `max_width` columns, keeping its end.
///
/// Used for paths, where the last components are the informative part.
pub(crate) fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut tail = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        tail.push(c);
    }
    std::iter::once(ELLIPSIS).chain(tail.into_iter().rev()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_end("calc", 10), "calc");
        assert_eq!(truncate_start("src/calc", 8), "src/calc");
    }

    #[test]
    fn test_truncate_end_keeps_prefix() {
        let out = truncate_end("calculator_test.go", 8);
        assert_eq!(out, "calcula…");
        assert_eq!(out.width(), 8);
    }

    #[test]
    fn test_truncate_start_keeps_suffix() {
        let out = truncate_start("/home/user/project/pkg/calc", 10);
        assert_eq!(out, "…/pkg/calc");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn test_truncate_counts_wide_characters() {
        // Each CJK character is two columns wide.
        let out = truncate_end("測試測試", 5);
        assert_eq!(out, "測試…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_end("abc", 0), "");
        assert_eq!(truncate_start("abc", 0), "");
    }
}
