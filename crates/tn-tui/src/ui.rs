//! Main UI layout and rendering orchestration.
//!
//! This module provides the main [`render`] function, a pure mapping from
//! session state to a frame. Exactly one body view is drawn, chosen by the
//! session mode.
//!
//! # Layout Structure
//!
//! ```text
//! +------------------------------------------------------------------+
//! | Go Test Runner │ Directory: /path/to/project                        |
//! +------------------------------------------------------------------+
//! | Loading:  ⠙ Loading tests...                                     |
//! | Browsing: [error banner]                                         |
//! |           > 📁 ..                                                 |
//! |             🧪 calc_test.go                                       |
//! | Result:   Path / ✓ PASS / [Output:] / [Error:]                   |
//! +------------------------------------------------------------------+
//! | BROWSE  ↑/k ↓/j move │ enter open/run │ ... │ q quit              |
//! +------------------------------------------------------------------+
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, Mode};
use crate::components::{EntryList, HeaderBar, LoadingView, ResultView, StatusBar};
use crate::theme::Theme;

/// Renders the entire UI based on the current session state.
pub fn render(app: &App, frame: &mut Frame, theme: &Theme) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .areas(frame.area());

    let header = HeaderBar::new(app.current_dir(), theme);
    frame.render_widget(&header, header_area);

    render_body(app, frame, body_area, theme);

    let status_bar = StatusBar::new(app.mode, theme);
    frame.render_widget(&status_bar, status_area);
}

fn render_body(app: &App, frame: &mut Frame, area: Rect, theme: &Theme) {
    match (app.mode, app.result()) {
        (Mode::Loading, _) => {
            let loading = LoadingView::new(app.spinner(), theme);
            frame.render_widget(&loading, area);
        }
        (Mode::ShowingResult, Some(result)) => {
            let view = ResultView::new(result, theme);
            frame.render_widget(&view, area);
        }
        (Mode::Browsing | Mode::ShowingResult, _) => {
            let list = EntryList::new(
                app.entries(),
                app.cursor(),
                app.last_error.as_deref(),
                theme,
            );
            frame.render_widget(&list, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::task::Task;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tn_core::{Entry, ExecutionResult};

    const ROOT: &str = "/work/project";

    fn draw(app: &App) -> Vec<String> {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| render(app, frame, &Theme::dark()))
            .expect("draw");

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    fn browsing(entries: Vec<Entry>) -> App {
        let mut app = App::new(ROOT);
        let task = app.start();
        let _ = app.handle_event(Event::ScanCompleted {
            ticket: task.ticket(),
            entries,
        });
        app
    }

    fn press(app: &mut App, code: KeyCode) -> Option<Task> {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_render_loading() {
        let mut app = App::new(ROOT);
        let _ = app.start();

        let rows = draw(&app);

        assert!(contains(&rows, "Go Test Runner"));
        assert!(contains(&rows, "Loading tests..."));
        assert!(contains(&rows, "LOADING"));
    }

    #[test]
    fn test_render_listing() {
        let app = browsing(vec![
            Entry::directory(format!("{ROOT}/calc"), true),
            Entry::test_file(format!("{ROOT}/main_test.go")),
        ]);

        let rows = draw(&app);

        assert!(contains(&rows, &format!("Directory: {ROOT}")));
        assert!(contains(&rows, "calc"));
        assert!(contains(&rows, "main_test.go"));
        assert!(contains(&rows, "📁"));
        assert!(contains(&rows, "🧪"));

        let cursor_row = rows
            .iter()
            .find(|row| row.contains("calc"))
            .expect("calc row");
        assert!(cursor_row.trim_start().starts_with('>'));
        let other_row = rows
            .iter()
            .find(|row| row.contains("main_test.go"))
            .expect("main_test row");
        assert!(!other_row.contains('>'));
    }

    #[test]
    fn test_render_empty_listing() {
        let app = browsing(Vec::new());

        let rows = draw(&app);

        assert!(contains(&rows, "No tests found in this directory."));
    }

    #[test]
    fn test_render_scan_error_banner() {
        let mut app = browsing(vec![Entry::directory(format!("{ROOT}/calc"), false)]);
        let task = press(&mut app, KeyCode::Char('r')).expect("scan task");
        let _ = app.handle_event(Event::ScanFailed {
            ticket: task.ticket(),
            message: "permission denied".to_owned(),
        });

        let rows = draw(&app);

        assert!(contains(&rows, "permission denied"));
        assert!(contains(&rows, "calc"));
    }

    #[test]
    fn test_render_failed_result() {
        let mut app = browsing(vec![Entry::test_file(format!("{ROOT}/calc_test.go"))]);
        let task = press(&mut app, KeyCode::Enter).expect("run task");
        let _ = app.handle_event(Event::RunCompleted {
            ticket: task.ticket(),
            result: ExecutionResult::failure(
                format!("{ROOT}/calc_test.go"),
                "--- FAIL: TestAdd\nFAIL\n",
                "exit status: 1",
            ),
        });

        let rows = draw(&app);

        assert!(contains(&rows, "✗ FAIL"));
        assert!(contains(&rows, "calc_test.go"));
        assert!(contains(&rows, "Output:"));
        assert!(contains(&rows, "--- FAIL: TestAdd"));
        assert!(contains(&rows, "Error:"));
        assert!(contains(&rows, "exit status: 1"));
    }

    #[test]
    fn test_render_passing_result_has_no_error_block() {
        let mut app = browsing(vec![Entry::test_file(format!("{ROOT}/calc_test.go"))]);
        let task = press(&mut app, KeyCode::Enter).expect("run task");
        let _ = app.handle_event(Event::RunCompleted {
            ticket: task.ticket(),
            result: ExecutionResult::success(format!("{ROOT}/calc_test.go"), "ok  calc\n"),
        });

        let rows = draw(&app);

        assert!(contains(&rows, "✓ PASS"));
        assert!(contains(&rows, "ok  calc"));
        assert!(!contains(&rows, "Error:"));
    }

    #[test]
    fn test_render_long_output_shows_tail() {
        let output: String = (1..=100).map(|i| format!("line {i:03}\n")).collect();
        let mut app = browsing(vec![Entry::test_file(format!("{ROOT}/calc_test.go"))]);
        let task = press(&mut app, KeyCode::Enter).expect("run task");
        let _ = app.handle_event(Event::RunCompleted {
            ticket: task.ticket(),
            result: ExecutionResult::success(format!("{ROOT}/calc_test.go"), output),
        });

        let rows = draw(&app);

        assert!(contains(&rows, "line 100"));
        assert!(!contains(&rows, "line 001"));
    }
}
