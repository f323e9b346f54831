//! Background scans and test runs.
//!
//! The session never blocks on the filesystem or on a child process. It
//! describes the work as a [`Task`], and the [`TaskDispatcher`] runs it on
//! the blocking thread pool and sends exactly one completion [`Event`] back
//! through the event channel.
//!
//! ```text
//! App::update ──► Task ──► TaskDispatcher::dispatch
//!                              │
//!                              ├── spawn_blocking(Scanner::scan)
//!                              │        └──► Event::ScanCompleted / ScanFailed
//!                              │
//!                              └── spawn_blocking(Invoker::run)
//!                                       └──► Event::RunCompleted
//! ```

use std::fmt;

use camino::Utf8PathBuf;
use tn_core::ExecutionResult;
use tn_runner::Invoker;
use tn_scanner::Scanner;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::event::Event;

/// Identifies one dispatched background task.
///
/// Completions carry the ticket of the task they finish; the session only
/// accepts the completion whose ticket matches its pending task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    /// Creates a ticket with the given sequence number.
    #[must_use]
    pub const fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Returns the ticket following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Work requested by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// List a directory.
    Scan {
        /// Ticket of the completion.
        ticket: Ticket,
        /// Directory to list.
        directory: Utf8PathBuf,
    },
    /// Run the tests for a file or directory.
    Run {
        /// Ticket of the completion.
        ticket: Ticket,
        /// Entry path to run.
        path: Utf8PathBuf,
    },
}

impl Task {
    /// Returns the task's ticket.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        match self {
            Self::Scan { ticket, .. } | Self::Run { ticket, .. } => *ticket,
        }
    }
}

/// Runs tasks off the event loop and reports their completions.
#[derive(Debug, Clone)]
pub struct TaskDispatcher {
    scanner: Scanner,
    invoker: Invoker,
    event_tx: mpsc::Sender<Event>,
}

impl TaskDispatcher {
    /// Creates a dispatcher that reports completions on `event_tx`.
    #[must_use]
    pub const fn new(scanner: Scanner, invoker: Invoker, event_tx: mpsc::Sender<Event>) -> Self {
        Self {
            scanner,
            invoker,
            event_tx,
        }
    }

    /// Starts `task` in the background.
    ///
    /// Exactly one completion event carrying the task's ticket is sent
    /// once the work finishes.
    pub fn dispatch(&self, task: Task) {
        debug!(?task, "Dispatching task");

        let scanner = self.scanner.clone();
        let invoker = self.invoker.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match task {
                Task::Scan { ticket, directory } => scan(scanner, ticket, directory).await,
                Task::Run { ticket, path } => run(invoker, ticket, path).await,
            };

            if event_tx.send(event).await.is_err() {
                warn!("Event channel closed before task completed");
            }
        });
    }
}

async fn scan(scanner: Scanner, ticket: Ticket, directory: Utf8PathBuf) -> Event {
    let outcome = tokio::task::spawn_blocking(move || scanner.scan(&directory)).await;

    match outcome {
        Ok(Ok(entries)) => Event::ScanCompleted { ticket, entries },
        Ok(Err(e)) => Event::ScanFailed {
            ticket,
            message: e.to_string(),
        },
        Err(e) => Event::ScanFailed {
            ticket,
            message: format!("scan task failed: {e}"),
        },
    }
}

async fn run(invoker: Invoker, ticket: Ticket, path: Utf8PathBuf) -> Event {
    let target = path.clone();
    let outcome = tokio::task::spawn_blocking(move || invoker.run(&target)).await;

    let result = outcome.unwrap_or_else(|e| {
        ExecutionResult::failure(path, String::new(), format!("test task failed: {e}"))
    });
    Event::RunCompleted { ticket, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use std::fs;
    use tempfile::TempDir;
    use tn_core::{Entry, RunConfig, ScanConfig};

    fn dispatcher(root: &Utf8Path, run: RunConfig) -> (TaskDispatcher, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(4);
        let scanner = Scanner::new(root, ScanConfig::default());
        (TaskDispatcher::new(scanner, Invoker::new(run), tx), rx)
    }

    fn temp_root() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8Path::from_path(temp.path())
            .expect("temp dir is UTF-8")
            .to_owned();
        (temp, root)
    }

    #[test]
    fn test_ticket_sequence() {
        let first = Ticket::new(0);
        assert_eq!(first.next(), Ticket::new(1));
        assert!(first < first.next());
        assert_eq!(Ticket::new(u64::MAX).next(), Ticket::new(0));
        assert_eq!(Ticket::new(3).to_string(), "#3");
    }

    #[test]
    fn test_task_ticket() {
        let task = Task::Run {
            ticket: Ticket::new(4),
            path: Utf8PathBuf::from("pkg"),
        };
        assert_eq!(task.ticket(), Ticket::new(4));
    }

    #[tokio::test]
    async fn test_scan_task_reports_listing() {
        let (_temp, root) = temp_root();
        fs::create_dir(root.join("calc")).expect("mkdir");
        fs::write(root.join("calc").join("calc_test.go"), "").expect("write");
        let (dispatcher, mut rx) = dispatcher(&root, RunConfig::default());

        dispatcher.dispatch(Task::Scan {
            ticket: Ticket::new(1),
            directory: root.clone(),
        });

        match rx.recv().await {
            Some(Event::ScanCompleted { ticket, entries }) => {
                assert_eq!(ticket, Ticket::new(1));
                assert_eq!(entries, vec![Entry::directory(root.join("calc"), true)]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_scan_task_reports_failure() {
        let (_temp, root) = temp_root();
        let (dispatcher, mut rx) = dispatcher(&root, RunConfig::default());

        dispatcher.dispatch(Task::Scan {
            ticket: Ticket::new(2),
            directory: root.join("missing"),
        });

        match rx.recv().await {
            Some(Event::ScanFailed { ticket, message }) => {
                assert_eq!(ticket, Ticket::new(2));
                assert!(message.contains("missing"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_task_reports_launch_failure() {
        let (_temp, root) = temp_root();
        let run = RunConfig {
            program: "testnav-definitely-not-a-real-program".to_owned(),
            ..RunConfig::default()
        };
        let (dispatcher, mut rx) = dispatcher(&root, run);

        dispatcher.dispatch(Task::Run {
            ticket: Ticket::new(3),
            path: root.clone(),
        });

        match rx.recv().await {
            Some(Event::RunCompleted { ticket, result }) => {
                assert_eq!(ticket, Ticket::new(3));
                assert!(!result.succeeded());
                assert_eq!(result.path(), root);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_task_reports_output() {
        let (_temp, root) = temp_root();
        let args = vec!["-c".to_owned(), "printf ok".to_owned()];
        let run = RunConfig {
            program: "sh".to_owned(),
            dir_args: args.clone(),
            file_args: args,
        };
        let (dispatcher, mut rx) = dispatcher(&root, run);

        dispatcher.dispatch(Task::Run {
            ticket: Ticket::new(5),
            path: root.clone(),
        });

        match rx.recv().await {
            Some(Event::RunCompleted { result, .. }) => {
                assert!(result.succeeded());
                assert_eq!(result.output(), "ok");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
