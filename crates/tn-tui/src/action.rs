//! User actions for the TUI.
//!
//! Key presses are translated into an [`Action`] by
//! [`App::handle_key`](crate::App::handle_key), and the action is applied by
//! [`App::update`](crate::App::update).
//!
//! ```text
//! Key Event → App::handle_key → Action → App::update → Option<Task>
//! ```

/// User-initiated actions in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Move the cursor to the previous entry.
    MoveUp,

    /// Move the cursor to the next entry.
    MoveDown,

    /// Open the selected directory, or run the selected test file.
    Activate,

    /// Navigate to the parent of the current directory.
    GoToParent,

    /// Rescan the current directory.
    Refresh,

    // =========================================================================
    // Execution
    // =========================================================================
    /// Run the selected entry, including test directories.
    RunSelected,

    /// Close the result view.
    Dismiss,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// Tick (periodic update).
    Tick,

    /// No operation (used for event handling that doesn't produce an action).
    #[default]
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_default() {
        assert_eq!(Action::default(), Action::None);
    }
}
