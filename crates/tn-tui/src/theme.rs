//! Theme and styling for the TUI.
//!
//! This module provides the [`Theme`] struct for managing colors and styles
//! throughout the terminal interface. It supports both dark and light color
//! schemes.
//!
//! # Example
//!
//! ```
//! use tn_core::EntryKind;
//! use tn_tui::Theme;
//!
//! let theme = Theme::dark();
//! let style = theme.entry_style(EntryKind::TestFile);
//! assert_eq!(Theme::entry_icon(EntryKind::TestFile), "🧪");
//! ```

use ratatui::style::{Color, Modifier, Style};
use tn_core::{ColorScheme, EntryKind};

/// Theme configuration for the TUI.
///
/// Contains all colors and styles used throughout the interface.
/// Use [`Theme::dark()`] or [`Theme::light()`] to get predefined themes,
/// or [`Theme::from_scheme()`] to create a theme based on configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Entry Colors
    // =========================================================================
    /// Foreground color for plain directories.
    pub directory_fg: Color,

    /// Foreground color for test files and test directories.
    pub test_fg: Color,

    /// Foreground color for the parent link.
    pub parent_fg: Color,

    // =========================================================================
    // Result Colors
    // =========================================================================
    /// Foreground color for the PASS banner.
    pub success_fg: Color,

    /// Foreground color for the FAIL banner and error text.
    pub failure_fg: Color,

    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for highlights.
    pub accent: Color,

    /// Scan error color.
    pub error_fg: Color,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for borders.
    pub border_style: Style,

    /// Style for the entry under the cursor.
    pub highlight_style: Style,

    /// Style for the header bar.
    pub header_style: Style,

    /// Style for the status bar.
    pub status_bar_style: Style,
}

impl Theme {
    /// Creates a dark theme (light text on dark background).
    ///
    /// This is the default theme, optimized for dark terminal backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            directory_fg: Color::Rgb(100, 150, 255),
            test_fg: Color::Rgb(100, 220, 140),
            parent_fg: Color::Rgb(128, 128, 128),

            success_fg: Color::Rgb(100, 255, 100),
            failure_fg: Color::Rgb(255, 100, 100),

            fg: Color::Rgb(220, 220, 220),
            dimmed_fg: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(100, 150, 255),
            error_fg: Color::Rgb(255, 80, 80),

            border_style: Style::default().fg(Color::Rgb(80, 80, 100)),
            highlight_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 80))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(180, 180, 180))
                .bg(Color::Rgb(40, 40, 50)),
        }
    }

    /// Creates a light theme (dark text on light background).
    #[must_use]
    pub fn light() -> Self {
        Self {
            directory_fg: Color::Rgb(50, 100, 200),
            test_fg: Color::Rgb(30, 130, 70),
            parent_fg: Color::Rgb(100, 100, 100),

            success_fg: Color::Rgb(50, 150, 50),
            failure_fg: Color::Rgb(180, 50, 50),

            fg: Color::Rgb(30, 30, 30),
            dimmed_fg: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(50, 100, 200),
            error_fg: Color::Rgb(180, 50, 50),

            border_style: Style::default().fg(Color::Rgb(150, 150, 170)),
            highlight_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(60, 60, 60))
                .bg(Color::Rgb(220, 220, 230)),
        }
    }

    /// Creates a theme without colors.
    #[must_use]
    pub fn monochrome() -> Self {
        let plain = Style::default();
        Self {
            directory_fg: Color::Reset,
            test_fg: Color::Reset,
            parent_fg: Color::Reset,
            success_fg: Color::Reset,
            failure_fg: Color::Reset,
            fg: Color::Reset,
            dimmed_fg: Color::Reset,
            accent: Color::Reset,
            error_fg: Color::Reset,
            border_style: plain,
            highlight_style: plain.add_modifier(Modifier::REVERSED),
            header_style: plain.add_modifier(Modifier::BOLD),
            status_bar_style: plain,
        }
    }

    /// Creates a theme from a [`ColorScheme`] configuration.
    ///
    /// If the scheme is [`ColorScheme::Auto`], defaults to dark theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Monochrome => Self::monochrome(),
            ColorScheme::Dark | ColorScheme::Auto | _ => Self::dark(),
        }
    }

    /// Returns the style for an entry of the given kind.
    #[must_use]
    pub fn entry_style(&self, kind: EntryKind) -> Style {
        let style = Style::default().fg(self.entry_color(kind));
        match kind {
            EntryKind::TestDirectory | EntryKind::TestFile => style.add_modifier(Modifier::BOLD),
            EntryKind::Parent | EntryKind::Directory | EntryKind::Plain => style,
        }
    }

    /// Returns the color for an entry of the given kind.
    #[must_use]
    pub const fn entry_color(&self, kind: EntryKind) -> Color {
        match kind {
            EntryKind::Parent => self.parent_fg,
            EntryKind::Directory => self.directory_fg,
            EntryKind::TestDirectory | EntryKind::TestFile => self.test_fg,
            EntryKind::Plain => self.fg,
        }
    }

    /// Returns the icon shown before an entry of the given kind.
    #[must_use]
    pub const fn entry_icon(kind: EntryKind) -> &'static str {
        match kind {
            EntryKind::Parent | EntryKind::Directory | EntryKind::TestDirectory => "📁",
            EntryKind::TestFile => "🧪",
            EntryKind::Plain => "📄",
        }
    }

    /// Returns the style for a PASS or FAIL banner.
    #[must_use]
    pub fn outcome_style(&self, succeeded: bool) -> Style {
        let color = if succeeded {
            self.success_fg
        } else {
            self.failure_fg
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Returns a style with the base foreground color.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Returns a style for dimmed/secondary text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Returns a style for accent/highlighted text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns a style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
