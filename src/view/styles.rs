//! Color handling and the widget theme.
//!
//! Styles are carried in a [`Theme`] value passed to every widget; nothing
//! reads a global palette.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag (or `no_color` in the config file)
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved flag and environment.
    ///
    /// Priority (first match wins):
    /// 1. `no_color_flag` (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors forced on or off.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Styles for every widget in the shell.
///
/// With colors disabled only modifiers (bold, reversed, dim) remain, so the
/// current page and cursor stay distinguishable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Page title.
    pub title: Style,
    /// Body text.
    pub text: Style,
    /// Secondary text (author line, hints, status bar).
    pub muted: Style,
    /// Navigable pagination entry.
    pub link: Style,
    /// Highlighted current page.
    pub current_page: Style,
    /// `···` gap marker.
    pub ellipsis: Style,
    /// Icon of a framed message.
    pub icon: Style,
    /// Avatar badge.
    pub avatar: Style,
    /// Location bar while not editing.
    pub location: Style,
    /// Character under the location cursor.
    pub cursor: Style,
    /// Snackbar body.
    pub snackbar: Style,
    /// Panel borders.
    pub border: Style,
}

impl Theme {
    /// Build the theme for a color configuration.
    pub fn new(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD);
        let dim = Style::default().add_modifier(Modifier::DIM);

        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::Cyan),
                text: Style::default(),
                muted: Style::default().fg(Color::DarkGray),
                link: Style::default().fg(Color::Gray),
                current_page: Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                ellipsis: Style::default().fg(Color::DarkGray),
                icon: bold.fg(Color::Yellow),
                avatar: bold.fg(Color::Black).bg(Color::Cyan),
                location: Style::default().fg(Color::White),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                snackbar: Style::default().fg(Color::White).bg(Color::DarkGray),
                border: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                title: bold,
                text: Style::default(),
                muted: dim,
                link: Style::default(),
                current_page: reversed,
                ellipsis: dim,
                icon: bold,
                avatar: reversed,
                location: Style::default(),
                cursor: reversed,
                snackbar: reversed,
                border: Style::default(),
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorConfig::fixed(true))
    }
}
