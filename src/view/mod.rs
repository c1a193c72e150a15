//! TUI rendering and terminal management (impure shell)

pub mod avatar;
pub mod constants;
pub mod framed_message;
mod location_bar;
mod page;
pub mod pagination;
pub mod snackbar;
mod styles;

pub use avatar::UserAvatar;
pub use framed_message::FramedMessage;
pub use location_bar::LocationBar;
pub use page::{frame_column, PageView};
pub use pagination::{pagination_text, PaginationBar};
pub use snackbar::Snackbar;
pub use styles::{ColorConfig, Theme};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction, NavLinkKind};
use crate::routing::RouteTable;
use crate::state::{location_input, AppState};
use constants::{LOCATION_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// How often the event loop wakes up without input.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

const KEY_HINTS: &str = "h/l page  g/G first/last  o go to  b back  r reload  q quit";

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Startup settings for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Location opened first.
    pub start_path: String,
    /// How long notifications stay up.
    pub notification: Duration,
    /// Color handling.
    pub color: ColorConfig,
}

impl ShellOptions {
    /// Options from a resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            start_path: config.start_path.clone(),
            notification: Duration::from_millis(config.notification_ms),
            color: ColorConfig::from_env_and_args(config.no_color),
        }
    }
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            start_path: crate::state::HOME.to_string(),
            notification: crate::state::notification::AUTO_DISMISS,
            color: ColorConfig::fixed(true),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    routes: RouteTable,
    key_bindings: KeyBindings,
    theme: Theme,
    start_path: String,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(routes: RouteTable, options: ShellOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, routes, options))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Input redraws immediately;
    /// otherwise the loop only redraws when the notification timer fires.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Loading placeholder until the first page is produced.
        self.draw()?;
        self.start();
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(..) => self.draw()?,
                    _ => {}
                }
            }

            if self.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Shell over an existing terminal. Shows the loading page until
    /// [`TuiApp::start`].
    pub fn with_terminal(terminal: Terminal<B>, routes: RouteTable, options: ShellOptions) -> Self {
        Self {
            terminal,
            state: AppState::new(options.notification),
            routes,
            key_bindings: KeyBindings::default(),
            theme: Theme::new(options.color),
            start_path: options.start_path,
        }
    }

    /// Open the start location.
    pub fn start(&mut self) {
        let start = self.start_path.clone();
        self.state.navigate(&self.routes, start);
    }

    /// Application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The terminal, for inspecting a test backend.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Advance the notification timer. Returns true when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.state.notification.tick(now).is_visible_change()
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while editing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.state.location_input.is_editing() {
            self.handle_location_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "key action");

        let now = Instant::now();
        match action {
            KeyAction::Quit => return true,
            KeyAction::NextPage => {
                self.state
                    .follow_link(&self.routes, &[NavLinkKind::Next, NavLinkKind::Last], now);
            }
            KeyAction::PrevPage => {
                self.state
                    .follow_link(&self.routes, &[NavLinkKind::Prev, NavLinkKind::First], now);
            }
            KeyAction::FirstPage => {
                self.state
                    .follow_link(&self.routes, &[NavLinkKind::First], now);
            }
            KeyAction::LastPage => {
                self.state.follow_link(&self.routes, &[NavLinkKind::Last], now);
            }
            KeyAction::EditLocation => {
                let input = std::mem::take(&mut self.state.location_input);
                self.state.location_input = location_input::activate(input, self.state.location());
            }
            KeyAction::GoBack => {
                self.state.go_back(&self.routes, now);
            }
            KeyAction::Reload => self.state.reload(&self.routes, now),
            KeyAction::DismissNotification => {
                self.state.notification.close();
            }
        }
        false
    }

    fn handle_location_key(&mut self, key: KeyEvent) {
        let input = std::mem::take(&mut self.state.location_input);
        self.state.location_input = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                location_input::handle_char_input(input, ch)
            }
            KeyCode::Backspace => location_input::handle_backspace(input),
            KeyCode::Left => location_input::handle_cursor_left(input),
            KeyCode::Right => location_input::handle_cursor_right(input),
            KeyCode::Esc => location_input::cancel(input),
            KeyCode::Enter => {
                let (next, target) = location_input::submit(input);
                if let Some(target) = target {
                    self.state.navigate(&self.routes, target);
                }
                next
            }
            _ => input,
        };
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let theme = &self.theme;
        self.terminal.draw(|frame| render_shell(frame, state, theme))?;
        Ok(())
    }
}

/// Location bar on top, page in the middle, status bar at the bottom, and
/// the snackbar over the page.
fn render_shell(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LOCATION_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    frame.render_widget(
        LocationBar::new(state.location(), &state.location_input, theme),
        chunks[0],
    );

    let links = state.nav_links();
    frame.render_widget(PageView::new(state.page(), &links, theme), chunks[1]);

    render_status_bar(frame, chunks[2], state, theme);

    frame.render_widget(Snackbar::new(state.notification.state(), theme), chunks[1]);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let route = state.route_name().unwrap_or("loading");
    let line = Line::from(vec![
        Span::styled(format!(" {route} "), theme.current_page),
        Span::raw(" "),
        Span::styled(KEY_HINTS, theme.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Initialize and run the TUI over `routes`.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. Logging must be initialized by the caller.
pub fn run(routes: RouteTable, options: ShellOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(routes, options)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Leave raw mode and the alternate screen, ignoring failures.
///
/// For use from the panic hook, where nothing can be reported.
pub fn reset_terminal() {
    let _ = restore_terminal();
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
