//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Pagination
    /// Follow the NEXT link, or LAST when there is no NEXT. Default: l/→
    NextPage,
    /// Follow the PREV link, or FIRST when there is no PREV. Default: h/←
    PrevPage,
    /// Follow the FIRST link. Default: g/Home
    FirstPage,
    /// Follow the LAST link. Default: G/End
    LastPage,

    // Navigation
    /// Start editing the location bar. Default: o or /
    EditLocation,
    /// Return to the previous location. Default: b/Backspace
    GoBack,
    /// Remount the current view, clearing a faulted boundary. Default: r
    Reload,

    // Notification
    /// Close the visible notification early. Default: Esc
    DismissNotification,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
