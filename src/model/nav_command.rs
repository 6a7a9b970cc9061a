//! Navigation commands independent of key bindings.

/// Discrete navigation commands consumed by the navigator.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `NavCommand` is handled by
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Move the cursor one row down. Default: ↓/j
    Down,
    /// Move the cursor one row up. Default: ↑/k
    Up,
    /// Move the cursor one page down. Default: Page Down
    PageDown,
    /// Move the cursor one page up. Default: Page Up
    PageUp,
    /// Jump to the first data row. Default: Home/g
    Home,
    /// Scroll one column right. Default: →/l
    Right,
    /// Scroll one column left. Default: ←/h
    Left,
    /// Terminal was resized; re-render only.
    Resize,
    /// Exit the application. Default: Esc/q/Ctrl+c
    Quit,
}
