//! Application-wide actions

use ratatui::crossterm::event::KeyEvent;

/// Actions that affect the whole application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key press, before the keyboard middleware translates it
    KeyPressed(KeyEvent),
    /// Show or hide the key bindings overlay
    ToggleHelp,
    /// Shut the application down
    Quit,
}
