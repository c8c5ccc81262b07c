//! Messages that drive the menu update loop.
//!
//! Keyboard and mouse events arrive from crossterm; everything flows
//! through `MenuApp::update` so the whole input surface is testable
//! without a terminal.

use crossterm::event::{KeyEvent, MouseEvent};

/// Messages that drive the menu update loop.
#[derive(Debug, Clone)]
pub enum MenuMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Mouse movement or button press.
    Pointer(MouseEvent),
    /// Render: draw a frame.
    Render,
    /// Quit the menu.
    Quit,
}
