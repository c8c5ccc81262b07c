//! Key and mouse dispatch for the menu.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::audio::Cue;

use super::app::MenuApp;

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut MenuApp, key: KeyEvent) {
    // A modal notice captures everything; any key dismisses it.
    if app.modal.is_some() {
        app.modal = None;
        return;
    }

    // Global bindings
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    // Menu bindings are only live when a project is on screen.
    if app.load_failed {
        return;
    }

    match key.code {
        KeyCode::Left => app.move_by(-1),
        KeyCode::Right => app.move_by(1),
        KeyCode::Up => app.move_by(-(app.columns() as isize)),
        KeyCode::Down => app.move_by(app.columns() as isize),
        KeyCode::Enter => {
            app.pending_cue = Some(Cue::Select);
            app.activate(app.selected);
        }
        KeyCode::Esc => app.reset_selection(),
        _ => {}
    }
}

/// Handle a mouse event, hit-testing against the rendered tile cells.
pub fn handle_mouse(app: &mut MenuApp, mouse: MouseEvent) {
    match mouse.kind {
        // Hover-follow selection, intentionally silent: pointer movement
        // is frequent and a cue per cell would be noise.
        MouseEventKind::Moved => {
            if app.modal.is_some() {
                return;
            }
            if let Some(index) = app.tile_at(mouse.column, mouse.row) {
                app.selected = app.clamp(index as isize);
            }
        }
        // A press is click-equivalent, not hover-equivalent: it activates
        // the tile under the pointer immediately.
        MouseEventKind::Down(MouseButton::Left) => {
            if app.modal.is_some() {
                app.modal = None;
                return;
            }
            if let Some(index) = app.tile_at(mouse.column, mouse.row) {
                app.activate(index);
            }
        }
        _ => {}
    }
}
