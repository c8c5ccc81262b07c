//! MenuApp — the TEA model.
//!
//! All state lives here. Update receives MenuMessages, mutates state.
//! View reads state to produce ratatui widgets. No side effects in
//! update or view: URL launches and sound cues are staged as pending
//! values and executed by the runner.

use ratatui::layout::{Position, Rect};

use crate::audio::Cue;
use crate::project::{Action, Tile};

use super::event::MenuMessage;
use super::layout::{TILE_GAP, TILE_WIDTH};

/// Column count assumed before anything has been rendered.
const DEFAULT_COLUMNS: usize = 4;

/// The menu application state (TEA model).
pub struct MenuApp {
    /// Tile list, loaded once at startup.
    pub tiles: Vec<Tile>,
    /// Index of the highlighted tile. Always within bounds when tiles is
    /// non-empty; 0 when empty.
    pub selected: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Set when project.json could not be loaded; the view shows the
    /// fallback text instead of the grid.
    pub load_failed: bool,
    /// Active modal notice. While set, all input dismisses it.
    pub modal: Option<String>,
    /// Fixed column count from the CLI. Skips width-based estimation.
    pub columns_override: Option<u16>,
    /// Grid content area from the last render (measured by the view).
    pub grid_area: Option<Rect>,
    /// Screen rectangle of every rendered tile cell, in tile order.
    /// These are the index markers used for mouse hit-testing.
    pub tile_rects: Vec<(usize, Rect)>,
    /// First visible grid row (the view scrolls the selection into view).
    pub row_offset: usize,
    /// Sound cue staged by the last update, consumed by the runner.
    pub pending_cue: Option<Cue>,
    /// URL staged for launch by the last update, consumed by the runner.
    pub pending_open: Option<String>,
}

impl MenuApp {
    pub fn new(columns_override: Option<u16>) -> Self {
        Self {
            tiles: Vec::new(),
            selected: 0,
            should_quit: false,
            load_failed: false,
            modal: None,
            columns_override,
            grid_area: None,
            tile_rects: Vec::new(),
            row_offset: 0,
            pending_cue: None,
            pending_open: None,
        }
    }

    /// Handle a menu message (TEA update).
    pub fn update(&mut self, msg: MenuMessage) {
        match msg {
            MenuMessage::Input(key) => {
                super::input::handle_key(self, key);
            }
            MenuMessage::Pointer(mouse) => {
                super::input::handle_mouse(self, mouse);
            }
            MenuMessage::Render => {
                // Drawing handled externally by the runner.
            }
            MenuMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Clamp an index into the valid selection range.
    ///
    /// Pure and total: 0 for an empty tile list, otherwise the input
    /// clamped into `[0, len-1]`. Every selection mutation routes through
    /// here.
    pub fn clamp(&self, index: isize) -> usize {
        let n = self.tiles.len();
        if n == 0 {
            return 0;
        }
        if index < 0 {
            0
        } else if index as usize >= n {
            n - 1
        } else {
            index as usize
        }
    }

    /// Best-known current column count, used to map vertical navigation
    /// to index deltas.
    ///
    /// Priority: explicit CLI override; else an estimate from the last
    /// measured grid width when at least one tile exists; else 4.
    /// Re-evaluated on every vertical key press — the terminal can be
    /// resized between frames.
    pub fn columns(&self) -> usize {
        if let Some(n) = self.columns_override {
            return n.max(1) as usize;
        }
        if let Some(area) = self.grid_area {
            if !self.tiles.is_empty() {
                let step = TILE_WIDTH + TILE_GAP;
                return (area.width / step).max(1) as usize;
            }
        }
        DEFAULT_COLUMNS
    }

    /// Shift the selection by a signed delta, clamped, and stage the move
    /// cue. Hitting an edge still plays the cue — the key was handled.
    pub fn move_by(&mut self, delta: isize) {
        self.selected = self.clamp(self.selected as isize + delta);
        self.pending_cue = Some(Cue::Move);
    }

    /// Escape: back to the first tile. Silent.
    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    /// Activate the tile at `index`: clamp, store as the new selection,
    /// then stage the tile's effect. Open actions stage a URL for the
    /// runner; alert actions (and tiles with no usable action) raise a
    /// modal notice. Empty menu: the selection update is the whole effect.
    pub fn activate(&mut self, index: usize) {
        let idx = self.clamp(index as isize);
        self.selected = idx;

        let (label, action) = match self.tiles.get(idx) {
            Some(tile) => (tile.display_label(idx), tile.action.clone()),
            None => return,
        };

        match action {
            Some(Action::Open { target }) => {
                self.pending_open = Some(target);
            }
            Some(Action::Alert { message }) => {
                self.modal = Some(message.unwrap_or_else(|| format!("Activated: {label}")));
            }
            Some(Action::Unknown) | None => {
                self.modal = Some(format!("Activated: {label}"));
            }
        }
    }

    /// Index marker of the tile cell under the given screen position.
    pub fn tile_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.tile_rects
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(index, _)| *index)
    }
}

impl Default for MenuApp {
    fn default() -> Self {
        Self::new(None)
    }
}
