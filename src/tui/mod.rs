//! The menu screen — ratatui TUI presentation layer.
//!
//! ## Architecture (TEA)
//!
//! Model (`MenuApp`) + Update (message handler) + View (render).
//! Immediate mode, no retained widget state. The view is a pure function
//! of the model; side effects that leave the process (URL launch, sound
//! cues) are staged on the model and drained by the runner after each
//! update.

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod runner;
