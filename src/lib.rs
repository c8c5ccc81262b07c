//! tilemenu — a terminal tile-grid launcher.
//!
//! Loads a declarative project description (`project.json`) and presents
//! its tiles as a selectable grid. Navigation via arrow keys or mouse
//! hover, activation via Enter or click. A tile either opens a URL or
//! shows a notice.

pub mod audio;
pub mod logging;
pub mod project;
pub mod tui;
