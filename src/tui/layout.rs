//! Menu grid layout.
//!
//! ```text
//! ┌────────────────┐  ┌────────────────┐  ┌────────────────┐
//! │    [rocket]    │  │     [docs]     │  │      [ ]       │
//! │      Play      │  │      Help      │  │     tile-2     │
//! └────────────────┘  └────────────────┘  └────────────────┘
//! ├──────────────────────────────────────────────────────────┤
//! │ 1/3  Play   ←→↑↓ move   Enter open   Esc top   q quit    │
//! ```
//!
//! Every frame rebuilds the grid from the tile list, records each cell's
//! rectangle on the model for mouse hit-testing, and re-applies the
//! selection highlight. A modal notice, when present, overlays the grid.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::project::Tile;

use super::app::MenuApp;

/// Width of one tile cell, borders included.
pub const TILE_WIDTH: u16 = 18;
/// Height of one tile cell, borders included.
pub const TILE_HEIGHT: u16 = 5;
/// Horizontal gap between tile cells.
pub const TILE_GAP: u16 = 2;

/// Shown in place of the menu when project.json could not be loaded.
pub const LOAD_FAILURE_TEXT: &str = "Failed to load project.json. See README.";

/// Draw the full menu frame.
pub fn draw(f: &mut Frame, app: &mut MenuApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // tile grid
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    if app.load_failed {
        app.tile_rects.clear();
        draw_load_failure(f, outer[0]);
    } else {
        draw_grid(f, app, outer[0]);
    }
    draw_status(f, app, outer[1]);

    // Modal notice rendered last — overlays the grid until dismissed.
    if let Some(text) = app.modal.clone() {
        draw_notice(f, &text);
    }
}

fn draw_grid(f: &mut Frame, app: &mut MenuApp, area: Rect) {
    // Record the measured area first: the column estimate below and the
    // vertical-navigation probe both read it.
    app.grid_area = Some(area);
    app.tile_rects.clear();

    if app.tiles.is_empty() {
        let empty = Paragraph::new("project has no tiles")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let cols = app.columns();
    let visible_rows = (area.height / TILE_HEIGHT).max(1) as usize;

    // Keep the selection on screen, scrolling whole rows.
    let selected_row = app.selected / cols;
    if selected_row < app.row_offset {
        app.row_offset = selected_row;
    } else if selected_row >= app.row_offset + visible_rows {
        app.row_offset = selected_row + 1 - visible_rows;
    }

    let step_x = TILE_WIDTH + TILE_GAP;
    for (index, tile) in app.tiles.iter().enumerate() {
        let row = index / cols;
        let col = index % cols;
        if row < app.row_offset || row >= app.row_offset + visible_rows {
            continue;
        }
        let x_off = col as u32 * step_x as u32;
        if x_off + TILE_WIDTH as u32 > area.width as u32 {
            continue;
        }
        let y = area.y + (row - app.row_offset) as u16 * TILE_HEIGHT;
        if y + TILE_HEIGHT > area.y + area.height {
            continue;
        }
        let cell = Rect::new(area.x + x_off as u16, y, TILE_WIDTH, TILE_HEIGHT);
        draw_tile(f, tile, index, index == app.selected, cell);
        app.tile_rects.push((index, cell));
    }
}

fn draw_tile(f: &mut Frame, tile: &Tile, index: usize, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let label_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let lines = vec![
        Line::from(Span::styled(
            tile.icon_badge(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(tile.display_label(index), label_style)),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn draw_load_failure(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let message = Paragraph::new(LOAD_FAILURE_TEXT)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    f.render_widget(message, rows[1]);
}

fn draw_status(f: &mut Frame, app: &MenuApp, area: Rect) {
    let position = if app.load_failed {
        "load failed".to_string()
    } else {
        match app.tiles.get(app.selected) {
            Some(tile) => format!(
                "{}/{}  {}",
                app.selected + 1,
                app.tiles.len(),
                tile.display_label(app.selected)
            ),
            None => "no tiles".to_string(),
        }
    };

    let line = Line::from(vec![
        Span::styled(format!(" {position}"), Style::default().fg(Color::Cyan)),
        Span::raw("   "),
        Span::styled(
            "←→↑↓ move   Enter open   Esc top   q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_notice(f: &mut Frame, text: &str) {
    let frame_area = f.area();
    let width = (text.chars().count() as u16 + 6)
        .max(24)
        .min(frame_area.width.saturating_sub(2).max(1));
    let height = 5.min(frame_area.height);
    let area = Rect::new(
        frame_area.x + frame_area.width.saturating_sub(width) / 2,
        frame_area.y + frame_area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, area);
    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let body = Paragraph::new(vec![
        Line::from(text.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(body, area);
}
