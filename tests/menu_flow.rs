//! End-to-end menu flow: load a project from disk, render it, navigate,
//! and activate — everything short of a real terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::TempDir;

use tilemenu::project::Project;
use tilemenu::tui::app::MenuApp;
use tilemenu::tui::event::MenuMessage;
use tilemenu::tui::layout;

fn key(code: KeyCode) -> MenuMessage {
    MenuMessage::Input(KeyEvent::new(code, KeyModifiers::NONE))
}

#[tokio::test]
async fn load_navigate_activate() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("project.json"),
        r#"{
            "tiles": [
                {"label": "Docs",
                 "action": {"type": "open", "target": "https://example.com/docs"}},
                {"label": "About",
                 "action": {"type": "alert", "message": "tilemenu 0.1"}},
                {"label": "Play"}
            ]
        }"#,
    )
    .unwrap();

    let project = Project::load(dir.path()).await.unwrap();
    let mut app = MenuApp::new(None);
    app.tiles = project.tiles;

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| layout::draw(f, &mut app)).unwrap();
    assert_eq!(app.tile_rects.len(), 3);

    // Walk to the second tile and activate it.
    app.update(key(KeyCode::Right));
    app.update(key(KeyCode::Enter));
    assert_eq!(app.modal.as_deref(), Some("tilemenu 0.1"));

    // Dismiss, jump back to the first tile, follow the link.
    app.update(key(KeyCode::Enter));
    assert!(app.modal.is_none());
    app.update(key(KeyCode::Esc));
    app.update(key(KeyCode::Enter));
    assert_eq!(app.pending_open.as_deref(), Some("https://example.com/docs"));
    assert_eq!(app.selected, 0);

    // Re-rendering keeps the markers and the selection.
    terminal.draw(|f| layout::draw(f, &mut app)).unwrap();
    assert_eq!(app.tile_rects.len(), 3);
    assert_eq!(app.selected, 0);
}

#[tokio::test]
async fn missing_project_renders_fallback() {
    let dir = TempDir::new().unwrap();
    let mut app = MenuApp::new(None);
    app.load_failed = Project::load(dir.path()).await.is_err();
    assert!(app.load_failed);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| layout::draw(f, &mut app)).unwrap();
    assert!(app.tile_rects.is_empty());
}
