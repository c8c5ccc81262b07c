//! Project description — the declarative tile list behind the menu.
//!
//! A project is a single `project.json` at the root of the project
//! directory. Loaded once at startup, never mutated afterwards. Assets
//! (tile images, sound cues) live next to it under `assets/`.

pub mod error;

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

pub use error::{ProjectError, ProjectResult};

/// Image path used when a tile declares no asset.
pub const PLACEHOLDER_ASSET: &str = "assets/placeholder.png";

/// The effect triggered when a tile is activated.
///
/// The wire shape is internally tagged: `{"type": "open", "target": ...}`
/// or `{"type": "alert", "message"?: ...}`. Any other tag deserializes to
/// `Unknown`, which activation treats the same as no action at all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    Open {
        target: String,
    },
    Alert {
        #[serde(default)]
        message: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

/// One selectable unit in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tile {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub action: Option<Action>,
}

impl Tile {
    /// Accessible label: the tile's own label, or a `tile-<index>` fallback.
    pub fn display_label(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("tile-{index}"))
    }

    /// Image path for this tile. Never validated for existence.
    pub fn asset_path(&self) -> String {
        match &self.asset {
            Some(asset) => format!("assets/{asset}"),
            None => PLACEHOLDER_ASSET.to_string(),
        }
    }

    /// Short badge drawn in the tile cell where a browser would show the
    /// image: the asset file stem in brackets, or a blank placeholder.
    pub fn icon_badge(&self) -> String {
        match &self.asset {
            Some(asset) => {
                let stem = Path::new(asset)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or(asset.as_str());
                format!("[{stem}]")
            }
            None => "[ ]".to_string(),
        }
    }
}

/// The full project description: an ordered tile list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub tiles: Vec<Tile>,
}

impl Project {
    /// Load `project.json` from the project directory.
    ///
    /// An absent `tiles` array is an empty menu, not an error. Any I/O or
    /// parse failure is terminal for this run — the caller shows the
    /// fallback screen and the user restarts.
    pub async fn load(dir: &Path) -> ProjectResult<Self> {
        let path = dir.join("project.json");
        debug!(path = %path.display(), "loading project");
        let content = tokio::fs::read_to_string(&path).await?;
        let project: Project = serde_json::from_str(&content)?;
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(json: &str) -> Project {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parse_full_project() {
        let project = parse(
            r#"{
                "tiles": [
                    {"label": "Play", "asset": "play.png",
                     "action": {"type": "open", "target": "https://example.com"}},
                    {"label": "Help",
                     "action": {"type": "alert", "message": "Use the arrows."}}
                ]
            }"#,
        );
        assert_eq!(project.tiles.len(), 2);
        assert_eq!(
            project.tiles[0].action,
            Some(Action::Open {
                target: "https://example.com".into()
            })
        );
        assert_eq!(
            project.tiles[1].action,
            Some(Action::Alert {
                message: Some("Use the arrows.".into())
            })
        );
    }

    #[test]
    fn absent_tiles_is_empty_menu() {
        let project = parse("{}");
        assert!(project.tiles.is_empty());
    }

    #[test]
    fn tile_fields_all_optional() {
        let project = parse(r#"{"tiles": [{}]}"#);
        let tile = &project.tiles[0];
        assert!(tile.label.is_none());
        assert!(tile.asset.is_none());
        assert!(tile.action.is_none());
    }

    #[test]
    fn alert_message_optional() {
        let project = parse(r#"{"tiles": [{"action": {"type": "alert"}}]}"#);
        assert_eq!(
            project.tiles[0].action,
            Some(Action::Alert { message: None })
        );
    }

    #[test]
    fn unknown_action_type_parses() {
        let project = parse(r#"{"tiles": [{"action": {"type": "dance", "bpm": 120}}]}"#);
        assert_eq!(project.tiles[0].action, Some(Action::Unknown));
    }

    #[test]
    fn display_label_falls_back_to_index() {
        let tile = Tile {
            label: None,
            asset: None,
            action: None,
        };
        assert_eq!(tile.display_label(3), "tile-3");

        let tile = Tile {
            label: Some("Play".into()),
            asset: None,
            action: None,
        };
        assert_eq!(tile.display_label(3), "Play");
    }

    #[test]
    fn asset_path_resolution() {
        let tile = Tile {
            label: None,
            asset: Some("rocket.png".into()),
            action: None,
        };
        assert_eq!(tile.asset_path(), "assets/rocket.png");

        let tile = Tile {
            label: None,
            asset: None,
            action: None,
        };
        assert_eq!(tile.asset_path(), PLACEHOLDER_ASSET);
    }

    #[test]
    fn icon_badge_uses_file_stem() {
        let tile = Tile {
            label: None,
            asset: Some("rocket.png".into()),
            action: None,
        };
        assert_eq!(tile.icon_badge(), "[rocket]");

        let tile = Tile {
            label: None,
            asset: None,
            action: None,
        };
        assert_eq!(tile.icon_badge(), "[ ]");
    }

    #[tokio::test]
    async fn load_from_disk() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("project.json"),
            r#"{"tiles": [{"label": "One"}, {"label": "Two"}]}"#,
        )
        .unwrap();

        let project = Project::load(dir.path()).await.unwrap();
        assert_eq!(project.tiles.len(), 2);
        assert_eq!(project.tiles[0].label.as_deref(), Some("One"));
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Project::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, ProjectError::Io(_)));
    }

    #[tokio::test]
    async fn load_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("project.json"), "{not json").unwrap();
        let err = Project::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, ProjectError::Parse(_)));
    }
}
