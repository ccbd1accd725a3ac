//! Level description loaded from JSON.
//!
//! A level is a character spawn point plus a list of static boxes. Boxes may
//! carry an interaction so the character can use them.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "spawn": [0.0, 0.0, 0.0],
//!   "boxes": [
//!     { "center": [0.0, -0.5, 0.0], "size": [40.0, 1.0, 40.0], "color": "#5a6e4a" },
//!     { "center": [3.0, 0.5, 4.0], "size": [1.0, 1.0, 1.0], "layer": 1,
//!       "color": "#d4a017", "interaction": { "kind": "switch", "name": "lamp" } }
//!   ]
//! }
//! ```
//!
//! `layer` defaults to 0 (ground). See [`crate::game::spawn_level`] for how
//! the description becomes entities.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelData {
    #[serde(default)]
    pub spawn: [f32; 3],
    pub boxes: Vec<LevelBox>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelBox {
    pub center: [f32; 3],
    pub size: [f32; 3],
    #[serde(default)]
    pub layer: u8,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub interaction: Option<LevelInteraction>,
}

/// Built-in interaction behaviours a level box can carry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LevelInteraction {
    Switch { name: String },
    Counter { name: String },
}

impl LevelData {
    /// Loads level data from a JSON file at the specified path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, String> {
        let file_content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level {}: {}", path.display(), e))?;
        Self::from_json(&file_content)
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid level data: {}", e))
    }

    /// Small walled courtyard with two platforms and three interactables.
    pub fn courtyard() -> Self {
        let solid = |center: [f32; 3], size: [f32; 3], color: &str| LevelBox {
            center,
            size,
            layer: 0,
            color: Some(color.to_string()),
            interaction: None,
        };
        let usable = |center: [f32; 3], color: &str, interaction: LevelInteraction| LevelBox {
            center,
            size: [0.8, 0.8, 0.8],
            layer: 1,
            color: Some(color.to_string()),
            interaction: Some(interaction),
        };
        Self {
            spawn: [0.0, 0.0, 0.0],
            boxes: vec![
                solid([0.0, -0.5, 0.0], [40.0, 1.0, 40.0], "#5a6e4a"),
                solid([0.0, 1.5, 20.5], [40.0, 4.0, 1.0], "#8a7f70"),
                solid([0.0, 1.5, -20.5], [40.0, 4.0, 1.0], "#8a7f70"),
                solid([20.5, 1.5, 0.0], [1.0, 4.0, 40.0], "#8a7f70"),
                solid([-20.5, 1.5, 0.0], [1.0, 4.0, 40.0], "#8a7f70"),
                solid([-5.0, 0.4, 6.0], [3.0, 0.8, 3.0], "#9c6b4e"),
                solid([-5.0, 1.0, 10.0], [3.0, 2.0, 3.0], "#9c6b4e"),
                usable(
                    [3.0, 0.4, 4.0],
                    "#d4a017",
                    LevelInteraction::Switch {
                        name: "lamp".into(),
                    },
                ),
                usable(
                    [6.0, 0.4, -2.0],
                    "#3b7dd8",
                    LevelInteraction::Counter {
                        name: "bell".into(),
                    },
                ),
                usable(
                    [-5.0, 2.4, 10.0],
                    "#c0392b",
                    LevelInteraction::Switch {
                        name: "beacon".into(),
                    },
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults_layer_and_spawn() {
        let level = LevelData::from_json(
            r#"{ "boxes": [ { "center": [0, -0.5, 0], "size": [10, 1, 10] } ] }"#,
        )
        .unwrap();
        assert_eq!(level.spawn, [0.0, 0.0, 0.0]);
        assert_eq!(level.boxes[0].layer, 0);
        assert!(level.boxes[0].interaction.is_none());
    }

    #[test]
    fn test_from_json_interaction_kinds() {
        let level = LevelData::from_json(
            r#"{ "boxes": [
                { "center": [0, 0, 0], "size": [1, 1, 1], "layer": 1,
                  "interaction": { "kind": "counter", "name": "bell" } }
            ] }"#,
        )
        .unwrap();
        assert_eq!(
            level.boxes[0].interaction,
            Some(LevelInteraction::Counter {
                name: "bell".into()
            })
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let err = LevelData::from_json(
            r#"{ "boxes": [ { "center": [0, 0, 0], "size": [1, 1, 1],
                 "interaction": { "kind": "portal", "name": "x" } } ] }"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_courtyard_survives_json() {
        let level = LevelData::courtyard();
        let text = serde_json::to_string(&level).unwrap();
        assert_eq!(LevelData::from_json(&text).unwrap(), level);
    }
}
