use common::{Anchor, Size2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    colliders::{Collider, SyncMode},
    shapes::ShapeKind,
    ALL_LAYERS,
};

/// Declarative description of a collider, loaded from JSON.
///
/// ```json
/// { "name": "coin", "shape": "Circle", "sync_mode": "Manual",
///   "size": { "width": 8.0, "height": 8.0 }, "anchor": "Center" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColliderPrefab {
    pub name: String,
    pub shape: ShapeKind,
    #[serde(default)]
    pub sync_mode: SyncMode,
    #[serde(default)]
    pub size: Option<Size2>,
    #[serde(default)]
    pub anchor: Option<Anchor>,
    #[serde(default = "default_physics_layer")]
    pub physics_layer: i32,
    #[serde(default = "default_collides_with_layers")]
    pub collides_with_layers: i32,
}

fn default_physics_layer() -> i32 {
    1 << 0
}

fn default_collides_with_layers() -> i32 {
    ALL_LAYERS
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PrefabError {
    #[error("Could not parse collider prefab: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Collider prefab '{name}' has an invalid size override {width}x{height}")]
    InvalidSize { name: String, width: f32, height: f32 },
    #[error("No collider prefab named '{0}'")]
    MissingPrefab(String),
}

impl ColliderPrefab {
    pub fn from_json(json: &str) -> Result<Self, PrefabError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn list_from_json(json: &str) -> Result<Vec<Self>, PrefabError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Looks up the prefab called `name` in a loaded list.
    pub fn find<'a>(prefabs: &'a [Self], name: &str) -> Result<&'a Self, PrefabError> {
        prefabs
            .iter()
            .find(|prefab| prefab.name == name)
            .ok_or_else(|| PrefabError::MissingPrefab(name.to_string()))
    }

    /// Creates a fresh (not yet positioned) collider from this prefab.
    pub fn build(&self) -> Result<Collider, PrefabError> {
        let mut collider = Collider::new(self.name.clone(), self.shape)
            .with_sync_mode(self.sync_mode)
            .with_layers(self.physics_layer, self.collides_with_layers);

        if let Some(size) = self.size {
            if !size.is_valid() {
                return Err(PrefabError::InvalidSize {
                    name: self.name.clone(),
                    width: size.width,
                    height: size.height,
                });
            }
            collider = collider.with_size(size);
        }

        if let Some(anchor) = self.anchor {
            collider = collider.with_anchor(anchor);
        }

        Ok(collider)
    }
}
