use bevy::prelude::*;
use common::{Anchor, FRect, Size2};
use serde::{Deserialize, Serialize};

use super::{
    error::CollisionError,
    shapes::{Shape, ShapeKind},
    ALL_LAYERS,
};

/// How a collider's shape follows its entity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum SyncMode {
    /// Updated by the integration layer every frame from the entity's transform.
    #[default]
    Auto,
    /// Only updated when the owner calls `Collider::update` explicitly.
    Manual,
}

#[derive(Debug, Component, Clone, PartialEq, Reflect)]
pub struct Collider {
    /// Used for identification and in log messages.
    pub name: String,
    /// The `Shape` variant built by `update`.
    pub kind: ShapeKind,
    /// Read by the integration layer, never enforced by the collider itself.
    pub sync_mode: SyncMode,
    /// Takes precedence over the size passed to `update`.
    pub size: Option<Size2>,
    /// Takes precedence over the anchor passed to `update`.
    pub anchor: Option<Anchor>,
    /// Result of the last successful `update`, `None` before the first one.
    pub shape: Option<Shape>,
    /// Bitmask of the layers this collider is on.
    pub physics_layer: i32,
    /// Layer mask of all the layers this Collider should collide with.
    /// Default is all layers.
    pub collides_with_layers: i32,
}

impl Collider {
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            sync_mode: SyncMode::Auto,
            size: None,
            anchor: None,
            shape: None,
            physics_layer: 1 << 0,
            collides_with_layers: ALL_LAYERS,
        }
    }

    pub fn boxed(name: impl Into<String>) -> Self {
        Self::new(name, ShapeKind::Box)
    }

    pub fn circle(name: impl Into<String>) -> Self {
        Self::new(name, ShapeKind::Circle)
    }

    pub fn with_sync_mode(mut self, sync_mode: SyncMode) -> Self {
        self.sync_mode = sync_mode;
        self
    }

    pub fn with_size(mut self, size: Size2) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_layers(mut self, physics_layer: i32, collides_with_layers: i32) -> Self {
        self.physics_layer = physics_layer;
        self.collides_with_layers = collides_with_layers;
        self
    }

    /// Rebuilds the shape from the entity's transform and stores it.
    ///
    /// The size and anchor overrides, when set, replace `size` and `anchor`.
    /// On error the previously stored shape is left untouched.
    pub fn update(
        &mut self,
        position: Vec2,
        size: Size2,
        anchor: Anchor,
    ) -> Result<Shape, CollisionError> {
        let size = self.size.unwrap_or(size);
        let anchor = self.anchor.unwrap_or(anchor);

        if !size.is_valid() {
            debug!("collider '{}' rejected size {:?}", self.name, size);
            return Err(CollisionError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }

        if !position.is_finite() {
            debug!("collider '{}' rejected position {}", self.name, position);
            return Err(CollisionError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }

        let shape = Shape::from_frame(self.kind, anchor.origin(position, size), size);
        self.shape = Some(shape);

        Ok(shape)
    }

    /// Checks if this collider overlaps `other`.
    ///
    /// A collider that was never updated has nothing to collide with, so this is
    /// `Ok(false)` rather than an error. Colliders whose layer masks exclude each
    /// other never overlap.
    pub fn overlaps(&self, other: &Collider) -> Result<bool, CollisionError> {
        let (Some(shape), Some(other_shape)) = (&self.shape, &other.shape) else {
            return Ok(false);
        };

        if !self.shares_layers_with(other) {
            return Ok(false);
        }

        shape.overlaps(other_shape)
    }

    /// Both colliders have to accept each other's layer.
    pub fn shares_layers_with(&self, other: &Collider) -> bool {
        self.collides_with_layers & other.physics_layer != 0
            && other.collides_with_layers & self.physics_layer != 0
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.shape
            .map(|shape| shape.contains_point(point))
            .unwrap_or(false)
    }

    pub fn bounds(&self) -> Option<FRect> {
        self.shape.map(|shape| shape.bounds())
    }
}
