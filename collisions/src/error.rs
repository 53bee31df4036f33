use thiserror::Error;

use crate::shapes::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CollisionError {
    /// `Collider::update` got a negative or non-finite size. The collider keeps its previous shape.
    #[error("invalid collider size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
    /// `Collider::update` got a non-finite position. The collider keeps its previous shape.
    #[error("invalid collider position ({x}, {y})")]
    InvalidPosition { x: f32, y: f32 },
    /// A pair test was handed shape variants it has no rule for.
    #[error("no overlap test for {first:?} against {second:?}")]
    UnsupportedShapePair { first: ShapeKind, second: ShapeKind },
}
