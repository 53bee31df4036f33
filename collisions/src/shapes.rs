use bevy::{math::Vec2, reflect::Reflect};
use common::{FRect, Size2};
use serde::{Deserialize, Serialize};

use crate::error::CollisionError;

/// Which `Shape` variant a collider derives on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum ShapeKind {
    Box,
    Circle,
}

/// Collision geometry in world space. A shape is never mutated in place: every
/// collider update builds a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum Shape {
    /// Axis-aligned box with `origin` as its top-left corner.
    Box { origin: Vec2, size: Size2 },
    Circle { center: Vec2, radius: f32 },
}

type PairTest = fn(&Shape, &Shape) -> Result<bool, CollisionError>;

/// Overlap rule for every ordered pair of shape kinds.
fn pair_test(first: ShapeKind, second: ShapeKind) -> PairTest {
    match (first, second) {
        (ShapeKind::Box, ShapeKind::Box) => collisions::box_to_box,
        (ShapeKind::Box, ShapeKind::Circle) => collisions::box_to_circle,
        (ShapeKind::Circle, ShapeKind::Box) => collisions::circle_to_box,
        (ShapeKind::Circle, ShapeKind::Circle) => collisions::circle_to_circle,
    }
}

impl Shape {
    /// Builds a shape of `kind` filling the frame at `origin` with `size`.
    /// Circles are inscribed: centered in the frame, radius is half the shorter side.
    pub fn from_frame(kind: ShapeKind, origin: Vec2, size: Size2) -> Self {
        match kind {
            ShapeKind::Box => Shape::Box { origin, size },
            ShapeKind::Circle => Shape::Circle {
                center: origin + size.as_vec2() / 2.0,
                radius: size.width.min(size.height) / 2.0,
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Box { .. } => ShapeKind::Box,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Axis-aligned bounding box of the shape.
    pub fn bounds(&self) -> FRect {
        match *self {
            Shape::Box { origin, size } => FRect::from_origin_size(origin, size),
            Shape::Circle { center, radius } => FRect::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            ),
        }
    }

    /// Checks if this shape overlaps `other`. Symmetric, boundary-exclusive;
    /// degenerate shapes also overlap anything they exactly coincide with.
    pub fn overlaps(&self, other: &Shape) -> Result<bool, CollisionError> {
        pair_test(self.kind(), other.kind())(self, other)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        match *self {
            Shape::Box { .. } => crate::shape_tests::rect_to_point(self.bounds(), point),
            Shape::Circle { center, radius } => {
                crate::shape_tests::circle_to_point(center, radius, point)
            }
        }
    }
}

pub mod collisions {
    use super::Shape;
    use crate::{error::CollisionError, shape_tests};

    fn unsupported(first: &Shape, second: &Shape) -> CollisionError {
        CollisionError::UnsupportedShapePair {
            first: first.kind(),
            second: second.kind(),
        }
    }

    pub fn box_to_box(first: &Shape, second: &Shape) -> Result<bool, CollisionError> {
        match (first, second) {
            (Shape::Box { .. }, Shape::Box { .. }) => {
                Ok(shape_tests::rect_to_rect(first.bounds(), second.bounds()))
            }
            _ => Err(unsupported(first, second)),
        }
    }

    pub fn circle_to_circle(first: &Shape, second: &Shape) -> Result<bool, CollisionError> {
        match (*first, *second) {
            (
                Shape::Circle {
                    center: c1,
                    radius: r1,
                },
                Shape::Circle {
                    center: c2,
                    radius: r2,
                },
            ) => Ok(shape_tests::circle_to_circle(c1, r1, c2, r2)),
            _ => Err(unsupported(first, second)),
        }
    }

    pub fn box_to_circle(bx: &Shape, circle: &Shape) -> Result<bool, CollisionError> {
        match (bx, *circle) {
            (Shape::Box { .. }, Shape::Circle { center, radius }) => {
                Ok(shape_tests::rect_to_circle(bx.bounds(), center, radius))
            }
            _ => Err(unsupported(bx, circle)),
        }
    }

    pub fn circle_to_box(circle: &Shape, bx: &Shape) -> Result<bool, CollisionError> {
        box_to_circle(bx, circle).map_err(|_| unsupported(circle, bx))
    }
}
