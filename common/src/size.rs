use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Width and height of an entity or collider.
///
/// [`Size2::new`] clamps negative (and NaN) dimensions to zero. The fields stay
/// public, so code building the struct directly can still produce an invalid
/// size; consumers check [`Size2::is_valid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub struct Size2 {
    pub width: f32,
    pub height: f32,
}

impl Size2 {
    pub const ZERO: Size2 = Size2 {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn splat(side: f32) -> Self {
        Self::new(side, side)
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    /// Applies `scale` to both dimensions. Negative scales (mirroring) only flip
    /// the sprite, they never shrink the box below zero.
    pub fn scaled(self, scale: Scale) -> Self {
        Self {
            width: self.width * scale.x.abs(),
            height: self.height * scale.y.abs(),
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Default for Scale {
    fn default() -> Self {
        Self::ONE
    }
}

impl Scale {
    pub const ONE: Scale = Scale { x: 1.0, y: 1.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn uniform(factor: f32) -> Self {
        Self::new(factor, factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_negative_dimensions() {
        let size = Size2::new(-3.0, 4.0);
        assert_eq!(size, Size2 { width: 0.0, height: 4.0 });
        assert!(size.is_valid());
        assert_eq!(Size2::new(f32::NAN, 1.0).width, 0.0);
    }

    #[test]
    fn raw_negative_size_is_invalid() {
        let size = Size2 {
            width: -1.0,
            height: 5.0,
        };
        assert!(!size.is_valid());
        assert!(!Size2 { width: f32::INFINITY, height: 1.0 }.is_valid());
    }

    #[test]
    fn scale_defaults_to_one() {
        assert_eq!(Scale::default(), Scale::new(1.0, 1.0));
        assert_eq!(Size2::new(10.0, 4.0).scaled(Scale::default()), Size2::new(10.0, 4.0));
        assert_eq!(
            Size2::new(10.0, 4.0).scaled(Scale::new(-2.0, 0.5)),
            Size2::new(20.0, 2.0)
        );
    }
}
