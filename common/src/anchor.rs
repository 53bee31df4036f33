use bevy::prelude::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::Size2;

/// Reference point of an entity's bounding box that its position refers to.
///
/// The discriminant is a sector bitmask: `Top = 1`, `Bottom = 2`, `Right = 4`,
/// `Left = 8`, with no bit set meaning centered on that axis. This keeps packed
/// anchors (`u8`) convertible with `Anchor::try_from`.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Reflect,
    Serialize,
    Deserialize,
    IntoPrimitive,
    TryFromPrimitive,
)]
#[repr(u8)]
pub enum Anchor {
    #[default]
    TopLeft = 9,
    TopCenter = 1,
    TopRight = 5,
    CenterLeft = 8,
    Center = 0,
    CenterRight = 4,
    BottomLeft = 10,
    BottomCenter = 2,
    BottomRight = 6,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::Center,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    const TOP: u8 = 1;
    const BOTTOM: u8 = 2;
    const RIGHT: u8 = 4;
    const LEFT: u8 = 8;

    /// 0 for left, 0.5 for centered, 1 for right.
    pub fn horizontal_factor(self) -> f32 {
        let sector = self as u8;
        if sector & Self::LEFT != 0 {
            0.0
        } else if sector & Self::RIGHT != 0 {
            1.0
        } else {
            0.5
        }
    }

    /// 0 for top, 0.5 for centered, 1 for bottom. Y grows downwards.
    pub fn vertical_factor(self) -> f32 {
        let sector = self as u8;
        if sector & Self::TOP != 0 {
            0.0
        } else if sector & Self::BOTTOM != 0 {
            1.0
        } else {
            0.5
        }
    }

    /// Offset from the top-left corner of a box of `size` to this anchor point.
    pub fn offset(self, size: Size2) -> Vec2 {
        Vec2::new(
            self.horizontal_factor() * size.width,
            self.vertical_factor() * size.height,
        )
    }

    /// Top-left corner of the box of `size` whose anchor point sits at `position`.
    pub fn origin(self, position: Vec2, size: Size2) -> Vec2 {
        position - self.offset(size)
    }

    /// Inverse of [`Anchor::origin`].
    pub fn position_from_origin(self, origin: Vec2, size: Size2) -> Vec2 {
        origin + self.offset(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn origin_for_every_anchor() {
        let position = Vec2::new(100.0, 50.0);
        let size = Size2::new(20.0, 10.0);

        let expected = [
            (Anchor::TopLeft, Vec2::new(100.0, 50.0)),
            (Anchor::TopCenter, Vec2::new(90.0, 50.0)),
            (Anchor::TopRight, Vec2::new(80.0, 50.0)),
            (Anchor::CenterLeft, Vec2::new(100.0, 45.0)),
            (Anchor::Center, Vec2::new(90.0, 45.0)),
            (Anchor::CenterRight, Vec2::new(80.0, 45.0)),
            (Anchor::BottomLeft, Vec2::new(100.0, 40.0)),
            (Anchor::BottomCenter, Vec2::new(90.0, 40.0)),
            (Anchor::BottomRight, Vec2::new(80.0, 40.0)),
        ];

        for (anchor, origin) in expected {
            assert_eq!(anchor.origin(position, size), origin, "{anchor:?}");
        }
    }

    #[test]
    fn origin_round_trips_to_position() {
        let position = Vec2::new(-12.3, 45.6);
        let size = Size2::new(7.7, 3.1);

        for anchor in Anchor::ALL {
            let origin = anchor.origin(position, size);
            let back = anchor.position_from_origin(origin, size);
            assert_relative_eq!(back.x, position.x, epsilon = 1e-4);
            assert_relative_eq!(back.y, position.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn packed_anchor_conversion() {
        for anchor in Anchor::ALL {
            let packed: u8 = anchor.into();
            assert_eq!(Anchor::try_from(packed).ok(), Some(anchor));
        }
        // left and right at once is not a point of the grid
        assert!(Anchor::try_from(12u8).is_err());
    }

    #[test]
    fn default_is_top_left() {
        assert_eq!(Anchor::default(), Anchor::TopLeft);
        let position = Vec2::new(3.0, 4.0);
        assert_eq!(Anchor::default().origin(position, Size2::splat(10.0)), position);
    }

    #[test]
    fn zero_size_puts_origin_on_position() {
        let position = Vec2::new(3.0, 4.0);
        for anchor in Anchor::ALL {
            assert_eq!(anchor.origin(position, Size2::ZERO), position);
        }
    }
}
