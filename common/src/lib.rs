use bevy::prelude::*;

pub mod anchor;
pub mod size;

pub use anchor::Anchor;
pub use size::{Scale, Size2};

/// Describes a 2D-rectangle with {x,y} being the top-left corner of the rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct FRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Size2) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-open containment: the left and top edges are inside, the right and bottom are not.
    pub fn contains(&self, point: Vec2) -> bool {
        self.x <= point.x
            && point.x < (self.x + self.width)
            && self.y <= point.y
            && point.y < (self.y + self.height)
    }

    /// Strict interval overlap on both axes. Rectangles that only share an edge
    /// do not intersect.
    pub fn intersects(&self, other: FRect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// The point of the rectangle (border included) nearest to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        // max/min instead of clamp: clamp panics on a malformed (negative) rect
        Vec2::new(
            point.x.max(self.left()).min(self.right()),
            point.y.max(self.top()).min(self.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_top_left_origin() {
        let rect = FRect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
        assert_eq!(FRect::from_origin_size(Vec2::new(10.0, 20.0), Size2::new(30.0, 40.0)), rect);
    }

    #[test]
    fn contains_is_half_open() {
        let rect = FRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::ZERO));
        assert!(rect.contains(Vec2::new(9.99, 9.99)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn shared_edge_is_not_an_intersection() {
        let a = FRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(FRect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(FRect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(a.intersects(FRect::new(9.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn closest_point_clamps_to_border() {
        let rect = FRect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect.closest_point(Vec2::new(-5.0, 5.0)), Vec2::new(0.0, 5.0));
        assert_eq!(rect.closest_point(Vec2::new(15.0, 15.0)), Vec2::new(10.0, 10.0));
        assert_eq!(rect.closest_point(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
    }
}
