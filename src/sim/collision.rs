//! Axis-aligned bounding box collision
//!
//! Screen coordinates: x grows right, y grows down, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Strict overlap test: rectangles that only share an edge do not collide
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(400.0, 550.0), Vec2::new(40.0, 50.0));
        assert_eq!(r.left(), 380.0);
        assert_eq!(r.right(), 420.0);
        assert_eq!(r.top(), 525.0);
        assert_eq!(r.bottom(), 575.0);
        assert_eq!(r.center(), Vec2::new(400.0, 550.0));
    }

    #[test]
    fn test_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_containment_counts() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 8.0, 8.0);
        assert!(intersects(&outer, &inner));
        assert!(intersects(&inner, &outer));
    }

    #[test]
    fn test_shared_vertical_edge_is_not_a_hit() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.right(), b.left());
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_shared_horizontal_edge_is_not_a_hit() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_shared_corner_is_not_a_hit() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 10.0, 10.0, 10.0);
        assert!(!intersects(&a, &b));
    }

    proptest! {
        #[test]
        fn prop_edge_touching_never_intersects(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
            w2 in 1.0f32..200.0,
            dy in -100.0f32..100.0,
        ) {
            let a = rect(x, y, w, h);
            // b starts exactly where a ends
            let b = Rect {
                min: Vec2::new(a.right(), y + dy),
                max: Vec2::new(a.right() + w2, y + dy + h),
            };
            prop_assert!(!intersects(&a, &b));
            prop_assert!(!intersects(&b, &a));
        }

        #[test]
        fn prop_intersects_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            w in 1.0f32..50.0, h in 1.0f32..50.0,
        ) {
            let a = rect(ax, ay, w, h);
            let b = rect(bx, by, h, w);
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }
    }
}
