//! Axis-aligned bounding boxes
//!
//! Every gameplay collision in the game reduces to one rectangle-overlap
//! test, so this is the whole geometry layer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box: top-left corner plus extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Strict-inequality overlap test. Boxes that only share an edge or a
    /// corner do NOT overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = aabb(0.0, 0.0, 40.0, 40.0);
        let b = aabb(30.0, 30.0, 40.0, 40.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_separated_boxes() {
        let a = aabb(0.0, 0.0, 40.0, 40.0);
        let b = aabb(100.0, 0.0, 40.0, 40.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        let a = aabb(0.0, 0.0, 40.0, 40.0);
        // Right edge of `a` exactly on left edge of `b`
        let right = aabb(40.0, 0.0, 40.0, 40.0);
        assert!(!a.overlaps(&right));
        assert!(!right.overlaps(&a));
        // Bottom edge of `a` exactly on top edge of `below`
        let below = aabb(0.0, 40.0, 40.0, 40.0);
        assert!(!a.overlaps(&below));
        // Corner contact only
        let corner = aabb(40.0, 40.0, 40.0, 40.0);
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = aabb(0.0, 0.0, 100.0, 100.0);
        let inner = aabb(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_center() {
        let a = aabb(10.0, 20.0, 40.0, 40.0);
        assert_eq!(a.center(), Vec2::new(30.0, 40.0));
    }

    fn arb_aabb() -> impl Strategy<Value = Aabb> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            1.0f32..100.0,
            1.0f32..100.0,
        )
            .prop_map(|(x, y, w, h)| aabb(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in arb_aabb(), b in arb_aabb()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_box_overlaps_itself(a in arb_aabb()) {
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn prop_shared_edge_never_overlaps(a in arb_aabb(), h in 1.0f32..100.0) {
            // A box whose left edge sits exactly on `a`'s right edge
            let b = aabb(a.pos.x + a.size.x, a.pos.y, 10.0, h);
            prop_assert!(!a.overlaps(&b));
            prop_assert!(!b.overlaps(&a));
        }
    }
}
