//! Axis-aligned bounding boxes

use crate::foundation::math::Vec2;

/// Axis-aligned box described by its centre and half extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Centre of the box
    pub center: Vec2,
    /// Half width and half height
    pub half_extents: Vec2,
}

impl Aabb {
    /// Create a box from its centre and half extents
    pub const fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self { center, half_extents }
    }

    /// Create a box from its lower-left and upper-right corners
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self {
            center: (min + max) * 0.5,
            half_extents: (max - min) * 0.5,
        }
    }

    /// Smallest x
    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    /// Largest x
    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    /// Smallest y
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    /// Largest y
    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Whether two boxes overlap; touching edges count as overlapping so a
    /// body resting exactly on a surface still reports contact
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.bottom() <= other.top()
            && other.bottom() <= self.top()
    }

    /// Whether the vertical extents overlap (edges inclusive)
    pub fn overlaps_y(&self, other: &Self) -> bool {
        self.bottom() <= other.top() && other.bottom() <= self.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Aabb::new(Vec2::new(1.5, 0.5), Vec2::new(1.0, 1.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_counts_as_overlap() {
        let ground = Aabb::from_min_max(Vec2::new(0.0, 0.0), Vec2::new(200.0, 60.0));
        let resting = Aabb::new(Vec2::new(100.0, 80.0), Vec2::new(9.0, 20.0));
        assert!(ground.overlaps(&resting));
    }

    #[test]
    fn test_separated_boxes() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let b = Aabb::new(Vec2::new(0.0, 2.5), Vec2::new(1.0, 1.0));
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps_y(&b));
    }

    #[test]
    fn test_edges() {
        let b = Aabb::from_min_max(Vec2::new(10.0, 20.0), Vec2::new(30.0, 60.0));
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.right(), 30.0);
        assert_eq!(b.bottom(), 20.0);
        assert_eq!(b.top(), 60.0);
    }
}
