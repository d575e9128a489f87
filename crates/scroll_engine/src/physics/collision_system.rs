//! Broad-phase collision detection
//!
//! A pure pass over axis-aligned boxes that yields every overlapping,
//! layer-compatible pair exactly once. Colliders are swept along x after a
//! stable sort, and the resulting pairs are ordered by insertion index, so
//! the output depends only on what was inserted and in which order.

use crate::physics::aabb::Aabb;
use crate::physics::collision_layers::CollisionLayers;

/// Collider registered for one detection pass
#[derive(Debug, Clone, Copy)]
pub struct Collider<H> {
    /// Caller-defined handle identifying the owner
    pub handle: H,
    /// World-space box
    pub bounds: Aabb,
    /// What this collider is
    pub layer: CollisionLayers,
    /// What this collider wants to touch
    pub mask: CollisionLayers,
}

impl<H> Collider<H> {
    /// Create a collider
    pub const fn new(handle: H, bounds: Aabb, layer: CollisionLayers, mask: CollisionLayers) -> Self {
        Self { handle, bounds, layer, mask }
    }
}

/// Collision pair representing two colliders that overlap
///
/// `a` is always the collider inserted first, which makes pairs symmetric:
/// swapping the insertion of two colliders never produces a second pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair<H> {
    /// Handle of the earlier-inserted collider
    pub a: H,
    /// Layer of `a`
    pub layer_a: CollisionLayers,
    /// Handle of the later-inserted collider
    pub b: H,
    /// Layer of `b`
    pub layer_b: CollisionLayers,
}

impl<H> CollisionPair<H> {
    /// Union of both layers, used to route the contact
    pub fn layers(&self) -> CollisionLayers {
        self.layer_a | self.layer_b
    }
}

/// Sweep-and-prune broad phase with reusable buffers
#[derive(Debug, Clone)]
pub struct SweepBroadPhase<H> {
    colliders: Vec<Collider<H>>,
    order: Vec<usize>,
    hits: Vec<(usize, usize)>,
    pairs: Vec<CollisionPair<H>>,
}

impl<H> Default for SweepBroadPhase<H> {
    fn default() -> Self {
        Self {
            colliders: Vec::new(),
            order: Vec::new(),
            hits: Vec::new(),
            pairs: Vec::new(),
        }
    }
}

impl<H: Copy> SweepBroadPhase<H> {
    /// Create an empty broad phase
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every collider; buffers keep their capacity
    pub fn clear(&mut self) {
        self.colliders.clear();
        self.pairs.clear();
    }

    /// Register a collider for the next [`detect`](Self::detect)
    pub fn insert(&mut self, collider: Collider<H>) {
        self.colliders.push(collider);
    }

    /// Number of registered colliders
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether no collider is registered
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Find every overlapping, layer-compatible pair
    pub fn detect(&mut self) -> &[CollisionPair<H>] {
        self.order.clear();
        self.order.extend(0..self.colliders.len());
        let colliders = &self.colliders;
        // Stable: equal left edges keep insertion order
        self.order
            .sort_by(|&i, &j| colliders[i].bounds.left().total_cmp(&colliders[j].bounds.left()));

        self.hits.clear();
        for (pos, &i) in self.order.iter().enumerate() {
            let a = &colliders[i];
            let right = a.bounds.right();
            for &j in &self.order[pos + 1..] {
                let b = &colliders[j];
                if b.bounds.left() > right {
                    break;
                }
                if !a.bounds.overlaps_y(&b.bounds) {
                    continue;
                }
                if !CollisionLayers::should_collide(a.layer, a.mask, b.layer, b.mask) {
                    continue;
                }
                self.hits.push((i.min(j), i.max(j)));
            }
        }
        self.hits.sort_unstable();

        self.pairs.clear();
        self.pairs.extend(self.hits.iter().map(|&(i, j)| CollisionPair {
            a: colliders[i].handle,
            layer_a: colliders[i].layer,
            b: colliders[j].handle,
            layer_b: colliders[j].layer,
        }));
        log::trace!("Broad phase: {} colliders, {} pairs", colliders.len(), self.pairs.len());
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;

    fn boxed(x: f32, y: f32, hw: f32, hh: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(hw, hh))
    }

    fn player(handle: u32, x: f32) -> Collider<u32> {
        Collider::new(
            handle,
            boxed(x, 80.0, 9.0, 20.0),
            CollisionLayers::PLAYER,
            CollisionLayers::GROUND | CollisionLayers::ENEMY,
        )
    }

    fn enemy(handle: u32, x: f32) -> Collider<u32> {
        Collider::new(
            handle,
            boxed(x, 76.0, 14.0, 10.0),
            CollisionLayers::ENEMY,
            CollisionLayers::PLAYER | CollisionLayers::PROJECTILE,
        )
    }

    #[test]
    fn test_detects_overlapping_pair_once() {
        let mut broad = SweepBroadPhase::new();
        broad.insert(player(1, 100.0));
        broad.insert(enemy(2, 110.0));

        let pairs = broad.detect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].a, 1);
        assert_eq!(pairs[0].b, 2);
        assert_eq!(pairs[0].layers(), CollisionLayers::PLAYER | CollisionLayers::ENEMY);
    }

    #[test]
    fn test_pair_is_symmetric_in_position() {
        // Enemy to the left of the player: still a single pair, still keyed by insertion
        let mut broad = SweepBroadPhase::new();
        broad.insert(player(1, 100.0));
        broad.insert(enemy(2, 80.0));

        let pairs = broad.detect();
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].a, pairs[0].b), (1, 2));
    }

    #[test]
    fn test_masks_filter_pairs() {
        let mut broad = SweepBroadPhase::new();
        broad.insert(enemy(1, 100.0));
        broad.insert(enemy(2, 105.0));
        assert!(broad.detect().is_empty());
    }

    #[test]
    fn test_vertical_separation() {
        let mut broad = SweepBroadPhase::new();
        broad.insert(player(1, 100.0));
        broad.insert(Collider::new(
            2,
            boxed(100.0, 300.0, 14.0, 10.0),
            CollisionLayers::ENEMY,
            CollisionLayers::PLAYER,
        ));
        assert!(broad.detect().is_empty());
    }

    #[test]
    fn test_pairs_sorted_by_insertion() {
        let mut broad = SweepBroadPhase::new();
        broad.insert(player(0, 300.0));
        broad.insert(Collider::new(
            1,
            Aabb::from_min_max(Vec2::new(200.0, 0.0), Vec2::new(400.0, 60.0)),
            CollisionLayers::GROUND,
            CollisionLayers::PLAYER,
        ));
        broad.insert(enemy(2, 290.0));
        broad.insert(enemy(3, 310.0));

        let handles: Vec<_> = broad.detect().iter().map(|p| (p.a, p.b)).collect();
        assert_eq!(handles, vec![(0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_clear_resets() {
        let mut broad = SweepBroadPhase::new();
        broad.insert(player(1, 100.0));
        broad.insert(enemy(2, 100.0));
        assert_eq!(broad.detect().len(), 1);
        broad.clear();
        assert!(broad.is_empty());
        assert!(broad.detect().is_empty());
    }
}
