//! Collision layer system for filtering and routing contacts
//!
//! Every collider carries a layer (what it is) and a mask (what it wants to
//! touch). The union of both layers of a contact is the key a game uses to
//! pick the outcome rule for that pair.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Collision layer bitmask
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CollisionLayers: u32 {
        /// Player-controlled character
        const PLAYER = 1 << 0;
        /// Solid ground the player stands on
        const GROUND = 1 << 1;
        /// Hostile characters
        const ENEMY = 1 << 2;
        /// Player attacks: thrown weapons and melee hitboxes
        const PROJECTILE = 1 << 3;
        /// One-off platforms standing in for ground
        const PLATFORM = 1 << 4;
    }
}

impl CollisionLayers {
    /// Check if two colliders should collide based on their layers and masks
    ///
    /// A's layer must be in B's mask AND B's layer must be in A's mask.
    ///
    /// # Example
    /// ```
    /// use scroll_engine::physics::CollisionLayers;
    ///
    /// let should_collide = CollisionLayers::should_collide(
    ///     CollisionLayers::PLAYER, CollisionLayers::ENEMY | CollisionLayers::GROUND,
    ///     CollisionLayers::ENEMY, CollisionLayers::PLAYER | CollisionLayers::PROJECTILE,
    /// );
    /// assert!(should_collide);
    /// ```
    pub const fn should_collide(layer_a: Self, mask_a: Self, layer_b: Self, mask_b: Self) -> bool {
        layer_a.intersects(mask_b) && layer_b.intersects(mask_a)
    }
}
