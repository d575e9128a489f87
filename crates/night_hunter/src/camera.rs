//! # Side-scrolling camera
//!
//! Follows the hero horizontally and never shows anything past either end of
//! the world. Background layers scroll slower than the foreground by a
//! per-layer factor.
//!
//! ## Coordinate System
//! World units, x to the right and y up. The camera position is the centre
//! of the viewport, so the visible span is
//! `[position.x - width / 2, position.x + width / 2]`.

use scroll_engine::foundation::math::{clamp_lenient, Vec2};

use crate::config::CameraConfig;

/// Camera centred on the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Centre of the viewport in world space
    pub position: Vec2,

    /// Viewport width in world units
    pub viewport_width: f32,

    /// Viewport height in world units
    pub viewport_height: f32,
}

impl Camera {
    /// Create a camera at the left end of the world
    ///
    /// # Arguments
    /// * `config` - Viewport size
    ///
    /// # Returns
    /// A camera whose left edge sits on x = 0
    pub fn new(config: &CameraConfig) -> Self {
        let half = Vec2::new(config.viewport_width, config.viewport_height) / 2.0;
        Self {
            position: half,
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
        }
    }

    /// Half the viewport width
    pub fn half_width(&self) -> f32 {
        self.viewport_width / 2.0
    }

    /// Follow the hero
    ///
    /// Centres on `hero_x`, clamped so the viewport stays inside
    /// `[0, total_width]`. The vertical position is fixed at half the
    /// viewport height.
    ///
    /// # Arguments
    /// * `hero_x` - Horizontal position of the hero
    /// * `total_width` - Current world width
    pub fn update(&mut self, hero_x: f32, total_width: f32) {
        let half_width = self.half_width();
        self.position.x = clamp_lenient(hero_x, half_width, total_width - half_width);
        self.position.y = self.viewport_height / 2.0;
        log::trace!("Camera at x={:.1}", self.position.x);
    }

    /// Horizontal offset of each background layer
    ///
    /// A layer with factor `f` is shifted by `-(x - half_width) * f`, so it
    /// sits at 0 while the camera is at the left end and drifts left at a
    /// fraction of the camera's speed.
    pub fn parallax_offsets(&self, factors: &[f32]) -> Vec<f32> {
        let scrolled = self.position.x - self.half_width();
        factors.iter().map(|factor| -scrolled * factor).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        Camera::new(&CameraConfig::default())
    }

    #[test]
    fn test_starts_at_left_end() {
        let camera = camera();
        assert_eq!(camera.position, Vec2::new(400.0, 225.0));
    }

    #[test]
    fn test_follows_hero_in_the_middle() {
        let mut camera = camera();
        camera.update(3000.0, 8000.0);
        assert_relative_eq!(camera.position.x, 3000.0);
        assert_relative_eq!(camera.position.y, 225.0);
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let mut camera = camera();
        camera.update(150.0, 8000.0);
        assert_relative_eq!(camera.position.x, 400.0);
        camera.update(7990.0, 8000.0);
        assert_relative_eq!(camera.position.x, 7600.0);
    }

    #[test]
    fn test_parallax_offsets() {
        let mut camera = camera();
        assert_eq!(camera.parallax_offsets(&[0.2, 0.4]), vec![0.0, 0.0]);

        camera.update(1400.0, 8000.0);
        let offsets = camera.parallax_offsets(&[0.2, 0.4]);
        assert_relative_eq!(offsets[0], -200.0);
        assert_relative_eq!(offsets[1], -400.0);
    }
}
