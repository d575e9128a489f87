//! Math utilities and types
//!
//! Side-scrollers only need the plane.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Clamp `value` into `[min, max]`
///
/// Unlike [`f32::clamp`] this never panics: when the range is inverted
/// (a world narrower than the margin) the result collapses onto `min`.
#[must_use]
pub fn clamp_lenient(value: f32, min: f32, max: f32) -> f32 {
    if max < min {
        return min;
    }
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_lenient_inside_and_outside() {
        assert_eq!(clamp_lenient(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_lenient(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_lenient(42.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_lenient_inverted_range() {
        assert_eq!(clamp_lenient(5.0, 10.0, 0.0), 10.0);
    }
}
