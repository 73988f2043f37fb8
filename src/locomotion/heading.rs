//! Scalar heading helpers.

use std::f32::consts::{PI, TAU};

/// Wrap an angle into `(−π, π]`.
#[inline]
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    PI - (PI - angle).rem_euclid(TAU)
}

/// Signed shortest rotation from `current` to `target`, in `(−π, π]`.
///
/// Turning from `3.0` to `-3.0` goes the short way through ±π
/// (`≈ +0.283`), never the long way (`-6.0`).
#[inline]
#[must_use]
pub fn shortest_turn(current: f32, target: f32) -> f32 {
    wrap_angle(target - current)
}

/// Heading that faces along a planar direction (`atan2(x, z)`).
#[inline]
#[must_use]
pub fn heading_of(x: f32, z: f32) -> f32 {
    x.atan2(z)
}

/// Linear interpolation between two scalars.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn short_way_through_pi() {
        let diff = shortest_turn(3.0, -3.0);
        assert!((diff - (TAU - 6.0)).abs() < 1e-5);
        assert!((diff - 0.283).abs() < 1e-3);

        let back = shortest_turn(-3.0, 3.0);
        assert!((back + 0.283).abs() < 1e-3);
    }

    #[test]
    fn wrap_range_is_half_open() {
        assert!((wrap_angle(PI) - PI).abs() < 1e-6);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
        assert!((wrap_angle(3.0 * PI + 0.5) - (-PI + 0.5)).abs() < 1e-5);
        assert_eq!(wrap_angle(0.0), 0.0);
    }

    #[test]
    fn heading_of_axes() {
        assert_eq!(heading_of(0.0, 1.0), 0.0);
        assert!((heading_of(1.0, 0.0) - FRAC_PI_2).abs() < 1e-6);
        assert!((heading_of(0.0, -1.0) - PI).abs() < 1e-6);
    }
}
