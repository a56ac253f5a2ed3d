use crate::error::{MathError, Result};
use crate::math::Vector2;

/// Rotates `v` counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate(v: Vector2, angle: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Returns the signed angle from `v` to `w` in `(-pi, pi]`.
///
/// Positive angles turn counter-clockwise (right-hand convention).
/// Stable for arbitrarily small inputs: `atan2` only sees the ratio of
/// the cross and dot products, both of which shrink proportionally.
#[must_use]
pub fn signed_angle_between(v: Vector2, w: Vector2) -> f64 {
    v.perp(&w).atan2(v.dot(&w))
}

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns `MathError::ZeroVector` if `v` has zero length.
pub fn normalize(v: Vector2) -> Result<Vector2> {
    let len = v.norm();
    if len == 0.0 {
        return Err(MathError::ZeroVector.into());
    }
    Ok(v / len)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SplineFitError;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const TOL: f64 = 1e-12;

    #[test]
    fn rotate_quarter_turn() {
        let r = rotate(Vector2::new(1.0, 0.0), FRAC_PI_2);
        assert!(r.x.abs() < TOL);
        assert!((r.y - 1.0).abs() < TOL);
    }

    #[test]
    fn rotate_preserves_length() {
        let v = Vector2::new(3.0, -4.0);
        assert!((rotate(v, 1.234).norm() - 5.0).abs() < TOL);
    }

    #[test]
    fn signed_angle_sign_convention() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert!((signed_angle_between(x, y) - FRAC_PI_2).abs() < TOL);
        assert!((signed_angle_between(y, x) + FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn signed_angle_opposite_vectors() {
        let v = Vector2::new(1.0, 0.0);
        let w = Vector2::new(-1.0, 0.0);
        assert!((signed_angle_between(v, w).abs() - PI).abs() < TOL);
    }

    #[test]
    fn signed_angle_stable_for_tiny_vectors() {
        let v = Vector2::new(1e-150, 0.0);
        let w = Vector2::new(1e-150, 1e-150);
        assert!((signed_angle_between(v, w) - FRAC_PI_4).abs() < TOL);
    }

    #[test]
    fn normalize_unit_result() {
        let n = normalize(Vector2::new(3.0, 4.0)).unwrap();
        assert!((n.norm() - 1.0).abs() < TOL);
        assert!((n.x - 0.6).abs() < TOL);
        assert!((n.y - 0.8).abs() < TOL);
    }

    #[test]
    fn normalize_zero_vector_fails() {
        let err = normalize(Vector2::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            SplineFitError::Math(MathError::ZeroVector)
        ));
    }
}
