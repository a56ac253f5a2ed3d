mod hobby;
mod natural;

pub use hobby::FitHobbySpline;
pub use natural::FitNaturalCubicSpline;

use crate::error::{FitError, Result};
use crate::geometry::Bezier;
use crate::math::Point3;

/// Splits an interleaved fitted point list into its cubic Bezier segments.
///
/// Both fitters return `3n + 1` points for `n` segments; consecutive
/// segments share their endpoint knot, so segment `i` is the 4-point
/// window starting at index `3i`. The returned curves are planar.
///
/// # Errors
///
/// Returns `FitError::InvalidSplineLength` if the list is not of length
/// `3n + 1` for some `n >= 1`.
pub fn segments(spline: &[Point3]) -> Result<Vec<Bezier>> {
    if spline.len() < 4 || spline.len() % 3 != 1 {
        return Err(FitError::InvalidSplineLength(spline.len()).into());
    }
    spline
        .windows(4)
        .step_by(3)
        .map(|window| Bezier::new(window.to_vec(), false))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SplineFitError;

    #[test]
    fn splits_fitted_spline_into_cubics() {
        let input: Vec<Point3> = (0..4)
            .map(|i| Point3::new(f64::from(i) * 3.0, f64::from(i % 2), 0.0))
            .collect();
        let spline = FitHobbySpline::new(input, 0.0).execute().unwrap();
        let curves = segments(&spline).unwrap();
        assert_eq!(curves.len(), 3);
        for (i, curve) in curves.iter().enumerate() {
            assert_eq!(curve.order(), 3);
            assert_eq!(curve.evaluate(0.0), spline[3 * i]);
            assert_eq!(curve.evaluate(1.0), spline[3 * i + 3]);
        }
    }

    #[test]
    fn rejects_non_interleaved_lengths() {
        for len in [0_usize, 1, 2, 3, 5, 6, 8] {
            let points = vec![Point3::origin(); len];
            let err = segments(&points).unwrap_err();
            assert!(matches!(
                err,
                SplineFitError::Fit(FitError::InvalidSplineLength(l)) if l == len
            ));
        }
    }
}
