use crate::error::{FitError, Result};
use crate::math::{tridiagonal, Point3};

/// Fits an interpolating chain of cubic Bezier segments through the given
/// knots with a natural-cubic-spline pass over each coordinate axis.
///
/// The three axes are solved independently, so spatial input is handled
/// at no extra cost (the z pass over planar input is identically zero).
///
/// The boundary rows use the 2/7/8 coefficients of the published
/// Bezier-compatible interpolation recipe, not the textbook
/// zero-second-derivative "natural" boundary conditions; the two produce
/// different end segments and the former is what this fit implements.
#[derive(Debug)]
pub struct FitNaturalCubicSpline {
    knots: Vec<Point3>,
}

impl FitNaturalCubicSpline {
    /// Creates a new natural cubic spline fit operation.
    #[must_use]
    pub fn new(knots: Vec<Point3>) -> Self {
        Self { knots }
    }

    /// Executes the fit.
    ///
    /// Returns `3m + 1` interleaved points for `m` segments, in the same
    /// `[knot, handle, handle, knot, ...]` layout as the Hobby fit.
    ///
    /// # Errors
    ///
    /// - `FitError::InsufficientPoints` if fewer than 3 knots are given
    /// - `MathError::SingularSystem` if an axis system cannot be
    ///   eliminated without a zero pivot
    pub fn execute(&self) -> Result<Vec<Point3>> {
        if self.knots.len() < 3 {
            return Err(FitError::InsufficientPoints {
                required: 3,
                actual: self.knots.len(),
            }
            .into());
        }
        let m = self.knots.len() - 1;

        let axis = |pick: fn(&Point3) -> f64| -> Vec<f64> {
            self.knots.iter().map(pick).collect()
        };
        let (x1, x2) = fit_axis(&axis(|p| p.x))?;
        let (y1, y2) = fit_axis(&axis(|p| p.y))?;
        let (z1, z2) = fit_axis(&axis(|p| p.z))?;

        let mut spline = Vec::with_capacity(3 * m + 1);
        for i in 0..m {
            spline.push(self.knots[i]);
            spline.push(Point3::new(x1[i], y1[i], z1[i]));
            spline.push(Point3::new(x2[i], y2[i], z2[i]));
        }
        spline.push(self.knots[m]);
        Ok(spline)
    }
}

/// Solves one axis for the two per-segment handle coordinate arrays.
///
/// Sets up the `m x m` system with rows `[2 1]`, `[1 4 1]`, ..., `[2 7]`
/// over the scalar knot sequence, solves it for the first-handle
/// coordinates, then derives the second-handle coordinates from the
/// interpolation constraint.
fn fit_axis(x: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    let m = x.len() - 1;

    let mut sub = vec![1.0; m];
    let mut main = vec![4.0; m];
    let mut sup = vec![1.0; m];
    let mut rhs = vec![0.0; m];

    sub[0] = 0.0;
    main[0] = 2.0;
    rhs[0] = x[0] + 2.0 * x[1];
    for i in 1..m - 1 {
        rhs[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    sub[m - 1] = 2.0;
    main[m - 1] = 7.0;
    sup[m - 1] = 0.0;
    rhs[m - 1] = 8.0 * x[m - 1] + x[m];

    let p1 = tridiagonal::solve(&sub, &main, &sup, &rhs)?;

    let mut p2 = vec![0.0; m];
    p2[m - 1] = (x[m] + p1[m - 1]) / 2.0;
    for i in 0..m - 1 {
        p2[i] = 2.0 * x[i + 1] - p1[i + 1];
    }
    Ok((p1, p2))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SplineFitError;
    use crate::fit::segments;

    fn knots(points: &[(f64, f64)]) -> Vec<Point3> {
        points.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect()
    }

    const TOL: f64 = 1e-12;

    #[test]
    fn output_length_is_3m_plus_1() {
        for count in 3..=7 {
            let input: Vec<Point3> = (0..count)
                .map(|i| Point3::new(f64::from(i), f64::from(i * i), 0.0))
                .collect();
            let spline = FitNaturalCubicSpline::new(input).execute().unwrap();
            assert_eq!(spline.len(), 3 * (count as usize - 1) + 1);
        }
    }

    #[test]
    fn knots_are_interpolated() {
        let input = knots(&[(0.0, 0.0), (2.0, 5.0), (6.0, -1.0), (9.0, 2.0)]);
        let spline = FitNaturalCubicSpline::new(input.clone()).execute().unwrap();
        for (i, knot) in input.iter().enumerate() {
            assert_eq!(spline[3 * i], *knot);
        }
    }

    #[test]
    fn rejects_too_few_knots() {
        for count in 0..3 {
            let input: Vec<Point3> =
                (0..count).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
            let err = FitNaturalCubicSpline::new(input).execute().unwrap_err();
            assert!(matches!(
                err,
                SplineFitError::Fit(FitError::InsufficientPoints {
                    required: 3,
                    ..
                })
            ));
        }
    }

    #[test]
    fn evenly_spaced_line_gives_exact_thirds() {
        // For knots 0, 1, 2 the axis system is [2 1; 2 7] with right-hand
        // side [2, 10], so p1 = (1/3, 4/3) and p2 = (2/3, 5/3): uniform
        // thirds along the line.
        let input = knots(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let spline = FitNaturalCubicSpline::new(input).execute().unwrap();
        let expected = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0, 4.0 / 3.0, 5.0 / 3.0, 2.0];
        assert_eq!(spline.len(), expected.len());
        for (p, x) in spline.iter().zip(expected) {
            assert!((p.x - x).abs() < TOL);
            assert!(p.y.abs() < TOL);
        }
    }

    #[test]
    fn collinear_knots_have_zero_curvature() {
        let input = knots(&[(0.0, 0.0), (3.0, 3.0), (5.0, 5.0), (10.0, 10.0)]);
        let spline = FitNaturalCubicSpline::new(input).execute().unwrap();
        for curve in segments(&spline).unwrap() {
            for i in 0..=10 {
                let t = f64::from(i) / 10.0;
                assert!(curve.curvature(t).k.abs() < 1e-9);
            }
        }
    }

    #[test]
    fn adjacent_segments_meet_with_matching_tangents() {
        // C1 continuity at interior knots: the handle arriving at a knot
        // and the handle leaving it are reflections through the knot.
        let input = knots(&[(0.0, 0.0), (4.0, 3.0), (7.0, -2.0), (11.0, 1.0), (13.0, 4.0)]);
        let spline = FitNaturalCubicSpline::new(input).execute().unwrap();
        for knot_idx in (3..spline.len() - 1).step_by(3) {
            let arrive = spline[knot_idx] - spline[knot_idx - 1];
            let leave = spline[knot_idx + 1] - spline[knot_idx];
            assert!((arrive.x - leave.x).abs() < 1e-9);
            assert!((arrive.y - leave.y).abs() < 1e-9);
        }
    }

    #[test]
    fn spatial_knots_fit_all_three_axes() {
        let input = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 4.0),
            Point3::new(3.0, 1.0, 8.0),
            Point3::new(5.0, 3.0, 12.0),
        ];
        let spline = FitNaturalCubicSpline::new(input.clone()).execute().unwrap();
        assert_eq!(spline.len(), 10);
        // The z sequence is affine in the knot index, so the z handles
        // land on exact thirds just like the evenly spaced line.
        let expected_z = [0.0, 4.0 / 3.0, 8.0 / 3.0, 4.0, 16.0 / 3.0, 20.0 / 3.0, 8.0, 28.0 / 3.0, 32.0 / 3.0, 12.0];
        for (p, z) in spline.iter().zip(expected_z) {
            assert!((p.z - z).abs() < 1e-9);
        }
    }
}
