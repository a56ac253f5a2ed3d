use crate::error::{FitError, Result};
use crate::math::{tridiagonal, vector_2d, Point3, Vector2, Vector3};

/// Fits a smooth chain of cubic Bezier segments through the given knots
/// using Hobby's algorithm in Jackowski's formulation.
///
/// The fit runs in the XY plane (`Vec<Point3>` with Z ignored); every
/// handle inherits the `z` of the knot it is anchored to, so planar input
/// stays planar.
///
/// The `omega` tension parameter in `[0, 1]` controls how tightly the
/// fitted curve follows the control polygon: `0.0` gives round, arc-like
/// segments, `1.0` gives tauter segments hugging the polygon.
#[derive(Debug)]
pub struct FitHobbySpline {
    knots: Vec<Point3>,
    omega: f64,
}

impl FitHobbySpline {
    /// Creates a new Hobby fit operation.
    #[must_use]
    pub fn new(knots: Vec<Point3>, omega: f64) -> Self {
        Self { knots, omega }
    }

    /// Executes the fit.
    ///
    /// Returns `3n + 1` interleaved points for `n` segments,
    /// `[knot 0, handle, handle, knot 1, handle, handle, ..., knot n]`,
    /// where consecutive segments share their endpoint knots.
    ///
    /// # Errors
    ///
    /// - `FitError::ParameterOutOfRange` if `omega` is outside `[0, 1]`
    ///   (clamping is left to the caller's policy; the fit itself rejects)
    /// - `FitError::InsufficientPoints` if fewer than 2 knots are given
    /// - `FitError::DegenerateChord` if two adjacent knots coincide
    /// - `MathError::SingularSystem` if the tangent-angle system cannot
    ///   be eliminated without a zero pivot
    pub fn execute(&self) -> Result<Vec<Point3>> {
        if !(0.0..=1.0).contains(&self.omega) {
            return Err(FitError::ParameterOutOfRange {
                parameter: "omega",
                value: self.omega,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        if self.knots.len() < 2 {
            return Err(FitError::InsufficientPoints {
                required: 2,
                actual: self.knots.len(),
            }
            .into());
        }
        let n = self.knots.len() - 1;

        // chords[i] runs from knot i to knot i + 1; d[i] is its length.
        let mut chords = Vec::with_capacity(n);
        let mut d = Vec::with_capacity(n);
        for (i, pair) in self.knots.windows(2).enumerate() {
            let chord = Vector2::new(pair[1].x - pair[0].x, pair[1].y - pair[0].y);
            let len = chord.norm();
            if len == 0.0 {
                return Err(FitError::DegenerateChord { index: i }.into());
            }
            chords.push(chord);
            d.push(len);
        }

        // gamma[i] is the signed turning angle of the chord polyline at
        // knot i. gamma[0] is never read; gamma[n] is fixed at zero.
        let mut gamma = vec![0.0; n + 1];
        for i in 1..n {
            gamma[i] = vector_2d::signed_angle_between(chords[i - 1], chords[i]);
        }

        // Tridiagonal system for the tangent-offset angles alpha
        // (Jackowski, formula 38). The boundary rows encode the tension.
        let omega = self.omega;
        let mut sub = vec![0.0; n + 1];
        let mut main = vec![0.0; n + 1];
        let mut sup = vec![0.0; n + 1];
        let mut rhs = vec![0.0; n + 1];

        main[0] = 2.0 + omega;
        sup[0] = 2.0 * omega + 1.0;
        rhs[0] = -(2.0 * omega + 1.0) * gamma[1];
        for i in 1..n {
            sub[i] = 1.0 / d[i - 1];
            main[i] = (2.0 * d[i - 1] + 2.0 * d[i]) / (d[i - 1] * d[i]);
            sup[i] = 1.0 / d[i];
            rhs[i] = -(2.0 * gamma[i] * d[i] + gamma[i + 1] * d[i - 1]) / (d[i - 1] * d[i]);
        }
        sub[n] = 2.0 * omega + 1.0;
        main[n] = 2.0 + omega;

        let alpha = tridiagonal::solve(&sub, &main, &sup, &rhs)?;

        // beta[i] mirrors alpha for the handle arriving at knot i + 1.
        let mut beta = vec![0.0; n];
        for i in 0..n - 1 {
            beta[i] = -gamma[i + 1] - alpha[i + 1];
        }
        beta[n - 1] = -alpha[n];

        let mut spline = Vec::with_capacity(3 * n + 1);
        for i in 0..n {
            // Handle magnitudes from the velocity function, scaled by a
            // third of the chord (Jackowski, formula 22).
            let ha = rho(alpha[i], beta[i]) * d[i] / 3.0;
            let hb = rho(beta[i], alpha[i]) * d[i] / 3.0;

            // Rotating the chord by alpha (resp. -beta) gives the tangent
            // directions leaving knot i and arriving at knot i + 1. The
            // chords are non-degenerate, so normalize cannot fail here.
            let leave = vector_2d::normalize(vector_2d::rotate(chords[i], alpha[i]))? * ha;
            let arrive = vector_2d::normalize(vector_2d::rotate(chords[i], -beta[i]))? * hb;

            spline.push(self.knots[i]);
            spline.push(self.knots[i] + Vector3::new(leave.x, leave.y, 0.0));
            spline.push(self.knots[i + 1] - Vector3::new(arrive.x, arrive.y, 0.0));
        }
        spline.push(self.knots[n]);
        Ok(spline)
    }
}

/// Velocity function for the handle lengths (Jackowski, formula 28).
///
/// Chosen so that segments near a knot closely approximate circular arcs;
/// Hobby and Knuth proposed several candidates, this is the simplest.
fn rho(alpha: f64, beta: f64) -> f64 {
    let c = 2.0 / 3.0;
    2.0 / (1.0 + c * beta.cos() + (1.0 - c) * alpha.cos())
}
