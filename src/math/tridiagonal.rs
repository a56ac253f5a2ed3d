use crate::error::{MathError, Result};

/// Solves a tridiagonal linear system with the Thomas algorithm in O(n).
///
/// `sub`, `main`, and `sup` are the sub-, main-, and super-diagonals and
/// `rhs` is the right-hand side; all four slices must have the same length
/// `n`. `sub[0]` and `sup[n - 1]` lie outside the matrix and are ignored.
///
/// The forward sweep eliminates the sub-diagonal, rescaling the
/// super-diagonal and right-hand side as it goes; back substitution then
/// yields the solution vector. The algorithm does not pivot, so it is
/// only suited to systems whose elimination never produces a zero pivot
/// (e.g. diagonally dominant ones, which both fitters construct).
///
/// # Errors
///
/// Returns `MathError::SingularSystem` if a pivot denominator is exactly
/// zero during elimination.
///
/// # Panics
///
/// Panics if the slice lengths differ.
pub fn solve(sub: &[f64], main: &[f64], sup: &[f64], rhs: &[f64]) -> Result<Vec<f64>> {
    let n = main.len();
    assert!(
        sub.len() == n && sup.len() == n && rhs.len() == n,
        "diagonal and right-hand-side lengths must match"
    );
    if n == 0 {
        return Ok(Vec::new());
    }

    // Forward sweep: sup_p and rhs_p are the rescaled super-diagonal and
    // right-hand side after eliminating the sub-diagonal.
    let mut sup_p = vec![0.0; n];
    let mut rhs_p = vec![0.0; n];

    if main[0] == 0.0 {
        return Err(MathError::SingularSystem { row: 0 }.into());
    }
    sup_p[0] = sup[0] / main[0];
    rhs_p[0] = rhs[0] / main[0];

    for i in 1..n {
        let denom = main[i] - sub[i] * sup_p[i - 1];
        if denom == 0.0 {
            return Err(MathError::SingularSystem { row: i }.into());
        }
        sup_p[i] = sup[i] / denom;
        rhs_p[i] = (rhs[i] - sub[i] * rhs_p[i - 1]) / denom;
    }

    // Back substitution.
    let mut x = vec![0.0; n];
    x[n - 1] = rhs_p[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = rhs_p[i] - sup_p[i] * x[i + 1];
    }
    Ok(x)
}
