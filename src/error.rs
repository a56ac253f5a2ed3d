use thiserror::Error;

/// Top-level error type for the splinefit kernel.
#[derive(Debug, Error)]
pub enum SplineFitError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// Errors from the low-level numeric primitives.
#[derive(Debug, Error)]
pub enum MathError {
    #[error("singular tridiagonal system: zero pivot in row {row}")]
    SingularSystem { row: usize },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors from spline fitting.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("at least {required} knots are required, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("zero-length chord: knots {index} and {next} coincide", next = .index + 1)]
    DegenerateChord { index: usize },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("an interleaved spline has 3n + 1 points for n >= 1 segments, got {0}")]
    InvalidSplineLength(usize),
}

/// Errors from Bezier curve construction.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("a Bezier curve requires 3 to 12 control points, got {0}")]
    InvalidPointCount(usize),

    #[error("a 3D Bezier curve requires 8, 9, or 12 control points, got {0}")]
    Invalid3DPointCount(usize),
}

/// Convenience type alias for results using [`SplineFitError`].
pub type Result<T> = std::result::Result<T, SplineFitError>;
