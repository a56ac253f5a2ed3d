use crate::error::{CurveError, MathError, Result};
use crate::math::{quadrature, Matrix3, Point3, Vector3, TOLERANCE};

/// Parameter offset used to sample the second tangent for the 3D normal
/// approximation.
const NORMAL_STEP: f64 = 0.01;

/// Half-width of the symmetric finite difference estimating the rate of
/// change of curvature.
const CURVATURE_STEP: f64 = 0.001;

/// Signed curvature data at a point on a curve.
///
/// Returned by [`Bezier::curvature`]; all fields are zero when the
/// curvature is undefined (straight segment or degenerate tangent).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurvatureVector {
    /// Signed curvature. Positive where the curve turns counter-clockwise
    /// (2D); always non-negative in 3D.
    pub k: f64,
    /// Radius of curvature, `1/k`, with the same sign as `k`.
    pub r: f64,
    /// Rate of change of the curvature, estimated by a symmetric finite
    /// difference of half-width 0.001 in `t`.
    pub dk: f64,
    /// Absolute rate of change of the curvature.
    pub adk: f64,
}

/// Closed evaluation form, chosen once from the control point count.
#[derive(Debug, Clone, Copy, PartialEq)]
enum EvalForm {
    Constant,
    Linear,
    Quadratic,
    Cubic,
    General,
}

impl EvalForm {
    fn for_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Constant,
            2 => Self::Linear,
            3 => Self::Quadratic,
            4 => Self::Cubic,
            _ => Self::General,
        }
    }
}

/// A control polygon paired with its evaluation form. Used both for the
/// curve itself and for every level of its hodograph hierarchy.
#[derive(Debug, Clone)]
struct ControlPolygon {
    points: Vec<Point3>,
    form: EvalForm,
}

impl ControlPolygon {
    fn new(points: Vec<Point3>) -> Self {
        let form = EvalForm::for_count(points.len());
        Self { points, form }
    }

    /// Evaluates the polygon's Bezier polynomial at `t`.
    ///
    /// `t = 0` and `t = 1` return the first and last control points
    /// exactly, bypassing the arithmetic path. Other parameters (any real
    /// `t`, not just `[0, 1]`) go through the closed Bernstein form for
    /// degrees up to three and de Casteljau's algorithm above that.
    fn evaluate(&self, t: f64) -> Point3 {
        let p = &self.points;
        if t == 0.0 {
            return p[0];
        }
        if t == 1.0 {
            return p[p.len() - 1];
        }

        let mt = 1.0 - t;
        match self.form {
            EvalForm::Constant => p[0],
            EvalForm::Linear => p[0] + (p[1] - p[0]) * t,
            EvalForm::Quadratic => {
                let coords = p[0].coords * (mt * mt)
                    + p[1].coords * (2.0 * mt * t)
                    + p[2].coords * (t * t);
                Point3::from(coords)
            }
            EvalForm::Cubic => {
                let mt2 = mt * mt;
                let t2 = t * t;
                let coords = p[0].coords * (mt2 * mt)
                    + p[1].coords * (3.0 * mt2 * t)
                    + p[2].coords * (3.0 * mt * t2)
                    + p[3].coords * (t2 * t);
                Point3::from(coords)
            }
            EvalForm::General => {
                let mut work = p.clone();
                while work.len() > 1 {
                    for i in 0..work.len() - 1 {
                        let delta = (work[i + 1] - work[i]) * t;
                        work[i] += delta;
                    }
                    work.pop();
                }
                work[0]
            }
        }
    }
}

/// A Bezier curve of degree 2 through 11, planar or spatial.
///
/// The control point sequence is immutable: the first and last points are
/// the interpolated knots, interior points are handles. The hodograph
/// hierarchy (the control polygons of the successive derivatives) is
/// computed once at construction, so a constructed curve supports
/// concurrent read-only queries.
///
/// Planar curves carry `z = 0`; the `three_dimensional` flag only changes
/// which normal/curvature formulas apply, while position, derivative, and
/// length computations are uniform in all three coordinates.
#[derive(Debug, Clone)]
pub struct Bezier {
    polygon: ControlPolygon,
    hodographs: Vec<ControlPolygon>,
    three_dimensional: bool,
}

impl Bezier {
    /// Creates a curve from 3 to 12 control points.
    ///
    /// # Errors
    ///
    /// - `CurveError::InvalidPointCount` if the count is outside `[3, 12]`
    /// - `CurveError::Invalid3DPointCount` if `three_dimensional` is set
    ///   and the count is not 8, 9, or 12
    pub fn new(points: Vec<Point3>, three_dimensional: bool) -> Result<Self> {
        let count = points.len();
        if !(3..=12).contains(&count) {
            return Err(CurveError::InvalidPointCount(count).into());
        }
        if three_dimensional && !matches!(count, 8 | 9 | 12) {
            return Err(CurveError::Invalid3DPointCount(count).into());
        }

        // Hodograph hierarchy: level k holds order * (p[i+1] - p[i]) over
        // level k-1's points, down to a single point.
        let mut hodographs = Vec::new();
        let mut current = points.clone();
        while current.len() > 1 {
            let order = (current.len() - 1) as f64;
            let level: Vec<Point3> = current
                .windows(2)
                .map(|pair| Point3::from((pair[1] - pair[0]) * order))
                .collect();
            hodographs.push(ControlPolygon::new(level.clone()));
            current = level;
        }

        Ok(Self {
            polygon: ControlPolygon::new(points),
            hodographs,
            three_dimensional,
        })
    }

    /// Returns the control points.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.polygon.points
    }

    /// Returns the polynomial degree (control point count minus one).
    #[must_use]
    pub fn order(&self) -> usize {
        self.polygon.points.len() - 1
    }

    /// Returns whether the curve is three-dimensional.
    #[must_use]
    pub fn is_three_dimensional(&self) -> bool {
        self.three_dimensional
    }

    /// Evaluates the curve position at parameter `t`.
    ///
    /// `t = 0` and `t = 1` return the first and last control points
    /// exactly.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point3 {
        self.polygon.evaluate(t)
    }

    /// Evaluates the first derivative (tangent vector, not unit length)
    /// at parameter `t`.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector3 {
        self.hodographs[0].evaluate(t).coords
    }

    /// Returns the unit normal at parameter `t`.
    ///
    /// For planar curves this is the tangent rotated -90 degrees,
    /// `(-y', x') / |d|`. For spatial curves no closed form exists
    /// without a reference frame; the normal is approximated by a
    /// finite-difference rotation-minimizing construction: the unit
    /// tangents at `t` and `t + 0.01` give a binormal-like axis via their
    /// cross product, and the rotation that axis induces is applied to
    /// the tangent. The approximation degrades as the curvature
    /// approaches zero; where the cross product degenerates entirely, a
    /// deterministic perpendicular of the tangent is returned instead.
    ///
    /// # Errors
    ///
    /// Returns `MathError::ZeroVector` if the tangent is degenerate at
    /// the sampled parameters.
    pub fn normal(&self, t: f64) -> Result<Vector3> {
        if self.three_dimensional {
            self.normal_3d(t)
        } else {
            let d = self.derivative(t);
            let len = d.norm();
            if len < TOLERANCE {
                return Err(MathError::ZeroVector.into());
            }
            Ok(Vector3::new(-d.y, d.x, 0.0) / len)
        }
    }

    fn normal_3d(&self, t: f64) -> Result<Vector3> {
        let tangent = self.derivative(t);
        let ahead = self.derivative(t + NORMAL_STEP);
        let len_t = tangent.norm();
        let len_a = ahead.norm();
        if len_t < TOLERANCE || len_a < TOLERANCE {
            return Err(MathError::ZeroVector.into());
        }
        let tangent = tangent / len_t;
        let ahead = ahead / len_a;

        let axis = ahead.cross(&tangent);
        let axis_len = axis.norm();
        if axis_len < TOLERANCE {
            // Straight (or locally straight) curve: the two tangents are
            // parallel and no binormal exists. Any perpendicular is a
            // valid normal; pick a deterministic one.
            return Ok(stable_perpendicular(&tangent));
        }
        let axis = axis / axis_len;

        let rotation = Matrix3::new(
            axis.x * axis.x,
            axis.x * axis.y - axis.z,
            axis.x * axis.z + axis.y,
            axis.x * axis.y + axis.z,
            axis.y * axis.y,
            axis.y * axis.z - axis.x,
            axis.x * axis.z - axis.y,
            axis.y * axis.z + axis.x,
            axis.z * axis.z,
        );
        Ok(rotation * tangent)
    }

    /// Returns the signed curvature data at parameter `t`.
    ///
    /// Planar: `k = (x'y'' - y'x'') / (x'^2 + y'^2)^1.5`. Spatial:
    /// `k = |d' x d''| / (x'^2 + y'^2 + z'^2)^1.5`. A zero numerator or
    /// denominator (straight segment, degenerate tangent) yields the
    /// all-zero [`CurvatureVector`] instead of dividing by zero.
    #[must_use]
    pub fn curvature(&self, t: f64) -> CurvatureVector {
        self.curvature_at(t, false)
    }

    fn curvature_at(&self, t: f64, k_only: bool) -> CurvatureVector {
        let d = self.hodographs[0].evaluate(t).coords;
        let dd = self.hodographs[1].evaluate(t).coords;

        let planar_sq = d.x * d.x + d.y * d.y;
        let (num, denom) = if self.three_dimensional {
            (d.cross(&dd).norm(), (planar_sq + d.z * d.z).powf(1.5))
        } else {
            (d.x * dd.y - d.y * dd.x, planar_sq.powf(1.5))
        };

        if num == 0.0 || denom == 0.0 {
            return CurvatureVector::default();
        }
        let k = num / denom;
        let r = denom / num;

        // Symmetric finite difference for the curvature's rate of change.
        // The recursion is exactly one level deep: the neighbor samples
        // skip their own dk estimate.
        let (dk, adk) = if k_only {
            (0.0, 0.0)
        } else {
            let prev = self.curvature_at(t - CURVATURE_STEP, true).k;
            let next = self.curvature_at(t + CURVATURE_STEP, true).k;
            (
                (next - prev) / 2.0,
                ((next - k).abs() + (k - prev).abs()) / 2.0,
            )
        };

        CurvatureVector { k, r, dk, adk }
    }

    /// Returns the total arc length over `t` in `[0, 1]`.
    ///
    /// Computed with the fixed 24-point Gauss-Legendre rule over
    /// `|derivative(t)|`; non-adaptive, see [`crate::math::quadrature`].
    #[must_use]
    pub fn length(&self) -> f64 {
        quadrature::integrate_unit(|t| self.derivative(t).norm())
    }
}

/// Returns a unit vector perpendicular to the unit vector `v`, built by
/// crossing `v` with the coordinate axis it is least aligned with.
fn stable_perpendicular(v: &Vector3) -> Vector3 {
    let axis = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vector3::x()
    } else if v.y.abs() <= v.z.abs() {
        Vector3::y()
    } else {
        Vector3::z()
    };
    v.cross(&axis).normalize()
}
