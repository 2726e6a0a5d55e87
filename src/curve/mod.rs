//! The Bézier curve value type.
//!
//! A `Curve` owns its control points and never changes after construction.
//! Operations that "modify" a curve (`fit`, `blend`, `derivative`) return a
//! new value, so a curve can be shared across threads and evaluated or
//! projected against concurrently.
//!
//! Evaluation uses De Casteljau's algorithm, which only ever forms convex
//! combinations of control points for `t` in `[0, 1]` and is exact at the
//! endpoints. Parameters outside `[0, 1]` extrapolate the polynomial.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::domain::{FitOptions, Point, PointVector, points_to_matrix};
use crate::error::CurveError;
use crate::fit::{CurveFit, fit_curve, unit_space};
use crate::math::{Polynomial, binomial};

pub mod project;

/// A 2D polynomial Bézier curve of arbitrary degree.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    control_points: PointVector,
}

impl Curve {
    /// Build a curve from its control polygon. At least one point is required.
    pub fn new(control_points: PointVector) -> Result<Self, CurveError> {
        if control_points.is_empty() {
            return Err(CurveError::invalid(
                "control_points",
                "a curve needs at least one control point",
            ));
        }
        Ok(Self { control_points })
    }

    /// Least-squares fit of a degree-`degree` curve to the rows of an `N × 2`
    /// data matrix, using uniform parameters `t_i = i / (N - 1)`.
    ///
    /// Fails with `InvalidArgument` unless `N >= degree + 2`.
    pub fn fit(data: &DMatrix<f64>, degree: usize) -> Result<Self, CurveError> {
        fit_curve(data, degree, &FitOptions::default()).map(|fit| fit.curve)
    }

    /// Like [`Curve::fit`], with explicit options and the fit diagnostics.
    pub fn fit_with(
        data: &DMatrix<f64>,
        degree: usize,
        opts: &FitOptions,
    ) -> Result<CurveFit, CurveError> {
        fit_curve(data, degree, opts)
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Control points as a `(degree + 1) × 2` matrix.
    pub fn control_points_matrix(&self) -> DMatrix<f64> {
        points_to_matrix(&self.control_points)
    }

    /// Evaluate the curve at `t`.
    pub fn value_at(&self, t: f64) -> Point {
        let mut beta = self.control_points.clone();
        let n = beta.len();
        for j in 1..n {
            for k in 0..n - j {
                beta[k] = beta[k] * (1.0 - t) + beta[k + 1] * t;
            }
        }
        beta[0]
    }

    /// Evaluate the curve at every parameter in `ts`.
    ///
    /// Row `i` of the `len × 2` result is exactly `value_at(ts[i])`.
    pub fn value_at_many(&self, ts: &[f64]) -> DMatrix<f64> {
        let points: Vec<Point> = ts.par_iter().map(|&t| self.value_at(t)).collect();
        points_to_matrix(&points)
    }

    /// Evaluate at `n` evenly spaced parameters over `[0, 1]`, endpoints included.
    pub fn sample(&self, n: usize) -> DMatrix<f64> {
        self.value_at_many(&unit_space(n))
    }

    /// Control-point-wise interpolation `(1 - alpha) * self + alpha * other`.
    pub fn blend(&self, other: &Curve, alpha: f64) -> Result<Curve, CurveError> {
        if self.degree() != other.degree() {
            return Err(CurveError::DegreeMismatch {
                left: self.degree(),
                right: other.degree(),
            });
        }
        if !alpha.is_finite() {
            return Err(CurveError::invalid("alpha", format!("must be finite, got {alpha}")));
        }

        let control_points = self
            .control_points
            .iter()
            .zip(&other.control_points)
            .map(|(p, q)| p * (1.0 - alpha) + q * alpha)
            .collect();
        Ok(Curve { control_points })
    }

    /// The hodograph `P'(t)`, a curve of degree `n - 1`.
    ///
    /// A constant curve has the zero point as its derivative.
    pub fn derivative(&self) -> Curve {
        let n = self.degree();
        if n == 0 {
            return Curve {
                control_points: vec![Point::zeros()],
            };
        }
        let control_points = self
            .control_points
            .windows(2)
            .map(|w| (w[1] - w[0]) * n as f64)
            .collect();
        Curve { control_points }
    }

    /// Per-coordinate power-basis polynomials `x(t)` and `y(t)`.
    ///
    /// `a_j = C(n, j) * Σ_{i=0..=j} (-1)^(j-i) C(j, i) P_i`
    pub(crate) fn power_basis(&self) -> [Polynomial; 2] {
        let n = self.degree();
        let mut coeffs = vec![Point::zeros(); n + 1];
        for (j, a) in coeffs.iter_mut().enumerate() {
            let mut sum = Point::zeros();
            for (i, p) in self.control_points[..=j].iter().enumerate() {
                let sign = if (j - i) % 2 == 0 { 1.0 } else { -1.0 };
                sum += p * (sign * binomial(j, i));
            }
            *a = sum * binomial(n, j);
        }
        [
            Polynomial::new(coeffs.iter().map(|a| a.x).collect()),
            Polynomial::new(coeffs.iter().map(|a| a.y).collect()),
        ]
    }
}

impl TryFrom<PointVector> for Curve {
    type Error = CurveError;

    fn try_from(control_points: PointVector) -> Result<Self, Self::Error> {
        Curve::new(control_points)
    }
}
