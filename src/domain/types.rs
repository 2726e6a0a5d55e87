//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - used in-memory during evaluation and fitting
//! - passed around as plain configuration
//! - exported to JSON and reloaded later

use nalgebra::{DMatrix, Vector2};
use serde::{Deserialize, Serialize};

/// A 2D coordinate pair.
///
/// Componentwise addition and scalar multiplication come straight from
/// nalgebra, which is all interpolation and blending need.
pub type Point = Vector2<f64>;

/// Ordered control points `P0..Pn` of a degree-`n` curve.
pub type PointVector = Vec<Point>;

/// Pack points into an `len × 2` matrix (row = point, columns = x, y).
pub fn points_to_matrix(points: &[Point]) -> DMatrix<f64> {
    DMatrix::from_fn(points.len(), 2, |i, j| points[i][j])
}

/// Read the rows of an `N × 2` matrix back as points.
pub fn matrix_to_points(matrix: &DMatrix<f64>) -> PointVector {
    matrix
        .row_iter()
        .map(|row| Point::new(row[0], row[1]))
        .collect()
}

/// How sample rows are assigned curve parameters before fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parametrization {
    /// `t_i = i / (N - 1)`.
    #[default]
    Uniform,
    /// `t_i` proportional to the accumulated polyline length up to row `i`.
    ///
    /// Falls back to uniform spacing when every sample coincides.
    ChordLength,
}

/// Options controlling a least-squares fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    pub parametrization: Parametrization,

    /// Singular values below these thresholds are treated as zero.
    ///
    /// Tried in order until the solve yields a finite solution.
    pub svd_tolerances: Vec<f64>,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            parametrization: Parametrization::Uniform,
            svd_tolerances: vec![1e-12, 1e-10, 1e-8],
        }
    }
}

/// Residual summary of a fit, stored next to the curve in JSON files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub parametrization: Parametrization,
    pub samples: usize,
    pub sse: f64,
    pub rmse: f64,
}

/// A saved curve file (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub degree: usize,
    pub control_points: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<FitQuality>,
}
