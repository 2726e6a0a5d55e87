//! Least-squares Bézier fitting.
//!
//! Given:
//! - an `N × 2` data matrix `Y` of samples `(x_i, y_i)`
//! - a target degree `d`
//!
//! we:
//! - assign every row a parameter `t_i` (see `params`)
//! - build the Bernstein design matrix `B` (`N × (d + 1)`)
//! - solve `B X = Y` in the least-squares sense for the control points `X`
//!
//! and return the curve together with its residual diagnostics.

use nalgebra::DMatrix;

use crate::curve::Curve;
use crate::domain::{FitOptions, FitQuality, Parametrization, matrix_to_points};
use crate::error::CurveError;
use crate::fit::params::assign_params;
use crate::math::{bernstein_matrix, solve_least_squares};

/// A fitted curve with the parameters it was fitted against.
#[derive(Debug, Clone)]
pub struct CurveFit {
    pub curve: Curve,
    pub parametrization: Parametrization,
    /// Parameter assigned to each data row.
    pub params: Vec<f64>,
    pub sse: f64,
    pub rmse: f64,
}

impl CurveFit {
    pub fn quality(&self) -> FitQuality {
        FitQuality {
            parametrization: self.parametrization,
            samples: self.params.len(),
            sse: self.sse,
            rmse: self.rmse,
        }
    }
}

/// Fit a degree-`degree` curve to the rows of `data`.
///
/// `data` needs two columns and at least `degree + 2` finite rows.
pub fn fit_curve(
    data: &DMatrix<f64>,
    degree: usize,
    opts: &FitOptions,
) -> Result<CurveFit, CurveError> {
    if data.ncols() != 2 {
        return Err(CurveError::invalid(
            "data",
            format!("expected 2 columns (x, y), got {}", data.ncols()),
        ));
    }
    let n = data.nrows();
    let min_rows = degree.saturating_add(2);
    if n < min_rows {
        return Err(CurveError::invalid(
            "data",
            format!("a degree {degree} fit needs at least {min_rows} samples, got {n}"),
        ));
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(CurveError::invalid("data", "samples must be finite"));
    }

    let params = assign_params(data, opts.parametrization);
    let basis = bernstein_matrix(degree, &params);

    let solution = solve_least_squares(&basis, data, &opts.svd_tolerances).ok_or_else(|| {
        CurveError::Solve(format!(
            "no finite solution for degree {degree} with {n} samples"
        ))
    })?;

    let residuals = data - &basis * &solution;
    let sse = residuals.norm_squared();
    let rmse = (sse / n as f64).sqrt();

    let curve = Curve::new(matrix_to_points(&solution))?;
    log::debug!(
        "fitted degree {degree} curve to {n} samples ({:?} parameters), rmse {rmse:.3e}",
        opts.parametrization
    );

    Ok(CurveFit {
        curve,
        parametrization: opts.parametrization,
        params,
        sse,
        rmse,
    })
}
