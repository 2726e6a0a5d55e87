//! Least squares solver.
//!
//! Fitting repeatedly solves small linear problems of the form:
//!
//! ```text
//! minimize ‖B X - Y‖²
//! ```
//!
//! where `B` is the tall Bernstein design matrix and `Y` holds one column per
//! coordinate. Both columns share the decomposition of `B`.
//!
//! Implementation choices:
//! - We use SVD so tall systems are solved robustly without forming the
//!   normal equations `BᵀB`, whose condition number grows quickly with degree.
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - Singular values under the tolerance are treated as zero, which gives the
//!   minimum-norm solution when the basis is numerically rank deficient.

use nalgebra::DMatrix;

/// Solve a least squares problem with a multi-column right-hand side using SVD.
///
/// Each tolerance is tried in turn; returns `None` if none yields a finite
/// solution.
pub fn solve_least_squares(
    x: &DMatrix<f64>,
    y: &DMatrix<f64>,
    tolerances: &[f64],
) -> Option<DMatrix<f64>> {
    let svd = x.clone().svd(true, true);

    for (attempt, &tol) in tolerances.iter().enumerate() {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                if attempt > 0 {
                    log::warn!("least-squares solve needed relaxed tolerance {tol:e}");
                }
                return Some(beta);
            }
        }
    }

    None
}
