//! Curve fitting.
//!
//! Responsibilities:
//!
//! - assign parameters to sample rows (`params`)
//! - solve the least-squares control-point problem (`fitter`)

pub mod fitter;
pub mod params;

pub use fitter::*;
pub use params::*;

#[cfg(test)]
pub(crate) mod test_support {
    use nalgebra::DMatrix;

    use crate::curve::Curve;
    use crate::fit::unit_space;

    pub const VERY_CLOSE: f64 = 1e-5;
    pub const CLOSE_ENOUGH: f64 = 1e-1;

    /// 100 samples of `f` over `x ∈ [0, 5]`.
    pub fn generate_data(f: impl Fn(f64) -> f64) -> DMatrix<f64> {
        let xs: Vec<f64> = unit_space(100).into_iter().map(|s| 5.0 * s).collect();
        DMatrix::from_fn(xs.len(), 2, |i, j| if j == 0 { xs[i] } else { f(xs[i]) })
    }

    /// The curve should trace `f` closely, and batch evaluation must agree
    /// with scalar evaluation.
    pub fn check_regression(f: impl Fn(f64) -> f64, curve: &Curve) {
        let ts = unit_space(100);
        let mut results = Vec::with_capacity(ts.len());

        for &t in &ts {
            let p = curve.value_at(t);
            let expected = f(p.x);
            assert!(
                (expected - p.y).abs() < CLOSE_ENOUGH,
                "t={t}: expected {expected}, got {}",
                p.y
            );
            results.push(p);
        }

        let batch = curve.value_at_many(&ts);
        for (i, p) in results.iter().enumerate() {
            assert!((batch[(i, 0)] - p.x).abs() < VERY_CLOSE);
            assert!((batch[(i, 1)] - p.y).abs() < VERY_CLOSE);
        }
    }
}
