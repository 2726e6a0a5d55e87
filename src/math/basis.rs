//! Bernstein basis polynomials.
//!
//! The degree-`n` basis is:
//!
//! - `B(n, k, t) = C(n, k) * t^k * (1 - t)^(n - k)` for `k = 0..=n`
//!
//! Numerical notes:
//! - Binomial coefficients are built multiplicatively in `f64`, which stays
//!   exact for every degree a least-squares fit can sensibly use.
//! - The basis sums to 1 for any `t`, including values outside `[0, 1]`.

use nalgebra::DMatrix;

/// Binomial coefficient `C(n, k)` as a float. Zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut c = 1.0;
    for i in 0..k {
        c = c * (n - i) as f64 / (i + 1) as f64;
    }
    c.round()
}

/// Evaluate a single basis polynomial `B(n, k, t)`.
pub fn bernstein(n: usize, k: usize, t: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    binomial(n, k) * t.powi(k as i32) * (1.0 - t).powi((n - k) as i32)
}

/// The `N × (degree + 1)` design matrix `B[i][k] = B(degree, k, ts[i])`.
pub fn bernstein_matrix(degree: usize, ts: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(ts.len(), degree + 1, |i, k| bernstein(degree, k, ts[i]))
}
