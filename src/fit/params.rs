//! Parameter assignment for fitting.
//!
//! The fitter never receives curve parameters with the data; each sample row
//! is assigned a `t` in `[0, 1]` here before the basis matrix is built.
//!
//! Both schemes are deterministic and always produce exact endpoints
//! (`t_0 = 0`, `t_{N-1} = 1`) so the fitted curve spans the whole data range.

use nalgebra::DMatrix;

use crate::domain::Parametrization;

/// `n` evenly spaced values over `[0, 1]` (inclusive).
///
/// `n = 1` gives `[0]`, `n = 0` gives an empty vector.
pub fn unit_space(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }
    let last = (n as f64) - 1.0;
    (0..n).map(|i| i as f64 / last).collect()
}

/// Cumulative chord length of the polyline through the rows, normalized to `[0, 1]`.
///
/// Returns `None` when every sample coincides (zero total length).
pub fn chord_length_space(data: &DMatrix<f64>) -> Option<Vec<f64>> {
    let n = data.nrows();
    let mut out = Vec::with_capacity(n);
    let mut acc = 0.0;
    for i in 0..n {
        if i > 0 {
            let dx = data[(i, 0)] - data[(i - 1, 0)];
            let dy = data[(i, 1)] - data[(i - 1, 1)];
            acc += dx.hypot(dy);
        }
        out.push(acc);
    }

    if !(acc > 0.0 && acc.is_finite()) {
        return None;
    }
    for t in out.iter_mut() {
        *t /= acc;
    }
    if let Some(last) = out.last_mut() {
        *last = 1.0;
    }
    Some(out)
}

/// Assign a parameter to every data row.
pub fn assign_params(data: &DMatrix<f64>, parametrization: Parametrization) -> Vec<f64> {
    match parametrization {
        Parametrization::Uniform => unit_space(data.nrows()),
        Parametrization::ChordLength => chord_length_space(data).unwrap_or_else(|| {
            log::debug!("samples have zero chord length; using uniform parameters");
            unit_space(data.nrows())
        }),
    }
}
