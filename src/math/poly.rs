//! Power-basis polynomials with real root finding.
//!
//! Projection needs the stationary points of `‖P(t) - q‖²`, i.e. the real
//! roots of `(P(t) - q) · P'(t)`. That polynomial is assembled here from the
//! per-coordinate power-basis forms of the curve.
//!
//! Roots come from the eigenvalues of the companion matrix and are then
//! polished with a few Newton steps on the polynomial itself.

use std::ops::{Add, Mul};

use nalgebra::DMatrix;

/// Leading coefficients below this fraction of the largest one are dropped.
const LEADING_REL_EPS: f64 = 1e-13;

/// Eigenvalues with a relative imaginary part under this count as real.
const IMAG_REL_EPS: f64 = 1e-6;

const NEWTON_STEPS: usize = 8;

/// A polynomial `c0 + c1 t + c2 t² + ...` (coefficients in ascending order).
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self { coeffs: vec![0.0] }
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Horner evaluation.
    pub fn eval(&self, t: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }

    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(j, &c)| j as f64 * c)
                .collect(),
        )
    }

    /// Drop negligible leading coefficients. The zero polynomial stays `[0]`.
    pub fn trimmed(&self) -> Self {
        let scale = self.coeffs.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
        if scale == 0.0 {
            return Self::zero();
        }
        let mut len = self.coeffs.len();
        while len > 1 && self.coeffs[len - 1].abs() <= LEADING_REL_EPS * scale {
            len -= 1;
        }
        Self::new(self.coeffs[..len].to_vec())
    }

    /// Degree after trimming; `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        let t = self.trimmed();
        if t.coeffs.len() == 1 && t.coeffs[0] == 0.0 {
            None
        } else {
            Some(t.coeffs.len() - 1)
        }
    }

    /// Real roots in ascending order.
    ///
    /// The zero polynomial and non-zero constants report no roots.
    pub fn real_roots(&self) -> Vec<f64> {
        let p = self.trimmed();
        let c = &p.coeffs;

        let mut roots = match p.degree() {
            None | Some(0) => Vec::new(),
            Some(1) => vec![-c[0] / c[1]],
            Some(_) => companion_roots(c),
        };

        let dp = p.derivative();
        for r in roots.iter_mut() {
            *r = newton_polish(&p, &dp, *r);
        }

        roots.retain(|r| r.is_finite());
        roots.sort_by(|a, b| a.total_cmp(b));
        roots.dedup_by(|a, b| (*a - *b).abs() <= 1e-12 * (1.0 + b.abs()));
        roots
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(other.coeffs.len());
        let at = |c: &[f64], i: usize| c.get(i).copied().unwrap_or(0.0);
        Polynomial::new(
            (0..len)
                .map(|i| at(&self.coeffs, i) + at(&other.coeffs, i))
                .collect(),
        )
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        let mut out = vec![0.0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Polynomial::new(out)
    }
}

/// Real eigenvalues of the companion matrix of `c` (ascending, `c[m] != 0`).
fn companion_roots(c: &[f64]) -> Vec<f64> {
    let m = c.len() - 1;
    let lead = c[m];
    let mut companion = DMatrix::<f64>::zeros(m, m);
    for i in 1..m {
        companion[(i, i - 1)] = 1.0;
    }
    for i in 0..m {
        companion[(i, m - 1)] = -c[i] / lead;
    }

    companion
        .complex_eigenvalues()
        .iter()
        .filter(|z| z.im.abs() <= IMAG_REL_EPS * (1.0 + z.re.abs()))
        .map(|z| z.re)
        .collect()
}

fn newton_polish(p: &Polynomial, dp: &Polynomial, mut t: f64) -> f64 {
    let mut value = p.eval(t).abs();
    for _ in 0..NEWTON_STEPS {
        let slope = dp.eval(t);
        if slope == 0.0 || !slope.is_finite() {
            break;
        }
        let next = t - p.eval(t) / slope;
        let next_value = p.eval(next).abs();
        // Only accept steps that do not make the residual worse.
        if next_value.is_nan() || next_value >= value {
            break;
        }
        t = next;
        value = next_value;
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn horner_evaluation() {
        // 1 + 2t + 3t²
        let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(p.eval(0.0), 1.0);
        assert_eq!(p.eval(2.0), 17.0);
        assert_eq!(p.derivative().coeffs(), &[2.0, 6.0]);
    }

    #[test]
    fn product_and_sum() {
        let a = Polynomial::new(vec![-1.0, 1.0]); // t - 1
        let b = Polynomial::new(vec![1.0, 1.0]); // t + 1
        assert_eq!((&a * &b).coeffs(), &[-1.0, 0.0, 1.0]);
        assert_eq!((&a + &b).coeffs(), &[0.0, 2.0]);
    }

    #[test]
    fn cubic_roots_are_found_and_sorted() {
        // (t + 2)(t - 0.5)(t - 3) = t³ - 1.5t² - 5.5t + 3
        let p = Polynomial::new(vec![3.0, -5.5, -1.5, 1.0]);
        let roots = p.real_roots();
        assert_eq!(roots.len(), 3);
        assert_abs_diff_eq!(roots[0], -2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(roots[1], 0.5, epsilon = 1e-10);
        assert_abs_diff_eq!(roots[2], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn complex_pairs_are_skipped() {
        // (t² + 1)(t - 2)
        let p = Polynomial::new(vec![-2.0, 1.0, -2.0, 1.0]);
        let roots = p.real_roots();
        assert_eq!(roots.len(), 1);
        assert_abs_diff_eq!(roots[0], 2.0, epsilon = 1e-10);
    }

    #[test]
    fn negligible_leading_terms_are_trimmed() {
        let p = Polynomial::new(vec![-1.0, 2.0, 1e-18]);
        assert_eq!(p.degree(), Some(1));
        let roots = p.real_roots();
        assert_eq!(roots, vec![0.5]);
    }

    #[test]
    fn constants_have_no_roots() {
        assert!(Polynomial::zero().real_roots().is_empty());
        assert!(Polynomial::new(vec![4.0]).real_roots().is_empty());
        assert_eq!(Polynomial::zero().degree(), None);
    }
}
