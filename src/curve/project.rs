//! Nearest-point projection onto a curve.
//!
//! The squared distance `D(t) = ‖P(t) - q‖²` is a polynomial in `t`; its
//! stationary points are the real roots of
//!
//! ```text
//! D'(t) / 2 = (P(t) - q) · P'(t)
//! ```
//!
//! Candidates come from two sources:
//!
//! - real roots of that polynomial in power-basis form (companion matrix)
//! - local minima of `D` on a uniform grid, narrowed by golden-section search
//!
//! The power-basis conversion loses precision as the degree grows, so every
//! candidate is then polished with Newton steps evaluated on the Bernstein
//! form. A step is only taken when it lowers `D`. The grid covers `[0, 1]`
//! when clamping and `[-1, 2]` otherwise; roots outside the grid still
//! compete when not clamping.

use crate::curve::Curve;
use crate::domain::Point;
use crate::math::Polynomial;

/// Grid intervals per unit of parameter range, per degree.
const SEEDS_PER_DEGREE: usize = 4;
const MIN_SEEDS: usize = 16;
const GOLDEN_STEPS: usize = 80;
const NEWTON_STEPS: usize = 16;

impl Curve {
    /// Parameter `t*` of the curve point closest to `point`.
    ///
    /// With `clamp`, `t*` lies in `[0, 1]`; without it, `t*` may extrapolate
    /// onto the polynomial extension of the curve.
    pub fn project_point(&self, point: Point, clamp: bool) -> f64 {
        let t = match self.degree() {
            0 => 0.0,
            1 => project_linear(self.control_points()[0], self.control_points()[1], point),
            _ => self.project_general(point, clamp),
        };
        if clamp { t.clamp(0.0, 1.0) } else { t }
    }

    fn squared_distance(&self, t: f64, point: Point) -> f64 {
        (self.value_at(t) - point).norm_squared()
    }

    fn project_general(&self, point: Point, clamp: bool) -> f64 {
        let mut candidates = self.stationary_roots(point);
        if clamp {
            candidates.retain(|t| (0.0..=1.0).contains(t));
            candidates.push(0.0);
            candidates.push(1.0);
        }
        candidates.extend(self.grid_minima(point, clamp));

        let velocity = self.derivative();
        let acceleration = velocity.derivative();
        let mut candidates: Vec<f64> = candidates
            .into_iter()
            .map(|t| self.newton_refine(&velocity, &acceleration, point, t, clamp))
            .collect();
        candidates.sort_by(|a, b| a.total_cmp(b));
        log::trace!("projection candidates: {candidates:?}");

        let mut best_t = 0.0;
        let mut best_d = f64::INFINITY;
        for t in candidates {
            let d = self.squared_distance(t, point);
            if d < best_d {
                best_t = t;
                best_d = d;
            }
        }
        best_t
    }

    /// Real roots of `(P(t) - q) · P'(t)` via the power basis.
    fn stationary_roots(&self, point: Point) -> Vec<f64> {
        let [px, py] = self.power_basis();
        let dx = &px + &Polynomial::new(vec![-point.x]);
        let dy = &py + &Polynomial::new(vec![-point.y]);
        let stationary = &(&dx * &px.derivative()) + &(&dy * &py.derivative());
        stationary.real_roots()
    }

    /// Golden-section minima of `D` around every local minimum on a uniform grid.
    fn grid_minima(&self, point: Point, clamp: bool) -> Vec<f64> {
        let (lo, hi) = if clamp { (0.0, 1.0) } else { (-1.0, 2.0) };
        let per_unit = (SEEDS_PER_DEGREE * self.degree()).max(MIN_SEEDS);
        let m = per_unit * (hi - lo) as usize;

        let grid: Vec<f64> = (0..=m)
            .map(|i| lo + (hi - lo) * i as f64 / m as f64)
            .collect();
        let values: Vec<f64> = grid.iter().map(|&t| self.squared_distance(t, point)).collect();

        let mut minima = Vec::new();
        for i in 0..=m {
            let left = i.saturating_sub(1);
            let right = (i + 1).min(m);
            if values[i] <= values[left] && values[i] <= values[right] {
                minima.push(golden_section(
                    |t| self.squared_distance(t, point),
                    grid[left],
                    grid[right],
                ));
            }
        }
        minima
    }

    /// Newton iteration on `D'(t) / 2`, evaluated in the Bernstein form.
    ///
    /// Never returns a parameter with a larger distance than `t`.
    fn newton_refine(
        &self,
        velocity: &Curve,
        acceleration: &Curve,
        point: Point,
        mut t: f64,
        clamp: bool,
    ) -> f64 {
        let mut best = self.squared_distance(t, point);
        for _ in 0..NEWTON_STEPS {
            let offset = self.value_at(t) - point;
            let v = velocity.value_at(t);
            let slope = offset.dot(&v);
            let curvature = v.norm_squared() + offset.dot(&acceleration.value_at(t));
            // Newton only heads for a minimum where D is convex.
            if !(curvature > 0.0 && curvature.is_finite()) {
                break;
            }
            let mut next = t - slope / curvature;
            if clamp {
                next = next.clamp(0.0, 1.0);
            }
            let d = self.squared_distance(next, point);
            if d.is_nan() || d >= best {
                break;
            }
            t = next;
            best = d;
        }
        t
    }
}

/// Minimize a unimodal `f` on `[a, b]`.
fn golden_section(f: impl Fn(f64) -> f64, mut a: f64, mut b: f64) -> f64 {
    let inv_phi = (5.0_f64.sqrt() - 1.0) / 2.0;
    let mut c = b - inv_phi * (b - a);
    let mut d = a + inv_phi * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);
    for _ in 0..GOLDEN_STEPS {
        if fc <= fd {
            b = d;
            d = c;
            fd = fc;
            c = b - inv_phi * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + inv_phi * (b - a);
            fd = f(d);
        }
    }
    if fc <= fd { c } else { d }
}

/// Closed-form scalar projection onto the line through `p0` and `p1`.
///
/// A degenerate segment projects everything to `t = 0`.
fn project_linear(p0: Point, p1: Point, point: Point) -> f64 {
    let dir = p1 - p0;
    let len_sq = dir.norm_squared();
    if len_sq == 0.0 {
        return 0.0;
    }
    (point - p0).dot(&dir) / len_sq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::test_support::generate_data;
    use approx::assert_abs_diff_eq;

    fn line() -> Curve {
        Curve::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)]).unwrap()
    }

    #[test]
    fn project_point_linear() {
        let curve = line();
        assert_eq!(curve.project_point(Point::new(1.0, 0.5), true), 0.5);
        assert_eq!(curve.project_point(Point::new(1.0, 1.5), true), 1.0);
        assert_eq!(curve.project_point(Point::new(1.0, 1.5), false), 1.5);
        assert_eq!(curve.project_point(Point::new(1.0, -2.0), true), 0.0);
        assert_eq!(curve.project_point(Point::new(1.0, -2.0), false), -2.0);
    }

    #[test]
    fn degenerate_curves_project_to_start() {
        let point = Curve::new(vec![Point::new(1.0, 1.0)]).unwrap();
        assert_eq!(point.project_point(Point::new(5.0, 5.0), false), 0.0);

        let collapsed = Curve::new(vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0)]).unwrap();
        assert_eq!(collapsed.project_point(Point::new(5.0, 5.0), true), 0.0);
    }

    #[test]
    fn points_on_the_curve_project_to_their_parameter() {
        let curve = Curve::fit(&generate_data(f64::sin), 4).unwrap();
        for &t in &[0.0, 0.1, 0.37, 0.5, 0.82, 1.0] {
            let p = curve.value_at(t);
            assert_abs_diff_eq!(curve.project_point(p, true), t, epsilon = 1e-6);
        }
    }

    #[test]
    fn quadratic_apex() {
        // Symmetric arch with apex at t = 0.5.
        let curve = Curve::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 0.0),
        ])
        .unwrap();
        assert_abs_diff_eq!(curve.project_point(Point::new(1.0, 3.0), true), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn clamping_selects_nearest_endpoint() {
        // Cubic running along the x axis from 0 to 3 with uniform speed.
        let curve = Curve::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ])
        .unwrap();
        assert_eq!(curve.project_point(Point::new(4.5, 1.0), true), 1.0);
        assert_abs_diff_eq!(curve.project_point(Point::new(4.5, 1.0), false), 1.5, epsilon = 1e-9);
        assert_eq!(curve.project_point(Point::new(-3.0, 0.0), true), 0.0);
        assert_abs_diff_eq!(curve.project_point(Point::new(-3.0, 0.0), false), -1.0, epsilon = 1e-9);
    }

    fn wiggly(x: f64) -> f64 {
        x * (3.0 * x).sin()
    }

    /// Smallest distance from `q` over `steps + 1` evenly spaced parameters in `[lo, hi]`.
    fn scan_distance(curve: &Curve, q: Point, lo: f64, hi: f64, steps: usize) -> f64 {
        (0..=steps)
            .map(|i| lo + (hi - lo) * i as f64 / steps as f64)
            .map(|t| (curve.value_at(t) - q).norm())
            .fold(f64::INFINITY, f64::min)
    }

    fn queries() -> [Point; 4] {
        [
            Point::new(2.5, 1.5),
            Point::new(1.3, 0.2),
            Point::new(4.0, -2.0),
            Point::new(-1.0, 0.0),
        ]
    }

    #[test]
    fn projection_is_a_global_minimum_on_the_segment() {
        for degree in [5, 8, 12, 15] {
            let curve = Curve::fit(&generate_data(wiggly), degree).unwrap();
            for q in queries() {
                let t = curve.project_point(q, true);
                assert!((0.0..=1.0).contains(&t));
                let found = (curve.value_at(t) - q).norm();
                let scan = scan_distance(&curve, q, 0.0, 1.0, 20_000);
                assert!(
                    found <= scan + 1e-9,
                    "degree {degree}, q {q:?}: t={t} at {found}, scan {scan}"
                );
            }
        }
    }

    #[test]
    fn unclamped_projection_beats_a_wide_scan() {
        for degree in [5, 8, 12, 15] {
            let curve = Curve::fit(&generate_data(wiggly), degree).unwrap();
            for q in queries() {
                let t = curve.project_point(q, false);
                let found = (curve.value_at(t) - q).norm();
                let scan = scan_distance(&curve, q, -1.0, 2.0, 30_000);
                assert!(
                    found <= scan + 1e-9,
                    "degree {degree}, q {q:?}: t={t} at {found}, scan {scan}"
                );
            }
        }
    }

    #[test]
    fn golden_section_finds_parabola_vertex() {
        let t = golden_section(|t| (t - 0.3) * (t - 0.3), 0.0, 1.0);
        assert_abs_diff_eq!(t, 0.3, epsilon = 1e-8);
    }
}
