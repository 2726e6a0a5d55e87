//! `bezier-curves` library crate.
//!
//! Arbitrary-degree 2D Bézier curves with:
//!
//! - De Casteljau evaluation (single parameter, batch, uniform sampling)
//! - least-squares fitting from sampled data
//! - control-point blending of equal-degree curves
//! - nearest-point projection
//!
//! ```
//! use bezier_curves::{Curve, Point};
//!
//! let curve = Curve::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)]).unwrap();
//! assert_eq!(curve.project_point(Point::new(1.0, 1.5), true), 1.0);
//! ```

pub mod curve;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;

pub use curve::Curve;
pub use domain::{FitOptions, Parametrization, Point, PointVector};
pub use error::CurveError;
pub use fit::CurveFit;
