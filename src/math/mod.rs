//! Mathematical utilities: Bernstein basis, least squares, and polynomials.

pub mod basis;
pub mod ols;
pub mod poly;

pub use basis::*;
pub use ols::*;
pub use poly::*;
