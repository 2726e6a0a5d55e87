//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the point primitives (`Point`, `PointVector`)
//! - fit configuration (`Parametrization`, `FitOptions`)
//! - the persisted curve schema (`CurveFile`, `FitQuality`)

pub mod types;

pub use types::*;
