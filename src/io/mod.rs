//! Input/output helpers.
//!
//! - curve JSON read/write (`curve`)
//! - sampled point exports (`export`)

pub mod curve;
pub mod export;

pub use curve::*;
pub use export::*;
