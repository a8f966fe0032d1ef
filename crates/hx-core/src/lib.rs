//! hx-core: shared foundation for the heat-sink designer.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - special (modified Bessel functions of the first kind)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod special;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HxError, HxResult};
pub use numeric::*;
pub use units::*;
