//! hx-materials: temperature-dependent thermal conductivity of fin materials.
//!
//! Provides:
//! - `MaterialPropertyTable`: per-material ordered (T, k) samples
//! - a built-in reference dataset loaded once per process
//! - YAML loading of custom datasets
//!
//! Lookups interpolate linearly between the two bracketing samples and refuse to
//! extrapolate outside the tabulated range.
//!
//! # Example
//!
//! ```no_run
//! use hx_core::units::k;
//! use hx_materials::MaterialPropertyTable;
//!
//! let table = MaterialPropertyTable::builtin();
//! let cond = table.resolve("Aluminum 2024-T6", k(300.0)).unwrap();
//! println!("k = {} W/(m·K)", cond.value);
//! ```

pub mod error;
pub mod table;

// Re-exports
pub use error::{MaterialError, MaterialResult};
pub use table::{MaterialCurve, MaterialEntry, MaterialPropertyTable, MaterialSummary, Sample};
