//! # stox-formula
//!
//! Rewriting of cell references inside formula text.
//!
//! - [`rewrite_cell_refs`] - applies a per-reference remapping, scoped to one
//!   sheet
//! - [`RefShift`] - a ready-made remapping for inserted or deleted rows and
//!   columns
//!
//! ## Example
//!
//! ```rust
//! use stox_formula::{rewrite_cell_refs, RefScope, RefShift};
//!
//! let shift = RefShift::insert_rows(0, 1).unwrap();
//! let out = rewrite_cell_refs("=SUM(A1:A3)*Data!B1", RefScope::SameSheet, "Data", |r| shift.apply(r));
//! assert_eq!(out, "=SUM(A2:A4)*Data!B2");
//! ```

pub mod error;
pub mod refs;
pub mod shift;

pub use error::{FormulaError, FormulaResult};
pub use refs::{rewrite_cell_refs, RefScope};
pub use shift::{Axis, RefShift, ShiftKind, REF_ERROR};
