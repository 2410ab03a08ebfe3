//! Excel access layer
//!
//! - Workbook: opens an .xlsx once and serves sheets by name
//! - Cell accessor: 1-based cell text plus the blank/sentinel presence policy

mod cell;
mod workbook;

pub use cell::{cell_text, resolve, AbsentPolicy, SheetView, DO_NOT_INCLUDE};
pub use workbook::Workbook;
