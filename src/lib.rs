//! Specflow - Excel test definitions to Gherkin scenarios
//!
//! This library reads API test-definition workbooks (request templates plus
//! expected-response assertions laid out as spreadsheet columns) and renders
//! each column as a standalone Gherkin scenario.
//!
//! # Features
//!
//! - Master `TestData` sheet selects cases and names their sheets
//! - Two request dialects: Json template blocks and XML tag pairs
//! - `DONOTINCLUDE` sentinel to leave properties and assertions out
//! - `@SmokeTest` / `@RegressionTest` tags from case-name prefixes
//!
//! # Example
//!
//! ```no_run
//! use royalbit_specflow::config::SpecflowConfig;
//! use royalbit_specflow::parser::parse_workbook_file;
//! use royalbit_specflow::render::render_feature;
//! use std::path::Path;
//!
//! let config = SpecflowConfig::default();
//! for case in parse_workbook_file(Path::new("Login.xlsx"), &config)? {
//!     println!("{}", render_feature(&case, &config)?);
//! }
//! # Ok::<(), royalbit_specflow::error::SpecflowError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod parser;
pub mod render;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::{PairingPolicy, SpecflowConfig};
pub use error::{SpecflowError, SpecflowResult};
pub use types::{Assertion, InputEntry, OutputEntry, ParameterMap, RequestType, TestCase};

#[cfg(test)]
pub(crate) mod test_support {
    use calamine::{Data, Range};

    /// Build a value range from rows of text; `""` leaves the cell empty
    pub fn grid(rows: &[&[&str]]) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) as u32;
        if height == 0 || width == 0 {
            return Range::empty();
        }

        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                if !text.is_empty() {
                    range.set_value((r as u32, c as u32), Data::String(text.to_string()));
                }
            }
        }
        range
    }
}
