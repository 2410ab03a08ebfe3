//! Validation sheets → (scenario name, assertions) per data column

use crate::excel::{resolve, AbsentPolicy, SheetView};
use crate::parser::input::scenario_name;
use crate::types::{Assertion, OutputEntry};

const FIRST_DATA_COLUMN: u32 = 2;
const EXPRESSION_COLUMN: u32 = 1;

/// Read assertions from `first_row` through the last used row.
///
/// Blank and sentinel cells drop the assertion; rows without an
/// expression are ignored.
pub fn parse_outputs(sheet: &SheetView<'_>, sentinel: &str, first_row: u32) -> Vec<OutputEntry> {
    (FIRST_DATA_COLUMN..=sheet.max_column())
        .map(|col| {
            let assertions = (first_row..=sheet.max_row())
                .filter_map(|row| {
                    let expression = sheet.text(row, EXPRESSION_COLUMN)?;
                    let value = resolve(sheet.text(row, col), sentinel, AbsentPolicy::Omit)?;
                    Some(Assertion::new(expression, value))
                })
                .collect();

            OutputEntry {
                name: scenario_name(sheet, col),
                assertions,
            }
        })
        .collect()
}
