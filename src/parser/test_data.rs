//! Master sheet rows → case name + parameter table

use crate::error::{SpecflowError, SpecflowResult};
use crate::excel::SheetView;
use crate::types::ParameterMap;

/// Column holding the case-type marker
pub const DESCRIPTION_COLUMN: u32 = 3;
/// Column holding the case name
pub const NAME_COLUMN: u32 = 2;
/// Column of the first parameter key; its value sits one column right
pub const FIRST_PARAMETER_COLUMN: u32 = 10;
/// Row 1 is the header
pub const FIRST_DATA_ROW: u32 = 2;

/// A master-sheet row selected for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDataRow {
    /// 1-based sheet row
    pub row: u32,
    pub name: String,
    pub parameters: ParameterMap,
}

impl TestDataRow {
    /// Names of the request and validation sheets this row points to
    pub fn sheet_names(&self) -> SpecflowResult<(&str, &str)> {
        let lookup = |key: &str| {
            self.parameters.get(key).ok_or_else(|| {
                SpecflowError::Structural(format!(
                    "Missing request or validation sheet: no '{}' parameter",
                    key
                ))
            })
        };
        Ok((
            lookup(ParameterMap::REQUEST_SHEET)?,
            lookup(ParameterMap::VALIDATION_SHEET)?,
        ))
    }
}

/// All data rows whose description cell equals `marker`, top to bottom
pub fn parse_rows(sheet: &SheetView<'_>, marker: &str) -> Vec<TestDataRow> {
    (FIRST_DATA_ROW..=sheet.max_row())
        .filter_map(|row| parse_row(sheet, row, marker))
        .collect()
}

/// Parse one row, or `None` when it is not marked for conversion
pub fn parse_row(sheet: &SheetView<'_>, row: u32, marker: &str) -> Option<TestDataRow> {
    if sheet.text(row, DESCRIPTION_COLUMN).as_deref() != Some(marker) {
        return None;
    }

    let name = sheet.text(row, NAME_COLUMN).unwrap_or_default();
    Some(TestDataRow {
        row,
        name: format!("{}_{}", name, row - 1),
        parameters: parse_parameters(sheet, row),
    })
}

/// Read (key, value) pairs two columns apart until a pair has a blank side
fn parse_parameters(sheet: &SheetView<'_>, row: u32) -> ParameterMap {
    let mut parameters = ParameterMap::new();
    let mut key_col = FIRST_PARAMETER_COLUMN;

    while key_col < sheet.max_column() {
        let (Some(key), Some(value)) = (sheet.text(row, key_col), sheet.text(row, key_col + 1))
        else {
            break;
        };
        parameters.insert(key, value);
        key_col += 2;
    }

    parameters
}
