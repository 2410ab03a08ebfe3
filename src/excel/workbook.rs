//! Workbook loader - Excel (.xlsx) → in-memory value ranges

use crate::error::{SpecflowError, SpecflowResult};
use crate::excel::cell::SheetView;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A read-only workbook: every sheet's value range, loaded once.
pub struct Workbook {
    path: PathBuf,
    sheets: HashMap<String, Range<Data>>,
}

impl Workbook {
    /// Open an .xlsx file and load all of its worksheets
    pub fn open<P: AsRef<Path>>(path: P) -> SpecflowResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut xlsx: Xlsx<_> = open_workbook(&path).map_err(|e| {
            SpecflowError::Workbook(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let mut sheets = HashMap::new();
        for sheet_name in xlsx.sheet_names() {
            let range = xlsx.worksheet_range(&sheet_name).map_err(|e| {
                SpecflowError::Workbook(format!(
                    "Failed to read sheet '{}' in {}: {}",
                    sheet_name,
                    path.display(),
                    e
                ))
            })?;
            debug!(sheet = %sheet_name, size = ?range.get_size(), "loaded sheet");
            sheets.insert(sheet_name, range);
        }

        Ok(Self { path, sheets })
    }

    /// Build a workbook from ranges already in memory
    pub fn from_sheets<P, I, S>(path: P, sheets: I) -> Self
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = (S, Range<Data>)>,
        S: Into<String>,
    {
        Self {
            path: path.as_ref().to_path_buf(),
            sheets: sheets
                .into_iter()
                .map(|(name, range)| (name.into(), range))
                .collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a sheet by its exact name
    pub fn sheet(&self, name: &str) -> Option<SheetView<'_>> {
        self.sheets
            .get_key_value(name)
            .map(|(name, range)| SheetView::new(name, range))
    }

    /// Look up a sheet, failing with a structural error when it is missing
    pub fn require_sheet(&self, name: &str) -> SpecflowResult<SheetView<'_>> {
        self.sheet(name).ok_or_else(|| {
            SpecflowError::Structural(format!(
                "Sheet '{}' not found in {}",
                name,
                self.path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::grid;

    #[test]
    fn test_sheet_lookup_is_exact() {
        let workbook = Workbook::from_sheets("book.xlsx", [("TestData", grid(&[&["x"]]))]);

        assert!(workbook.sheet("TestData").is_some());
        assert!(workbook.sheet("testdata").is_none());
        assert_eq!(workbook.path(), Path::new("book.xlsx"));
    }

    #[test]
    fn test_require_sheet_reports_missing_name() {
        let workbook = Workbook::from_sheets("book.xlsx", Vec::<(String, Range<Data>)>::new());

        match workbook.require_sheet("ReqLogin") {
            Err(SpecflowError::Structural(msg)) => assert!(msg.contains("ReqLogin")),
            _ => panic!("Expected structural error"),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let result = Workbook::open("/nonexistent/book.xlsx");
        assert!(matches!(result, Err(SpecflowError::Workbook(_))));
    }
}
