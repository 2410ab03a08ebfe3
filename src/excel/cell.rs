//! Cell accessor: normalizes raw cell values and applies presence policies

use calamine::{Data, Range};
use std::borrow::Cow;

/// Rendering of date cells, e.g. `2024-01-15 00:00:00`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reserved value meaning "leave this property or assertion out".
pub const DO_NOT_INCLUDE: &str = "DONOTINCLUDE";

/// What an absent (blank) cell resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentPolicy {
    /// Blank resolves to `""` (request inputs).
    EmptyString,
    /// Blank drops the entry (expected outputs).
    Omit,
}

/// Normalize a raw cell to text, or `None` when the cell holds nothing.
pub fn cell_text(data: &Data) -> Option<Cow<'_, str>> {
    match data {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(Cow::Borrowed(s.as_str())),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => {
            Some(Cow::Owned(format!("{}", *f as i64)))
        }
        Data::Bool(true) => Some(Cow::Borrowed("True")),
        Data::Bool(false) => Some(Cow::Borrowed("False")),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => Some(Cow::Owned(datetime.format(DATETIME_FORMAT).to_string())),
            None => Some(Cow::Owned(dt.to_string())),
        },
        other => Some(Cow::Owned(other.to_string())),
    }
}

/// Resolve a cell value against the sentinel and an absent-value policy.
pub fn resolve<'a>(
    text: Option<Cow<'a, str>>,
    sentinel: &str,
    policy: AbsentPolicy,
) -> Option<Cow<'a, str>> {
    match text {
        None => match policy {
            AbsentPolicy::EmptyString => Some(Cow::Borrowed("")),
            AbsentPolicy::Omit => None,
        },
        Some(value) if value == sentinel => None,
        Some(value) => Some(value),
    }
}

/// Read-only, 1-based view over one worksheet's value range.
#[derive(Clone, Copy)]
pub struct SheetView<'a> {
    name: &'a str,
    range: &'a Range<Data>,
}

impl<'a> SheetView<'a> {
    pub fn new(name: &'a str, range: &'a Range<Data>) -> Self {
        Self { name, range }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Text of the cell at (`row`, `col`), both 1-based.
    pub fn text(&self, row: u32, col: u32) -> Option<Cow<'a, str>> {
        if row == 0 || col == 0 {
            return None;
        }
        self.range
            .get_value((row - 1, col - 1))
            .and_then(cell_text)
    }

    /// Last used row, counted from row 1 (0 for an empty sheet).
    pub fn max_row(&self) -> u32 {
        self.range.end().map(|(row, _)| row + 1).unwrap_or(0)
    }

    /// Last used column, counted from column 1 (0 for an empty sheet).
    pub fn max_column(&self) -> u32 {
        self.range.end().map(|(_, col)| col + 1).unwrap_or(0)
    }
}
