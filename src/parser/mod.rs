//! Workbook parsing: master sheet → test cases
//!
//! A workbook fails as a whole only when its master sheet is missing.
//! Every other failure is scoped to one case: the case is logged and
//! dropped, and its siblings are still produced.

pub mod input;
pub mod output;
pub mod test_data;

use crate::config::SpecflowConfig;
use crate::error::{SpecflowError, SpecflowResult};
use crate::excel::Workbook;
use crate::types::{RequestType, ScenarioPairs, TestCase};
use std::path::Path;
use test_data::TestDataRow;
use tracing::{debug, warn};

/// Open an .xlsx file and parse every selected case
pub fn parse_workbook_file(path: &Path, config: &SpecflowConfig) -> SpecflowResult<Vec<TestCase>> {
    let workbook = Workbook::open(path)?;
    parse_workbook(&workbook, config)
}

/// Parse every master row marked for conversion
pub fn parse_workbook(workbook: &Workbook, config: &SpecflowConfig) -> SpecflowResult<Vec<TestCase>> {
    let master = workbook.sheet(&config.master_sheet).ok_or_else(|| {
        SpecflowError::Structural(format!(
            "No {} sheet found in file {}",
            config.master_sheet,
            workbook.path().display()
        ))
    })?;

    let rows = test_data::parse_rows(&master, &config.row_marker);
    debug!(
        file = %workbook.path().display(),
        rows = rows.len(),
        "selected master rows"
    );

    let cases = rows
        .iter()
        .filter_map(|row| match parse_testcase(workbook, row, config) {
            Ok(case) => Some(case),
            Err(e) => {
                warn!(
                    file = %workbook.path().display(),
                    case = %row.name,
                    "skipping test case: {}",
                    e
                );
                None
            }
        })
        .collect();

    Ok(cases)
}

/// Build one case from its master row and the sheets it names
pub fn parse_testcase(
    workbook: &Workbook,
    row: &TestDataRow,
    config: &SpecflowConfig,
) -> SpecflowResult<TestCase> {
    let (request_name, validation_name) = row.sheet_names()?;
    let request_sheet = workbook.require_sheet(request_name)?;
    let validation_sheet = workbook.require_sheet(validation_name)?;

    let keyword = request_sheet.text(1, 1).unwrap_or_default();
    let request_type = RequestType::from_keyword(&keyword).ok_or_else(|| {
        SpecflowError::Content(format!(
            "Unknown request type '{}' in request sheet {}",
            keyword, request_name
        ))
    })?;

    let inputs = input::parse_inputs(request_type, &request_sheet, &config.sentinel)?;
    let outputs =
        output::parse_outputs(&validation_sheet, &config.sentinel, config.validation_first_row);
    let scenarios = ScenarioPairs::pair(inputs, outputs, config.pairing)?;

    Ok(TestCase {
        name: row.name.clone(),
        request_type,
        parameters: row.parameters.clone(),
        scenarios,
    })
}
