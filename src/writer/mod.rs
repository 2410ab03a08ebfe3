//! Feature-file output
//!
//! Mirrors the input directory: each workbook `<stem>.xlsx` gets an output
//! subdirectory `<stem>/` holding one `<case name>.feature` per test case.

use crate::config::SpecflowConfig;
use crate::error::SpecflowResult;
use crate::parser;
use crate::render;
use crate::types::TestCase;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

pub const FEATURE_EXTENSION: &str = "feature";
const WORKBOOK_EXTENSION: &str = "xlsx";
const LOCK_FILE_PREFIX: &str = "~$";

/// Counts for one `generate` run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub workbooks: usize,
    pub failed_workbooks: usize,
    pub cases: usize,
    pub skipped_cases: usize,
    pub scenarios: usize,
    pub written: Vec<PathBuf>,
}

/// Workbook files directly inside `input_dir`, sorted by name
pub fn find_workbooks(input_dir: &Path) -> SpecflowResult<Vec<PathBuf>> {
    let mut workbooks = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_workbook = path.extension().and_then(|e| e.to_str()) == Some(WORKBOOK_EXTENSION);
        let is_lock_file = entry
            .file_name()
            .to_string_lossy()
            .starts_with(LOCK_FILE_PREFIX);
        if entry.file_type()?.is_file() && is_workbook && !is_lock_file {
            workbooks.push(path);
        }
    }
    workbooks.sort();
    Ok(workbooks)
}

/// `<output_dir>/<workbook stem>`
pub fn workbook_output_dir(output_dir: &Path, workbook: &Path) -> PathBuf {
    let stem = workbook
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(stem)
}

/// `<dir>/<case name>.feature`
pub fn feature_path(dir: &Path, case: &TestCase) -> PathBuf {
    dir.join(format!("{}.{}", case.name, FEATURE_EXTENSION))
}

/// Render a case and write its feature file; nothing is written on failure
pub fn write_case(case: &TestCase, dir: &Path, config: &SpecflowConfig) -> SpecflowResult<PathBuf> {
    let text = render::render_feature(case, config)?;
    fs::create_dir_all(dir)?;
    let path = feature_path(dir, case);
    fs::write(&path, text)?;
    debug!(path = %path.display(), scenarios = case.scenarios.len(), "wrote feature file");
    Ok(path)
}

/// Convert every workbook in `input_dir`, one at a time.
///
/// A workbook that cannot be parsed yields no cases; a case that cannot be
/// rendered or written yields no file. Both are logged and counted.
pub fn generate(
    input_dir: &Path,
    output_dir: &Path,
    config: &SpecflowConfig,
    dry_run: bool,
) -> SpecflowResult<GenerateReport> {
    let mut report = GenerateReport::default();

    for workbook in find_workbooks(input_dir)? {
        report.workbooks += 1;
        let cases = match parser::parse_workbook_file(&workbook, config) {
            Ok(cases) => cases,
            Err(e) => {
                error!(file = %workbook.display(), "{}", e);
                report.failed_workbooks += 1;
                continue;
            }
        };

        let dir = workbook_output_dir(output_dir, &workbook);
        for case in &cases {
            let outcome = if dry_run {
                render::render_feature(case, config).map(|_| feature_path(&dir, case))
            } else {
                write_case(case, &dir, config)
            };

            match outcome {
                Ok(path) => {
                    report.cases += 1;
                    report.scenarios += case.scenarios.len();
                    report.written.push(path);
                }
                Err(e) => {
                    warn!(
                        file = %workbook.display(),
                        case = %case.name,
                        "skipping test case: {}",
                        e
                    );
                    report.skipped_cases += 1;
                }
            }
        }
    }

    Ok(report)
}
