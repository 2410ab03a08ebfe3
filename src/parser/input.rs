//! Request sheets → (scenario name, body block) per data column
//!
//! Two template dialects are supported:
//! - Json: template rows between a `{` row and a `}` row in column 1,
//!   each row a `key: string` line whose `string` placeholder is replaced
//!   by the column's value
//! - Xml: column 1 holds the start tag, column 2 the end tag, and the
//!   value goes between them

use crate::error::{SpecflowError, SpecflowResult};
use crate::excel::{resolve, AbsentPolicy, SheetView};
use crate::types::{InputEntry, RequestType};

/// Wraps every rendered body, on its own line above and below
pub const BODY_DELIMITER: &str = "\"\"\"";
/// Token in a Json template row replaced by the cell value
pub const PLACEHOLDER: &str = "string";

const OPEN_MARKER: &str = "{";
const CLOSE_MARKER: &str = "}";
const JSON_FIRST_DATA_COLUMN: u32 = 2;
const XML_FIRST_DATA_COLUMN: u32 = 3;
const XML_FIRST_ROW: u32 = 3;

/// One rewrite step of a Json template row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateRule {
    /// Remove every occurrence
    Strip(&'static str),
    /// Replace every occurrence with the cell value
    Substitute(&'static str),
    /// Trim surrounding whitespace
    Trim,
}

/// Applied in order; non-breaking spaces go before the placeholder swap
const PROPERTY_RULES: [TemplateRule; 4] = [
    TemplateRule::Strip("\u{a0}"),
    TemplateRule::Strip(","),
    TemplateRule::Substitute(PLACEHOLDER),
    TemplateRule::Trim,
];

fn apply_rules(template: &str, value: &str) -> String {
    PROPERTY_RULES
        .iter()
        .fold(template.to_string(), |text, rule| match rule {
            TemplateRule::Strip(pattern) => text.replace(pattern, ""),
            TemplateRule::Substitute(pattern) => text.replace(pattern, value),
            TemplateRule::Trim => text.trim().to_string(),
        })
}

/// Parse a request sheet with the parser matching its dialect
pub fn parse_inputs(
    request_type: RequestType,
    sheet: &SheetView<'_>,
    sentinel: &str,
) -> SpecflowResult<Vec<InputEntry>> {
    match request_type {
        RequestType::Json => parse_json_inputs(sheet, sentinel),
        RequestType::Xml => Ok(parse_xml_inputs(sheet, sentinel)),
    }
}

/// Header-row text of a data column, or a positional name when blank
pub(crate) fn scenario_name(sheet: &SheetView<'_>, col: u32) -> String {
    sheet
        .text(1, col)
        .map(|name| name.into_owned())
        .unwrap_or_else(|| format!("Column {}", col))
}

/// Rows of the last `{` and last `}` markers in column 1
fn find_markers(sheet: &SheetView<'_>) -> (Option<u32>, Option<u32>) {
    let mut opening = None;
    let mut closing = None;
    for row in 1..=sheet.max_row() {
        if let Some(text) = sheet.text(row, 1) {
            match text.trim() {
                OPEN_MARKER => opening = Some(row),
                CLOSE_MARKER => closing = Some(row),
                _ => {}
            }
        }
    }
    (opening, closing)
}

/// Bracketed-block dialect
pub fn parse_json_inputs(sheet: &SheetView<'_>, sentinel: &str) -> SpecflowResult<Vec<InputEntry>> {
    let (Some(opening), Some(closing)) = find_markers(sheet) else {
        return Err(SpecflowError::Structural(format!(
            "Missing opening or closing bracket in json request sheet '{}'",
            sheet.name()
        )));
    };

    let inputs = (JSON_FIRST_DATA_COLUMN..=sheet.max_column())
        .map(|col| {
            let properties: Vec<String> = (opening + 1..closing)
                .filter_map(|row| {
                    let template = sheet.text(row, 1)?;
                    let value = resolve(sheet.text(row, col), sentinel, AbsentPolicy::EmptyString)?;
                    Some(apply_rules(&template, &value))
                })
                .collect();
            let properties = properties.join(",\n");

            InputEntry {
                name: scenario_name(sheet, col),
                body: [
                    BODY_DELIMITER,
                    OPEN_MARKER,
                    properties.as_str(),
                    CLOSE_MARKER,
                    BODY_DELIMITER,
                ]
                .join("\n"),
            }
        })
        .collect();

    Ok(inputs)
}

/// Tag-pair dialect
pub fn parse_xml_inputs(sheet: &SheetView<'_>, sentinel: &str) -> Vec<InputEntry> {
    (XML_FIRST_DATA_COLUMN..=sheet.max_column())
        .map(|col| {
            let mut lines: Vec<String> = Vec::new();
            for row in XML_FIRST_ROW..=sheet.max_row() {
                let start_tag = sheet.text(row, 1);
                let end_tag = sheet.text(row, 2).filter(|tag| !tag.trim().is_empty());

                match (start_tag, end_tag) {
                    (None, None) => {}
                    // Structural line such as an enclosing element
                    (Some(start), None) => lines.push(start.into_owned()),
                    (start, Some(end)) => {
                        if let Some(value) =
                            resolve(sheet.text(row, col), sentinel, AbsentPolicy::EmptyString)
                        {
                            lines.push(format!(
                                "{}{}{}",
                                start.as_deref().unwrap_or_default(),
                                value,
                                end
                            ));
                        }
                    }
                }
            }

            InputEntry {
                name: scenario_name(sheet, col),
                body: [BODY_DELIMITER, lines.join("\n").as_str(), BODY_DELIMITER].join("\n"),
            }
        })
        .collect()
}
