//! Shared fixtures: author real .xlsx workbooks for end-to-end tests

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

pub const MARKER: &str = "XMLWebServiceTest";

/// A sheet as rows of text; `""` leaves the cell empty and numeric text is
/// stored as a number
pub type SheetRows<'a> = (&'a str, Vec<Vec<&'a str>>);

pub fn write_workbook(path: &Path, sheets: &[SheetRows<'_>]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                if text.is_empty() {
                    continue;
                }
                match text.parse::<f64>() {
                    Ok(number) => sheet.write_number(r as u32, c as u16, number).unwrap(),
                    Err(_) => sheet.write_string(r as u32, c as u16, *text).unwrap(),
                };
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Master row with the four standard parameters
pub fn master_row<'a>(name: &'a str, request: &'a str, validation: &'a str) -> Vec<&'a str> {
    vec![
        "1", name, MARKER, "", "", "", "", "", "", "RequestSheet", request, "ValidationSheet",
        validation, "URL", "/api/login", "RequestHeader", "application/json",
    ]
}

/// Login workbook from the reference example: one Json request column
/// and one "Response Code" assertion
pub fn login_workbook(path: &Path, case_name: &str) {
    write_workbook(
        path,
        &[
            (
                "TestData",
                vec![
                    vec!["Id", "Name", "Description"],
                    master_row(case_name, "ReqLogin", "ValLogin"),
                ],
            ),
            (
                "ReqLogin",
                vec![
                    vec!["Json", "Login_OK"],
                    vec!["{", ""],
                    vec!["user: string", "bob"],
                    vec!["", ""],
                    vec!["}", ""],
                ],
            ),
            (
                "ValLogin",
                vec![vec!["Validation", "Login_OK"], vec!["Response Code", "200"]],
            ),
        ],
    );
}
