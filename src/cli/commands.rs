use crate::config::SpecflowConfig;
use crate::error::SpecflowResult;
use crate::parser;
use crate::render;
use crate::writer;
use colored::Colorize;
use std::path::PathBuf;
use tracing::warn;

/// Execute the generate command
pub fn generate(
    input_dir: PathBuf,
    output_dir: PathBuf,
    config: &SpecflowConfig,
    dry_run: bool,
    verbose: bool,
) -> SpecflowResult<()> {
    println!("{}", "🥒 Specflow - Generating scenarios".bold().green());
    println!("   Input:  {}", input_dir.display());
    println!("   Output: {}\n", output_dir.display());

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No files will be written\n".yellow()
        );
    }

    let report = writer::generate(&input_dir, &output_dir, config, dry_run)?;

    if verbose {
        for path in &report.written {
            println!("   📄 {}", path.display().to_string().cyan());
        }
        if !report.written.is_empty() {
            println!();
        }
    }

    println!("{}", "✅ Generation Complete!".bold().green());
    println!("   Workbooks: {}", report.workbooks);
    println!("   Test cases: {}", report.cases);
    println!("   Scenarios: {}", report.scenarios);

    if report.failed_workbooks > 0 || report.skipped_cases > 0 {
        println!(
            "{}",
            format!(
                "⚠️  {} workbook(s) failed, {} test case(s) skipped (see log)",
                report.failed_workbooks, report.skipped_cases
            )
            .yellow()
        );
    }
    if report.workbooks == 0 {
        println!("{}", "⚠️  No .xlsx files found".yellow());
    }

    Ok(())
}

/// Execute the inspect command
pub fn inspect(workbook: PathBuf, config: &SpecflowConfig, render_text: bool) -> SpecflowResult<()> {
    println!("{}", "🔍 Specflow - Inspect".bold().green());
    println!("   Workbook: {}\n", workbook.display());

    let cases = parser::parse_workbook_file(&workbook, config)?;
    if cases.is_empty() {
        println!("{}", "⚠️  No test cases found".yellow());
        return Ok(());
    }

    for case in &cases {
        println!(
            "   🧪 {} ({}, {} scenarios)",
            case.name.bright_blue().bold(),
            case.request_type.label(),
            case.scenarios.len()
        );
        for (key, value) in case.parameters.iter() {
            println!("      {} = {}", key, value);
        }
        for input in case.scenarios.inputs() {
            println!("      - {}", input.name.cyan());
        }

        if render_text {
            println!();
            match render::render_feature(case, config) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    warn!(case = %case.name, "skipping test case: {}", e);
                    println!("{}", format!("⚠️  {} skipped: {}", case.name, e).yellow());
                }
            }
        }
    }
    println!();

    Ok(())
}
