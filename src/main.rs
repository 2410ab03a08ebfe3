use anyhow::Context;
use clap::{Parser, Subcommand};
use royalbit_specflow::cli;
use royalbit_specflow::config::{PairingPolicy, SpecflowConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "specflow")]
#[command(about = "Generate Gherkin test scenarios from Excel files")]
#[command(long_about = "Specflow - Excel test definitions to Gherkin scenarios

Each workbook holds a 'TestData' master sheet with one row per test case.
Rows marked 'XMLWebServiceTest' name a request sheet (Json or XML template)
and a validation sheet (expected values). Every data column becomes one
scenario; every case becomes one .feature file.

COMMANDS:
  generate  - Convert every .xlsx in a directory
  inspect   - Show the cases parsed from one workbook

EXAMPLES:
  specflow generate ./workbooks ./features
  specflow generate ./workbooks ./features --pairing truncate
  specflow inspect Login.xlsx --render

LOGGING:
  Diagnostics for skipped workbooks and cases go to stderr.
  Set RUST_LOG (e.g. RUST_LOG=royalbit_specflow=debug) for more detail.")]
#[command(version)]
struct Cli {
    /// YAML settings file (sheet names, sentinel, pairing policy, ...)
    #[arg(short, long, global = true, env = "SPECFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// How to pair request and validation columns when their counts differ
    #[arg(long, global = true, value_enum)]
    pairing: Option<PairingPolicy>,

    /// Prepend a 'Feature: <TITLE>' header to every file
    #[arg(long, global = true)]
    feature_title: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert every .xlsx workbook in a directory.

Writes <output_dir>/<workbook>/<case>.feature for each test case.
A workbook that cannot be read, or a case with missing sheets, unknown
request type or missing brackets, is reported and skipped; the rest of
the run continues.")]
    /// Convert every .xlsx workbook in a directory
    Generate {
        /// Directory containing .xlsx workbooks
        input_dir: PathBuf,

        /// Directory receiving one subdirectory per workbook
        output_dir: PathBuf,

        /// Parse and render without writing files
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Show the test cases parsed from one workbook
    Inspect {
        /// Path to Excel file (.xlsx)
        workbook: PathBuf,

        /// Print the rendered feature text
        #[arg(short, long)]
        render: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("royalbit_specflow={}", default_level).into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<SpecflowConfig> {
    let mut config = match &cli.config {
        Some(path) => SpecflowConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SpecflowConfig::default(),
    };

    if let Some(pairing) = cli.pairing {
        config.pairing = pairing;
    }
    if let Some(title) = &cli.feature_title {
        config.feature_title = Some(title.clone());
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Generate {
            input_dir,
            output_dir,
            dry_run,
        } => cli::generate(input_dir, output_dir, &config, dry_run, cli.verbose)
            .context("Generation failed")?,

        Commands::Inspect { workbook, render } => {
            cli::inspect(workbook, &config, render).context("Inspection failed")?
        }
    }

    Ok(())
}
