use anyhow::Result;
use clap::Parser;
use employees::{logging::setup_tracing, table, ErrorKind, Loader, Registry, RowPolicy};

use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(version, about = "Generates reports from employee CSV files")]
struct Args {
    /// Paths to CSV files with employee data
    #[arg(long, num_args = 1.., required = true)]
    files: Vec<PathBuf>,

    /// Type of report to generate (performance)
    #[arg(long, env = "EMPLOYEES_REPORT")]
    report: String,

    /// Skip rows with missing or invalid values instead of failing
    #[arg(long)]
    skip_invalid: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = setup_tracing(args.verbose) {
        eprintln!("Unexpected error: {err:#}");
        return ExitCode::FAILURE;
    }
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<employees::Error>().map(employees::Error::kind) {
                Some(ErrorKind::NotFound | ErrorKind::Value) => eprintln!("Error: {err}"),
                Some(ErrorKind::Other) | None => eprintln!("Unexpected error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let registry = Registry::default();
    let report = registry.create(&args.report)?;

    let policy = if args.skip_invalid {
        RowPolicy::Skip
    } else {
        RowPolicy::Abort
    };
    let loaded = Loader::with_policy(policy).load(&args.files)?;
    if !loaded.rejected.is_empty() {
        tracing::warn!(rows = loaded.rejected.len(), "skipped invalid rows");
    }
    if loaded.records.is_empty() {
        println!("No employee data found in the provided files.");
        return Ok(());
    }

    let rows = report.generate(&loaded.records);
    let Some(table) = table::render(&rows) else {
        println!("No data available for the report.");
        return Ok(());
    };
    println!("\nReport: {}\n", report.name());
    println!("{table}");
    Ok(())
}
