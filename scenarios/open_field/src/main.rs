#[macro_use]
extern crate log;

use std::path::PathBuf;

use battlefield_model::ScenarioVariant;
use battlefield_reporter::{run_report, OutputFormat};
use clap::Parser;

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print a summary report over an open-field battlefield scenario document.
#[derive(Parser)]
#[command(about, long_about = None)]
struct Cli {
    /// Path to the scenario document.
    #[arg(default_value = "battlefield_data.json")]
    data: PathBuf,

    /// Output format for the report.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;

    let args = Cli::parse();
    info!("{CRATE_NAME} {CRATE_VERSION}");

    let stdout = std::io::stdout();
    if let Err(error) = run_report(
        &args.data,
        ScenarioVariant::OpenField,
        args.format,
        stdout.lock(),
    ) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
    Ok(())
}
