use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use assay_join::constants::{compound, paths};
use assay_join::pipeline::{self, PipelineConfig};

/// Join compound bioassay spreadsheets into a flat CSV export.
#[derive(Debug, Parser)]
#[command(name = "assay-join", version, about)]
struct Cli {
    /// Path of the inhibition workbook.
    #[arg(long, default_value = paths::INHIBITION)]
    inhibition: PathBuf,
    /// Path of the potency (IC50) workbook.
    #[arg(long, default_value = paths::POTENCY)]
    potency: PathBuf,
    /// Path of the CSV output file.
    #[arg(long, default_value = paths::OUTPUT)]
    output: PathBuf,
    /// Prefix that identifies compound cells in both sheets.
    #[arg(long, default_value = compound::ID_PREFIX)]
    id_prefix: String,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();
    let config = PipelineConfig {
        inhibition_path: cli.inhibition,
        potency_path: cli.potency,
        output_path: cli.output,
        id_prefix: cli.id_prefix,
    };
    match pipeline::run(&config) {
        Ok(report) => {
            println!(
                "joined {} compounds ({} inhibition entries) into {}",
                report.records_written,
                report.inhibition_entries,
                config.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("extraction failed: {err}");
            ExitCode::FAILURE
        }
    }
}
