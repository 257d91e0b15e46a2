//! End-to-end extract, join, and write pipeline.
//!
//! Strictly sequential: the inhibition mapping is built fully before the
//! potency pass starts, and nothing is written unless the whole record
//! sequence was built. A failed run never leaves a partial output file.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::constants::{compound, paths};
use crate::errors::ExtractError;
use crate::extract::{FixedOffsetExtractor, SentinelScanExtractor, SheetExtractor};
use crate::sheet::{SheetGrid, load_xlsx};
use crate::writer::write_records;

/// Input and output locations plus the identifier prefix for one run.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Path of the inhibition workbook.
    pub inhibition_path: PathBuf,
    /// Path of the potency (IC50) workbook.
    pub potency_path: PathBuf,
    /// Path of the CSV output file.
    pub output_path: PathBuf,
    /// Prefix that identifies compound cells in both sheets.
    pub id_prefix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            inhibition_path: paths::INHIBITION.into(),
            potency_path: paths::POTENCY.into(),
            output_path: paths::OUTPUT.into(),
            id_prefix: compound::ID_PREFIX.to_string(),
        }
    }
}

/// Counters describing one completed pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineReport {
    /// Entries produced by the inhibition scan.
    pub inhibition_entries: usize,
    /// Joined records written to the output file.
    pub records_written: usize,
}

/// Run the full pipeline: scan inhibition, extract and join potency, write CSV.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport, ExtractError> {
    let inhibition_sheet = load_xlsx(&config.inhibition_path)?;
    let inhibition =
        SentinelScanExtractor::new(config.id_prefix.as_str()).extract(&inhibition_sheet)?;
    if inhibition.is_empty() {
        warn!(
            "[assay:pipeline] inhibition scan of '{}' produced no entries; downstream joins will fail",
            inhibition_sheet.id()
        );
    }
    info!(
        "[assay:pipeline] inhibition mapping built ({} entries)",
        inhibition.len()
    );

    let potency_sheet = load_xlsx(&config.potency_path)?;
    let records = FixedOffsetExtractor::new(&inhibition)
        .with_prefix(config.id_prefix.as_str())
        .extract(&potency_sheet)?;
    info!(
        "[assay:pipeline] joined {} potency records",
        records.len()
    );

    write_records(&records, &config.output_path)?;
    info!(
        "[assay:pipeline] output written to '{}'",
        config.output_path.display()
    );
    Ok(PipelineReport {
        inhibition_entries: inhibition.len(),
        records_written: records.len(),
    })
}
