use std::io;

use thiserror::Error;

use crate::types::{CompoundId, SheetId};

/// Error type for workbook loading, extraction, join, and output failures.
///
/// All variants are fatal; the pipeline never retries and never degrades a
/// failed lookup or parse into a default value.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A row violated the fixed sheet layout.
    #[error("sheet '{sheet_id}' row {row}: {details}")]
    FormatViolation {
        /// Sheet the offending row belongs to.
        sheet_id: SheetId,
        /// 1-based spreadsheet row number, matching what a user sees in
        /// their spreadsheet application.
        row: usize,
        /// What the layout expected and what was found instead.
        details: String,
    },
    /// A potency row's identifier has no entry in the inhibition mapping.
    #[error("compound '{identifier}' has no inhibition entry to join against")]
    JoinFailure {
        /// The identifier missing from the inhibition mapping.
        identifier: CompoundId,
    },
    /// The workbook file could not be opened or its sheet could not be read.
    #[error("workbook '{path}' could not be read: {source}")]
    Workbook {
        /// Path of the workbook that failed to load.
        path: String,
        /// Underlying calamine failure.
        #[source]
        source: calamine::XlsxError,
    },
    /// The workbook contains no worksheet to extract from.
    #[error("workbook '{path}' has no worksheet")]
    MissingWorksheet {
        /// Path of the empty workbook.
        path: String,
    },
    /// Filesystem failure while opening or writing the output destination.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// CSV serialization failure while writing output records.
    #[error("csv output failure: {0}")]
    Csv(#[from] csv::Error),
}
