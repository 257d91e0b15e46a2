#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Fixed compound-ID and sheet-layout constants.
pub mod constants;
mod errors;
/// Extraction strategies for the two source layouts.
pub mod extract;
/// End-to-end extract, join, and write pipeline.
pub mod pipeline;
/// Compound record and measurement types.
pub mod record;
/// Sheet grid abstraction and workbook loading.
pub mod sheet;
/// Shared type aliases.
pub mod types;
/// CSV output writer.
pub mod writer;

pub use errors::ExtractError;
pub use extract::{FixedOffsetExtractor, SentinelScanExtractor, SheetExtractor};
pub use pipeline::{PipelineConfig, PipelineReport};
pub use record::{CompoundRecord, InhibitionMap, Measurement};
pub use sheet::{CellValue, InMemorySheet, SheetGrid, load_xlsx};
pub use types::{CompoundId, SheetId};
