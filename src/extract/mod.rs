//! Extraction strategies for the two source layouts.
//!
//! Ownership model:
//! - `SheetExtractor` is the shared interface both strategies implement, so
//!   the join logic stays format-agnostic.
//! - `SentinelScanExtractor` owns prefix-sentinel scanning of the wide
//!   inhibition grid.
//! - `FixedOffsetExtractor` owns fixed-position extraction of the potency
//!   grid, including the join against the inhibition mapping.

use crate::errors::ExtractError;
use crate::sheet::SheetGrid;

mod fixed;
mod sentinel;

pub use fixed::FixedOffsetExtractor;
pub use sentinel::SentinelScanExtractor;

/// Shared interface for grid extraction strategies.
///
/// An extractor runs one full pass over a read-only grid and either produces
/// its complete output or fails; there is no partial output.
pub trait SheetExtractor {
    /// Value produced by a successful extraction pass.
    type Output;

    /// Run one full pass over `sheet`.
    fn extract(&self, sheet: &dyn SheetGrid) -> Result<Self::Output, ExtractError>;
}
