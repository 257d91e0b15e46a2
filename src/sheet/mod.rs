//! Sheet grid abstraction shared by both extraction strategies.
//!
//! Ownership model:
//! - `SheetGrid` is the extractor-facing, read-only handle to a grid.
//! - `InMemorySheet` owns cell storage for tests and loaded workbooks.
//! - The workbook loader converts calamine cells into `CellValue` once, so
//!   extractors never see backend-specific types.

use crate::types::SheetId;

/// Workbook-backed sheet loading.
pub mod workbook;
pub use workbook::load_xlsx;

/// A single spreadsheet cell as seen by extractors.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Empty or absent cell.
    Empty,
    /// Textual cell content.
    Text(String),
    /// Numeric cell content.
    Number(f64),
}

impl CellValue {
    /// Whether the cell is empty/absent.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Textual view of the cell, when it holds text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric view of the cell: a number, or text that parses as one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(text) => text.trim().parse().ok(),
            CellValue::Empty => None,
        }
    }
}

/// Whether every cell in `row` is empty/absent.
pub fn is_blank_row(row: &[CellValue]) -> bool {
    row.iter().all(CellValue::is_empty)
}

/// Format-agnostic, read-only handle to a two-dimensional grid of cells.
///
/// `row` indices are dense: `0..len()`. Rows within one sheet loaded from a
/// workbook have equal length; hand-built test sheets may be ragged, which
/// is how "row too short" layouts are represented.
pub trait SheetGrid {
    /// Diagnostic label used in error messages and logs.
    fn id(&self) -> &str;
    /// Number of rows in the grid.
    fn len(&self) -> usize;
    /// Whether the grid has no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Borrow the row at `idx`.
    fn row(&self, idx: usize) -> &[CellValue];
}

/// In-memory sheet used for tests and as the loaded form of a workbook.
#[derive(Clone, Debug)]
pub struct InMemorySheet {
    id: SheetId,
    rows: Vec<Vec<CellValue>>,
}

impl InMemorySheet {
    /// Create a sheet from prebuilt rows.
    pub fn new(id: impl Into<SheetId>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            id: id.into(),
            rows,
        }
    }
}

impl SheetGrid for InMemorySheet {
    fn id(&self) -> &str {
        &self.id
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, idx: usize) -> &[CellValue] {
        &self.rows[idx]
    }
}
