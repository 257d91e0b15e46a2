use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use tracing::debug;

use super::{CellValue, InMemorySheet};
use crate::errors::ExtractError;

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(text) => CellValue::Text(text.clone()),
            Data::Float(value) => CellValue::Number(*value),
            Data::Int(value) => CellValue::Number(*value as f64),
            Data::Bool(value) => CellValue::Text(value.to_string()),
            Data::DateTime(value) => CellValue::Number(value.as_f64()),
            Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
        }
    }
}

/// Load the first worksheet of an XLSX workbook into an in-memory grid.
///
/// The whole sheet is materialized up front; the handle is released before
/// this returns, so extractors only ever touch owned cells.
pub fn load_xlsx(path: impl AsRef<Path>) -> Result<InMemorySheet, ExtractError> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|source| ExtractError::Workbook {
            path: path.display().to_string(),
            source,
        })?;
    let sheet_name = workbook.sheet_names().first().cloned().ok_or_else(|| {
        ExtractError::MissingWorksheet {
            path: path.display().to_string(),
        }
    })?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| ExtractError::Workbook {
            path: path.display().to_string(),
            source,
        })?;
    let rows: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect();
    debug!(
        "[assay:sheet] loaded '{}' sheet '{}' ({} rows)",
        path.display(),
        sheet_name,
        rows.len()
    );
    Ok(InMemorySheet::new(
        format!("{}#{}", path.display(), sheet_name),
        rows,
    ))
}
