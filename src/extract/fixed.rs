use tracing::debug;

use super::SheetExtractor;
use crate::constants::{compound::ID_PREFIX, potency};
use crate::errors::ExtractError;
use crate::record::{CompoundRecord, InhibitionMap, Measurement};
use crate::sheet::{CellValue, SheetGrid, is_blank_row};

/// Extracts potency rows by fixed column position and joins each against a
/// previously built inhibition mapping.
///
/// The potency sheet carries exactly two header rows, then one data row per
/// compound. Rows whose first cell is not a prefixed text identifier are
/// stray or decorative content and are skipped; rows that match but cannot
/// be fully extracted or joined abort the whole pass.
pub struct FixedOffsetExtractor<'a> {
    prefix: String,
    header_rows: usize,
    inhibition: &'a InhibitionMap,
}

impl<'a> FixedOffsetExtractor<'a> {
    /// Create an extractor joining against `inhibition`.
    pub fn new(inhibition: &'a InhibitionMap) -> Self {
        Self {
            prefix: ID_PREFIX.to_string(),
            header_rows: potency::HEADER_ROWS,
            inhibition,
        }
    }

    /// Override the identifier prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn numeric_cell(
        &self,
        sheet: &dyn SheetGrid,
        row: &[CellValue],
        row_idx: usize,
        col: usize,
        identifier: &str,
    ) -> Result<f64, ExtractError> {
        row[col]
            .as_number()
            .ok_or_else(|| ExtractError::FormatViolation {
                sheet_id: sheet.id().to_string(),
                row: row_idx + 1,
                details: format!(
                    "column {col} for '{identifier}' must be numeric, found {:?}",
                    row[col]
                ),
            })
    }

    fn measurement_cell(
        &self,
        sheet: &dyn SheetGrid,
        row: &[CellValue],
        row_idx: usize,
        col: usize,
        identifier: &str,
    ) -> Result<Measurement, ExtractError> {
        match &row[col] {
            CellValue::Number(value) => Ok(Measurement::Numeric(*value)),
            CellValue::Text(text) => Ok(Measurement::Bounded(text.clone())),
            CellValue::Empty => Err(ExtractError::FormatViolation {
                sheet_id: sheet.id().to_string(),
                row: row_idx + 1,
                details: format!("column {col} for '{identifier}' is empty"),
            }),
        }
    }
}

impl SheetExtractor for FixedOffsetExtractor<'_> {
    type Output = Vec<CompoundRecord>;

    fn extract(&self, sheet: &dyn SheetGrid) -> Result<Vec<CompoundRecord>, ExtractError> {
        let mut records = Vec::new();
        for row_idx in self.header_rows..sheet.len() {
            let row = sheet.row(row_idx);
            if is_blank_row(row) {
                continue;
            }
            // Only a text first cell can carry an identifier. Numeric or
            // empty first cells mark stray content, never extraction targets.
            let Some(identifier) = row
                .first()
                .and_then(CellValue::as_text)
                .filter(|text| text.starts_with(self.prefix.as_str()))
            else {
                continue;
            };
            if row.len() < potency::MIN_COLUMNS {
                return Err(ExtractError::FormatViolation {
                    sheet_id: sheet.id().to_string(),
                    row: row_idx + 1,
                    details: format!(
                        "row for '{identifier}' has {} columns, expected at least {}",
                        row.len(),
                        potency::MIN_COLUMNS
                    ),
                });
            }
            let pct_inhibition =
                *self
                    .inhibition
                    .get(identifier)
                    .ok_or_else(|| ExtractError::JoinFailure {
                        identifier: identifier.to_string(),
                    })?;
            records.push(CompoundRecord {
                id: identifier.to_string(),
                pct_inhibition,
                pf_gametocyte_ic50_avg: self.numeric_cell(
                    sheet,
                    row,
                    row_idx,
                    potency::COL_GAMETOCYTE_AVG,
                    identifier,
                )?,
                pf_gametocyte_ic50_sd: self.numeric_cell(
                    sheet,
                    row,
                    row_idx,
                    potency::COL_GAMETOCYTE_SD,
                    identifier,
                )?,
                hepg2_cytotoxicity_ic50: self.measurement_cell(
                    sheet,
                    row,
                    row_idx,
                    potency::COL_CYTOTOXICITY,
                    identifier,
                )?,
                hepg2_pf_ic50_ratio: self.measurement_cell(
                    sheet,
                    row,
                    row_idx,
                    potency::COL_RATIO,
                    identifier,
                )?,
                pc_asexual_ic50: self.numeric_cell(
                    sheet,
                    row,
                    row_idx,
                    potency::COL_ASEXUAL,
                    identifier,
                )?,
            });
        }
        debug!(
            "[assay:potency] sheet '{}' yielded {} joined records",
            sheet.id(),
            records.len()
        );
        Ok(records)
    }
}
