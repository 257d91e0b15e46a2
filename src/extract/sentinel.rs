use tracing::debug;

use super::SheetExtractor;
use crate::constants::compound::ID_PREFIX;
use crate::errors::ExtractError;
use crate::record::InhibitionMap;
use crate::sheet::{CellValue, SheetGrid, is_blank_row};

/// Scans an arbitrary-width grid for compound-ID sentinel cells.
///
/// The inhibition sheet repeats `<unused> | CompoundID | Inhibition` column
/// groups across its width, so a single row can yield many matches. Every
/// text cell starting with the configured prefix is a match, and the cell
/// immediately to its right is that compound's percent inhibition. A match
/// without a usable right-hand neighbor violates the adjacency contract and
/// aborts the scan.
#[derive(Clone, Debug)]
pub struct SentinelScanExtractor {
    prefix: String,
}

impl SentinelScanExtractor {
    /// Create an extractor matching identifiers that start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn neighbor_value(
        &self,
        sheet: &dyn SheetGrid,
        row: &[CellValue],
        row_idx: usize,
        col: usize,
        identifier: &str,
    ) -> Result<f64, ExtractError> {
        let neighbor = row
            .get(col + 1)
            .filter(|cell| !cell.is_empty())
            .ok_or_else(|| ExtractError::FormatViolation {
                sheet_id: sheet.id().to_string(),
                row: row_idx + 1,
                details: format!(
                    "expected an inhibition value in the cell after '{identifier}', found none"
                ),
            })?;
        neighbor
            .as_number()
            .ok_or_else(|| ExtractError::FormatViolation {
                sheet_id: sheet.id().to_string(),
                row: row_idx + 1,
                details: format!(
                    "inhibition value for '{identifier}' is not numeric: {neighbor:?}"
                ),
            })
    }
}

impl Default for SentinelScanExtractor {
    fn default() -> Self {
        Self::new(ID_PREFIX)
    }
}

impl SheetExtractor for SentinelScanExtractor {
    type Output = InhibitionMap;

    fn extract(&self, sheet: &dyn SheetGrid) -> Result<InhibitionMap, ExtractError> {
        let mut inhibition = InhibitionMap::new();
        for row_idx in 0..sheet.len() {
            let row = sheet.row(row_idx);
            if is_blank_row(row) {
                continue;
            }
            for (col, cell) in row.iter().enumerate() {
                let Some(identifier) = cell
                    .as_text()
                    .filter(|text| text.starts_with(self.prefix.as_str()))
                else {
                    continue;
                };
                let value = self.neighbor_value(sheet, row, row_idx, col, identifier)?;
                // Duplicates are last-write-wins, matching the scan order.
                if inhibition.insert(identifier.to_string(), value).is_some() {
                    debug!(
                        "[assay:scan] duplicate compound '{}' at row {}; keeping latest value",
                        identifier,
                        row_idx + 1
                    );
                }
            }
        }
        debug!(
            "[assay:scan] sheet '{}' yielded {} inhibition entries",
            sheet.id(),
            inhibition.len()
        );
        Ok(inhibition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::InMemorySheet;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.into())
    }

    #[test]
    fn repeated_column_groups_all_match_within_one_row() {
        let sheet = InMemorySheet::new(
            "inhibition",
            vec![vec![
                text("x"),
                text("TCMDC-0001"),
                CellValue::Number(55.2),
                text("y"),
                text("TCMDC-0002"),
                CellValue::Number(10.0),
            ]],
        );
        let map = SentinelScanExtractor::default().extract(&sheet).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("TCMDC-0001"), Some(&55.2));
        assert_eq!(map.get("TCMDC-0002"), Some(&10.0));
    }

    #[test]
    fn blank_rows_and_non_matching_cells_are_skipped() {
        let sheet = InMemorySheet::new(
            "inhibition",
            vec![
                vec![CellValue::Empty, CellValue::Empty],
                vec![text("Compound"), text("Inhibition")],
                vec![text("label"), text("TCMDC-0003"), CellValue::Number(1.5)],
            ],
        );
        let map = SentinelScanExtractor::default().extract(&sheet).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("TCMDC-0003"), Some(&1.5));
    }

    #[test]
    fn later_duplicate_overwrites_earlier_entry() {
        let sheet = InMemorySheet::new(
            "inhibition",
            vec![
                vec![text("a"), text("TCMDC-0001"), CellValue::Number(1.0)],
                vec![text("b"), text("TCMDC-0001"), CellValue::Number(2.0)],
            ],
        );
        let map = SentinelScanExtractor::default().extract(&sheet).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("TCMDC-0001"), Some(&2.0));
    }

    #[test]
    fn missing_neighbor_is_a_format_violation_naming_the_identifier() {
        let sheet = InMemorySheet::new(
            "inhibition",
            vec![vec![text("x"), text("TCMDC-0009")]],
        );
        let err = SentinelScanExtractor::default()
            .extract(&sheet)
            .unwrap_err();
        match err {
            ExtractError::FormatViolation { row, details, .. } => {
                assert_eq!(row, 1);
                assert!(details.contains("TCMDC-0009"));
            }
            other => panic!("expected format violation, got {other:?}"),
        }
    }

    #[test]
    fn empty_neighbor_is_also_a_format_violation() {
        let sheet = InMemorySheet::new(
            "inhibition",
            vec![vec![text("x"), text("TCMDC-0009"), CellValue::Empty]],
        );
        let err = SentinelScanExtractor::default()
            .extract(&sheet)
            .unwrap_err();
        assert!(matches!(err, ExtractError::FormatViolation { .. }));
    }

    #[test]
    fn numeric_looking_text_neighbor_is_accepted() {
        let sheet = InMemorySheet::new(
            "inhibition",
            vec![vec![text("x"), text("TCMDC-0010"), text("42.5")]],
        );
        let map = SentinelScanExtractor::default().extract(&sheet).unwrap();
        assert_eq!(map.get("TCMDC-0010"), Some(&42.5));
    }

    #[test]
    fn grid_without_matches_yields_an_empty_mapping() {
        let sheet = InMemorySheet::new(
            "inhibition",
            vec![vec![text("nothing"), CellValue::Number(3.0)]],
        );
        let map = SentinelScanExtractor::default().extract(&sheet).unwrap();
        assert!(map.is_empty());
    }
}
