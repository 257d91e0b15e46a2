//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use tracing::debug;

use crate::errors::ExtractError;
use crate::record::CompoundRecord;

/// Write `records` as CSV to `path`, creating or truncating the file.
pub fn write_records(
    records: &[CompoundRecord],
    path: impl AsRef<Path>,
) -> Result<(), ExtractError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_records_to(records, file)?;
    debug!(
        "[assay:csv] wrote {} records to '{}'",
        records.len(),
        path.display()
    );
    Ok(())
}

/// Write `records` as CSV to any `Write` destination.
///
/// Output is one header line of field names, then one comma-joined line per
/// record, each terminated by a single newline. Quoting is disabled: the
/// plain comma-joined contract means embedded commas pass through verbatim.
/// The header is written even for an empty record sequence.
pub fn write_records_to<W: Write>(
    records: &[CompoundRecord],
    destination: W,
) -> Result<(), ExtractError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(destination);
    writer.write_record(CompoundRecord::FIELD_NAMES)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Measurement;

    fn record(id: &str) -> CompoundRecord {
        CompoundRecord {
            id: id.into(),
            pct_inhibition: 99.9,
            pf_gametocyte_ic50_avg: 1.0,
            pf_gametocyte_ic50_sd: 0.1,
            hepg2_cytotoxicity_ic50: Measurement::Numeric(2.0),
            hepg2_pf_ic50_ratio: Measurement::Numeric(2.0),
            pc_asexual_ic50: 3.0,
        }
    }

    fn written(records: &[CompoundRecord]) -> String {
        let mut buffer = Vec::new();
        write_records_to(records, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn three_records_produce_header_plus_three_exact_lines() {
        let output = written(&[
            record("TCMDC-123456"),
            record("TCMDC-123457"),
            record("TCMDC-123458"),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "id,pct_inhibition,pf_gametocyte_ic50_avg,pf_gametocyte_ic50_sd,\
             hepg2_cytotoxicity_ic50,hepg2_pf_ic50_ratio,pc_asexual_ic50"
        );
        assert_eq!(lines[1], "TCMDC-123456,99.9,1.0,0.1,2.0,2.0,3.0");
        assert_eq!(lines[2], "TCMDC-123457,99.9,1.0,0.1,2.0,2.0,3.0");
        assert_eq!(lines[3], "TCMDC-123458,99.9,1.0,0.1,2.0,2.0,3.0");
        assert!(output.ends_with("3.0\n"));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn bounded_annotations_are_written_unquoted() {
        let mut with_bound = record("TCMDC-0001");
        with_bound.hepg2_cytotoxicity_ic50 = Measurement::Bounded(">25".into());
        let output = written(&[with_bound]);
        assert!(output.contains(",>25,"));
        assert!(!output.contains('"'));
    }

    #[test]
    fn embedded_commas_pass_through_verbatim() {
        let mut with_comma = record("TCMDC-0002");
        with_comma.hepg2_pf_ic50_ratio = Measurement::Bounded("1,5".into());
        let output = written(&[with_comma]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "TCMDC-0002,99.9,1.0,0.1,2.0,1,5,3.0");
    }

    #[test]
    fn empty_sequence_still_writes_the_header_line() {
        let output = written(&[]);
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("id,"));
        assert!(output.ends_with('\n'));
    }
}
