/// Constants used by compound identifier recognition.
pub mod compound {
    /// Prefix that marks a text cell as a compound identifier.
    pub const ID_PREFIX: &str = "TCMDC";
}

/// Fixed column layout of the potency (IC50) sheet.
///
/// The sheet carries exactly two header rows, then one data row per
/// compound. Columns 1, 2, 5, and 7 are present in the source but unused.
pub mod potency {
    /// Number of leading header rows skipped before data rows.
    pub const HEADER_ROWS: usize = 2;
    /// Column holding the compound identifier.
    pub const COL_ID: usize = 0;
    /// Column holding the Pf gametocyte IC50 replicate average.
    pub const COL_GAMETOCYTE_AVG: usize = 3;
    /// Column holding the Pf gametocyte IC50 replicate standard deviation.
    pub const COL_GAMETOCYTE_SD: usize = 4;
    /// Column holding the HepG2 cytotoxicity IC50.
    pub const COL_CYTOTOXICITY: usize = 6;
    /// Column holding the HepG2 / Pf IC50 ratio.
    pub const COL_RATIO: usize = 8;
    /// Column holding the PC asexual-stage IC50.
    pub const COL_ASEXUAL: usize = 9;
    /// Minimum number of columns a data row must provide.
    pub const MIN_COLUMNS: usize = COL_ASEXUAL + 1;
}

/// Default input and output locations used by the command line entry point.
pub mod paths {
    /// Default path of the inhibition workbook.
    pub const INHIBITION: &str = "data/inhibition.xlsx";
    /// Default path of the potency (IC50) workbook.
    pub const POTENCY: &str = "data/ic50.xlsx";
    /// Default path of the CSV output file.
    pub const OUTPUT: &str = "output.csv";
}
