use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::types::CompoundId;

/// Mapping from compound identifier to percent inhibition.
///
/// Built once by the sentinel scan, read immutably by the potency join, then
/// discarded. Never persisted.
pub type InhibitionMap = HashMap<CompoundId, f64>;

/// A potency or toxicity measurement that is either numeric or a bounded
/// annotation such as `>25`.
///
/// The source sheet mixes both in the same columns; keeping the distinction
/// explicit avoids smuggling annotations through as fake numbers.
#[derive(Clone, Debug, PartialEq)]
pub enum Measurement {
    /// An exact numeric measurement.
    Numeric(f64),
    /// A bounded annotation reported in place of a number.
    Bounded(String),
}

impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Measurement::Numeric(value) => serializer.serialize_f64(*value),
            Measurement::Bounded(text) => serializer.serialize_str(text),
        }
    }
}

/// One row of the final joined output.
///
/// Field declaration order is the output column order. Records are built by
/// the potency extractor in source-row order and never mutated afterward.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompoundRecord {
    /// Compound identifier, always starting with the configured prefix.
    pub id: CompoundId,
    /// Percent inhibition joined in from the inhibition mapping.
    pub pct_inhibition: f64,
    /// Pf gametocyte IC50 replicate average.
    pub pf_gametocyte_ic50_avg: f64,
    /// Pf gametocyte IC50 replicate standard deviation.
    pub pf_gametocyte_ic50_sd: f64,
    /// HepG2 cytotoxicity IC50; may be a bounded annotation.
    pub hepg2_cytotoxicity_ic50: Measurement,
    /// HepG2 / Pf IC50 ratio; may be a bounded annotation.
    pub hepg2_pf_ic50_ratio: Measurement,
    /// PC asexual-stage IC50.
    pub pc_asexual_ic50: f64,
}

impl CompoundRecord {
    /// Output column names, in declared field order.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "id",
        "pct_inhibition",
        "pf_gametocyte_ic50_avg",
        "pf_gametocyte_ic50_sd",
        "hepg2_cytotoxicity_ic50",
        "hepg2_pf_ic50_ratio",
        "pc_asexual_ic50",
    ];
}
