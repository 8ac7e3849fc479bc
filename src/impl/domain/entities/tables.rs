use super::{
    actual::ActualRecord, baseline::BaselineRecord, change::ChangeRecord, gdp::GdpRecord,
};

/// The four input tables, read once per run. Every derived table is a pure
/// function of these.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTables {
    pub actuals: Vec<ActualRecord>,
    pub baselines: Vec<BaselineRecord>,
    pub changes: Vec<ChangeRecord>,
    pub gdp: Vec<GdpRecord>,
}
