use super::merged_fact::MergedFact;

/// A merged fact row with its derived error metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionErrorRow {
    pub fact: MergedFact,
    /// Baseline value plus attributed legislative change.
    pub adjusted_projection: f64,
    /// Adjusted projection minus actual, sign-inverted for deficit.
    pub projection_error: f64,
    /// Error relative to the component's denominator (percent of GDP for
    /// deficit/debt, percent of actual for outlay/revenue). `None` when the
    /// denominator is missing or zero.
    pub relative_error: Option<f64>,
}
