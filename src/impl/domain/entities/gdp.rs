/// Actual GDP for one fiscal year, used as the denominator for
/// percent-of-GDP scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct GdpRecord {
    pub fiscal_year: i32,
    pub gdp: f64,
}
