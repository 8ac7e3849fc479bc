use chrono::NaiveDate;

use super::component::Component;

/// One scoreable fact row out of the merge engine: a baseline projection
/// joined to its actual outcome, GDP (where recorded), and the aggregated
/// legislative change attributed to the vintage.
///
/// For debt, `legislative_change` is the sign-inverted cumulative deficit
/// effect within the vintage; for all other components it is the single-year
/// sum of legislative effects.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedFact {
    pub component: Component,
    pub category: String,
    pub subcategory: String,
    pub projected_fiscal_year: i32,
    pub projected_year_number: i32,
    pub winter_flag: bool,
    pub spring_flag: bool,
    pub baseline_date: NaiveDate,
    /// The baseline's projected value.
    pub value: f64,
    pub actual_value: f64,
    /// GDP for the projected fiscal year; `None` when not yet recorded.
    pub gdp: Option<f64>,
    pub legislative_change: f64,
}
