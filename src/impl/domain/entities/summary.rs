use super::component::Component;

/// Summary statistics of relative projection errors for one
/// (component, category, subcategory, projection-year-number) group.
///
/// Statistics are computed over the defined relative errors only; a group
/// whose observations are all undefined carries `None` statistics and a zero
/// count rather than poisoning the table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub component: Component,
    pub category: String,
    pub subcategory: String,
    pub projected_year_number: i32,
    /// "min-max" of the fiscal years contributing to the group.
    pub projection_year_range: String,
    pub number_of_projections: usize,
    pub average_error: Option<f64>,
    pub average_absolute_error: Option<f64>,
    pub rmse: Option<f64>,
    /// 5/6-quantile minus 1/6-quantile of the group's errors.
    pub two_thirds_spread: Option<f64>,
}
