use super::component::Component;

/// An actual outcome expressed as a share of GDP.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledActualRow {
    pub component: Component,
    pub category: String,
    pub subcategory: String,
    pub fiscal_year: i32,
    pub actual_value: f64,
    /// GDP for the fiscal year; `None` when not recorded.
    pub gdp: Option<f64>,
    /// `actual_value / GDP * 100`; `None` when GDP is missing or zero.
    pub actuals_pct_gdp: Option<f64>,
}
