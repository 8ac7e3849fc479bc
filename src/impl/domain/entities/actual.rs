use super::component::Component;

/// One recorded actual outcome: the ground-truth value of a
/// (component, category, subcategory) cell for a single fiscal year.
#[derive(Debug, Clone, PartialEq)]
pub struct ActualRecord {
    pub component: Component,
    pub category: String,
    pub subcategory: String,
    pub fiscal_year: i32,
    pub actual_value: f64,
}
