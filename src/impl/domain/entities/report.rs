use super::{
    component::Component, projection_error::ProjectionErrorRow, scaled_actual::ScaledActualRow,
    summary::SummaryRow,
};

/// The three output tables for one component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentReport {
    pub component: Component,
    pub projection_errors: Vec<ProjectionErrorRow>,
    pub summary_stats: Vec<SummaryRow>,
    pub actuals_pct_gdp: Vec<ScaledActualRow>,
}

/// Full pipeline output: one report per component, in fixed component order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionAccuracyReport {
    pub components: Vec<ComponentReport>,
}

impl ProjectionAccuracyReport {
    pub fn component(&self, component: Component) -> Option<&ComponentReport> {
        self.components.iter().find(|r| r.component == component)
    }
}
