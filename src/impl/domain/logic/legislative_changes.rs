use chrono::NaiveDate;

use crate::entities::{ChangeCategory, ChangeRecord, Component};

/// A legislative change relevant to one component, detached from its source
/// component tag. For debt the source rows are deficit changes (debt being
/// cumulative deficits, there are no native debt change records).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LegislativeChange {
    pub(crate) category: String,
    pub(crate) subcategory: String,
    pub(crate) projected_fiscal_year: i32,
    pub(crate) changes_baseline_date: NaiveDate,
    pub(crate) value: f64,
}

/// Extracts the legislative changes for a component, excluding economic and
/// technical revisions.
pub(crate) fn extract_legislative_changes(
    changes: &[ChangeRecord],
    component: Component,
) -> Vec<LegislativeChange> {
    let source_component = match component {
        Component::Debt => Component::Deficit,
        other => other,
    };
    changes
        .iter()
        .filter(|c| {
            c.component == source_component && c.change_category == ChangeCategory::Legislative
        })
        .map(|c| LegislativeChange {
            category: c.category.clone(),
            subcategory: c.subcategory.clone(),
            projected_fiscal_year: c.projected_fiscal_year,
            changes_baseline_date: c.changes_baseline_date,
            value: c.value,
        })
        .collect()
}
