use crate::entities::{BaselineRecord, Component};

/// Filters baseline projections down to the policy-relevant subset for a
/// component: the matching component rows flagged with that component's
/// authoritative release season (Winter for revenue, Spring otherwise).
///
/// An empty result is not an error; downstream joins simply produce no rows.
pub(crate) fn select_baselines(
    baselines: &[BaselineRecord],
    component: Component,
) -> Vec<&BaselineRecord> {
    let season = component.baseline_season();
    baselines
        .iter()
        .filter(|b| b.component == component && b.season_flag(season))
        .collect()
}
