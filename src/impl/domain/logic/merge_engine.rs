use std::collections::HashMap;

use tracing::debug;

use super::{
    baseline_selector::select_baselines,
    category_order::{category_rank, subcategory_rank},
    legislative_changes::{extract_legislative_changes, LegislativeChange},
};
use crate::entities::{ActualRecord, BaselineRecord, Component, GdpRecord, InputTables, MergedFact};

/// Known data-quality carve-out; never reaches final output.
pub(crate) const EXCLUDED_SUBCATEGORY: &str = "Fannie Freddie";

/// Joins baselines, actuals, GDP, and legislative changes into the
/// denormalized fact table for one component.
///
/// Step order matters for correctness:
/// 1. baselines filtered to the component's authoritative season,
/// 2. inner-joined to actuals (unscoreable future years drop),
/// 3. left-joined to GDP (missing GDP is permitted),
/// 4. legislative changes attributed to every vintage they strictly
///    post-date, summed per (category, subcategory, year, year-number),
/// 5. debt only: sign-inverted cumulative effects within each vintage,
/// 6. aggregated changes inner-joined back (facts with no attributable
///    legislative change drop),
/// 7. carve-out and backcast rows filtered, fixed-order sort applied.
pub(crate) fn merge_data(tables: &InputTables, component: Component) -> Vec<MergedFact> {
    let selected = select_baselines(&tables.baselines, component);
    let bl_act = join_baselines_actuals_gdp(&selected, &tables.actuals, &tables.gdp, component);
    let leg_changes = extract_legislative_changes(&tables.changes, component);
    let mut aggregated = attribute_legislative_changes(&bl_act, &leg_changes);
    if component == Component::Debt {
        aggregated = apply_debt_cumulation(aggregated);
    }
    debug!(
        component = %component,
        baselines = selected.len(),
        scoreable = bl_act.len(),
        legislative_groups = aggregated.len(),
        "merged projection data"
    );
    let mut facts = attach_legislative_changes(bl_act, &aggregated, component);
    facts.retain(|f| f.subcategory != EXCLUDED_SUBCATEGORY && f.projected_year_number != 0);
    sort_facts(&mut facts, component);
    facts
}

/// A baseline row joined to its actual outcome and (where recorded) GDP.
struct BaselineActual<'a> {
    baseline: &'a BaselineRecord,
    actual_value: f64,
    gdp: Option<f64>,
}

/// Aggregation key for attributed legislative changes. The year number comes
/// from the baseline side of the join, so changes with no matching scoreable
/// vintage never form a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VintageKey {
    category: String,
    subcategory: String,
    projected_fiscal_year: i32,
    projected_year_number: i32,
}

impl VintageKey {
    fn of(baseline: &BaselineRecord) -> Self {
        VintageKey {
            category: baseline.category.clone(),
            subcategory: baseline.subcategory.clone(),
            projected_fiscal_year: baseline.projected_fiscal_year,
            projected_year_number: baseline.projected_year_number,
        }
    }

    /// First fiscal year projected by the vintage this row belongs to.
    fn baseline_year(&self) -> i32 {
        self.projected_fiscal_year - self.projected_year_number + 1
    }
}

fn join_baselines_actuals_gdp<'a>(
    selected: &[&'a BaselineRecord],
    actuals: &[ActualRecord],
    gdp: &[GdpRecord],
    component: Component,
) -> Vec<BaselineActual<'a>> {
    let actuals_by_key: HashMap<(&str, &str, i32), f64> = actuals
        .iter()
        .filter(|a| a.component == component)
        .map(|a| {
            (
                (a.category.as_str(), a.subcategory.as_str(), a.fiscal_year),
                a.actual_value,
            )
        })
        .collect();
    let gdp_by_year: HashMap<i32, f64> = gdp.iter().map(|g| (g.fiscal_year, g.gdp)).collect();

    selected
        .iter()
        .copied()
        .filter_map(|b| {
            let actual_value = actuals_by_key.get(&(
                b.category.as_str(),
                b.subcategory.as_str(),
                b.projected_fiscal_year,
            ))?;
            Some(BaselineActual {
                baseline: b,
                actual_value: *actual_value,
                gdp: gdp_by_year.get(&b.projected_fiscal_year).copied(),
            })
        })
        .collect()
}

/// Attributes each legislative change to every scoreable vintage row it
/// strictly post-dates, summing the effects of separate acts touching the
/// same vintage and projected year.
fn attribute_legislative_changes(
    bl_act: &[BaselineActual<'_>],
    leg_changes: &[LegislativeChange],
) -> HashMap<VintageKey, f64> {
    let mut vintages_by_target: HashMap<(&str, &str, i32), Vec<&BaselineRecord>> = HashMap::new();
    for row in bl_act {
        vintages_by_target
            .entry((
                row.baseline.category.as_str(),
                row.baseline.subcategory.as_str(),
                row.baseline.projected_fiscal_year,
            ))
            .or_default()
            .push(row.baseline);
    }

    let mut aggregated: HashMap<VintageKey, f64> = HashMap::new();
    for change in leg_changes {
        let Some(vintages) = vintages_by_target.get(&(
            change.category.as_str(),
            change.subcategory.as_str(),
            change.projected_fiscal_year,
        )) else {
            continue;
        };
        for baseline in vintages {
            // A change modifies a vintage only if it strictly post-dates it.
            if change.changes_baseline_date > baseline.baseline_date {
                *aggregated.entry(VintageKey::of(baseline)).or_insert(0.0) += change.value;
            }
        }
    }
    aggregated
}

/// Debt-specific transform: legislation that reduces the deficit shifts debt
/// the opposite way, permanently. Each vintage-year value becomes the
/// sign-inverted running sum of that vintage's per-year deficit effects up to
/// and including its own year number.
///
/// Implemented as a single prefix-sum pass over rows sorted by
/// (category, subcategory, vintage, year number).
fn apply_debt_cumulation(aggregated: HashMap<VintageKey, f64>) -> HashMap<VintageKey, f64> {
    let mut entries: Vec<(VintageKey, f64)> =
        aggregated.into_iter().map(|(k, v)| (k, -v)).collect();
    entries.sort_by(|(a, _), (b, _)| {
        (
            a.category.as_str(),
            a.subcategory.as_str(),
            a.baseline_year(),
            a.projected_year_number,
        )
            .cmp(&(
                b.category.as_str(),
                b.subcategory.as_str(),
                b.baseline_year(),
                b.projected_year_number,
            ))
    });

    let mut cumulated = HashMap::with_capacity(entries.len());
    let mut current_vintage: Option<(String, String, i32)> = None;
    let mut running_total = 0.0;
    for (key, value) in entries {
        let vintage = (
            key.category.clone(),
            key.subcategory.clone(),
            key.baseline_year(),
        );
        if current_vintage.as_ref() != Some(&vintage) {
            current_vintage = Some(vintage);
            running_total = 0.0;
        }
        running_total += value;
        cumulated.insert(key, running_total);
    }
    cumulated
}

fn attach_legislative_changes(
    bl_act: Vec<BaselineActual<'_>>,
    aggregated: &HashMap<VintageKey, f64>,
    component: Component,
) -> Vec<MergedFact> {
    bl_act
        .into_iter()
        .filter_map(|row| {
            let legislative_change = *aggregated.get(&VintageKey::of(row.baseline))?;
            let b = row.baseline;
            Some(MergedFact {
                component,
                category: b.category.clone(),
                subcategory: b.subcategory.clone(),
                projected_fiscal_year: b.projected_fiscal_year,
                projected_year_number: b.projected_year_number,
                winter_flag: b.winter_flag,
                spring_flag: b.spring_flag,
                baseline_date: b.baseline_date,
                value: b.value,
                actual_value: row.actual_value,
                gdp: row.gdp,
                legislative_change,
            })
        })
        .collect()
}

/// Stable sort by the fixed category/subcategory orderings, then year number.
/// Deterministic so reruns diff cleanly.
fn sort_facts(facts: &mut [MergedFact], component: Component) {
    facts.sort_by(|a, b| {
        (
            category_rank(component, &a.category),
            subcategory_rank(component, &a.subcategory),
            a.projected_year_number,
        )
            .cmp(&(
                category_rank(component, &b.category),
                subcategory_rank(component, &b.subcategory),
                b.projected_year_number,
            ))
    });
}
