use std::collections::HashMap;

use super::merge_engine::EXCLUDED_SUBCATEGORY;
use crate::entities::{ActualRecord, Component, GdpRecord, ScaledActualRow};

/// Earliest fiscal year carried in the scaled-actuals tables.
pub(crate) const EARLIEST_SCALED_FISCAL_YEAR: i32 = 1993;

/// The defense/nondefense discretionary split does not exist in the data
/// before 1998; earlier rows for those subcategories are withheld rather
/// than zero-filled.
pub(crate) const EARLIEST_DISCRETIONARY_SPLIT_YEAR: i32 = 1998;

const SPLIT_DISCRETIONARY_SUBCATEGORIES: [&str; 2] =
    ["Defense Discretionary", "Nondefense Discretionary"];

/// Year cutoffs applied by [`scale_actuals`]. The defaults match the
/// published data-availability window.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScaleOptions {
    pub(crate) min_fiscal_year: i32,
    pub(crate) min_split_discretionary_year: i32,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            min_fiscal_year: EARLIEST_SCALED_FISCAL_YEAR,
            min_split_discretionary_year: EARLIEST_DISCRETIONARY_SPLIT_YEAR,
        }
    }
}

/// Expresses a component's actual outcomes as a share of GDP.
///
/// Left-joins GDP by fiscal year (a missing or zero GDP leaves the share
/// undefined, not an error), drops the "Fannie Freddie" carve-out, and
/// applies the data-availability cutoffs.
pub(crate) fn scale_actuals(
    actuals: &[ActualRecord],
    gdp: &[GdpRecord],
    component: Component,
) -> Vec<ScaledActualRow> {
    scale_actuals_with(actuals, gdp, component, ScaleOptions::default())
}

pub(crate) fn scale_actuals_with(
    actuals: &[ActualRecord],
    gdp: &[GdpRecord],
    component: Component,
    options: ScaleOptions,
) -> Vec<ScaledActualRow> {
    let gdp_by_year: HashMap<i32, f64> = gdp.iter().map(|g| (g.fiscal_year, g.gdp)).collect();

    actuals
        .iter()
        .filter(|a| a.component == component)
        .filter(|a| a.subcategory != EXCLUDED_SUBCATEGORY)
        .filter(|a| a.fiscal_year >= options.min_fiscal_year)
        .filter(|a| {
            !SPLIT_DISCRETIONARY_SUBCATEGORIES.contains(&a.subcategory.as_str())
                || a.fiscal_year >= options.min_split_discretionary_year
        })
        .map(|a| {
            let gdp = gdp_by_year.get(&a.fiscal_year).copied();
            ScaledActualRow {
                component: a.component,
                category: a.category.clone(),
                subcategory: a.subcategory.clone(),
                fiscal_year: a.fiscal_year,
                actual_value: a.actual_value,
                gdp,
                actuals_pct_gdp: gdp
                    .filter(|g| *g != 0.0)
                    .map(|g| a.actual_value / g * 100.0),
            }
        })
        .collect()
}
