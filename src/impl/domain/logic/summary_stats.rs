use std::collections::BTreeMap;

use super::{
    category_order::{category_rank, subcategory_rank, CategoryRank},
    utils,
};
use crate::entities::{Component, ProjectionErrorRow, SummaryRow};

/// Quantile pair whose difference captures the central two-thirds of an
/// error distribution.
const SPREAD_UPPER_QUANTILE: f64 = 5.0 / 6.0;
const SPREAD_LOWER_QUANTILE: f64 = 1.0 / 6.0;

/// Groups disaggregated relative errors by (category, subcategory,
/// projection year number) and computes the four summary statistics per
/// group: signed mean, mean absolute, RMSE, and two-thirds spread.
///
/// Only observed groups are emitted, ordered by the fixed category
/// orderings. Undefined relative errors are skipped within a group rather
/// than poisoning it; the projection-year range still counts those rows.
/// Revenue is defensively restricted to Winter-baseline rows, matching the
/// baseline selection rule.
pub(crate) fn calc_summary_stats(
    errors: &[ProjectionErrorRow],
    component: Component,
) -> Vec<SummaryRow> {
    #[derive(PartialEq, Eq, PartialOrd, Ord)]
    struct GroupKey {
        category: CategoryRank,
        subcategory: CategoryRank,
        projected_year_number: i32,
    }

    // BTreeMap keyed on ranks yields groups already in output order.
    let mut groups: BTreeMap<GroupKey, Vec<&ProjectionErrorRow>> = BTreeMap::new();
    for row in errors {
        if component == Component::Revenue && !row.fact.winter_flag {
            continue;
        }
        groups
            .entry(GroupKey {
                category: category_rank(component, &row.fact.category),
                subcategory: subcategory_rank(component, &row.fact.subcategory),
                projected_year_number: row.fact.projected_year_number,
            })
            .or_default()
            .push(row);
    }

    groups
        .into_iter()
        .map(|(key, rows)| {
            let first = rows[0].fact.projected_fiscal_year;
            let (min_year, max_year) = rows.iter().fold((first, first), |(lo, hi), r| {
                let y = r.fact.projected_fiscal_year;
                (lo.min(y), hi.max(y))
            });

            let mut values: Vec<f64> = rows.iter().filter_map(|r| r.relative_error).collect();
            values.sort_by(|a, b| a.total_cmp(b));

            let two_thirds_spread = utils::quantile_linear(&values, SPREAD_UPPER_QUANTILE)
                .zip(utils::quantile_linear(&values, SPREAD_LOWER_QUANTILE))
                .map(|(upper, lower)| upper - lower);

            SummaryRow {
                component,
                category: rows[0].fact.category.clone(),
                subcategory: rows[0].fact.subcategory.clone(),
                projected_year_number: key.projected_year_number,
                projection_year_range: format!("{min_year}-{max_year}"),
                number_of_projections: values.len(),
                average_error: utils::mean(&values),
                average_absolute_error: utils::mean(
                    &values.iter().map(|v| v.abs()).collect::<Vec<_>>(),
                ),
                rmse: utils::root_mean_square(&values),
                two_thirds_spread,
            }
        })
        .collect()
}
