use tracing::warn;

use crate::entities::Component;

/// Fixed, domain-meaningful orderings for category and subcategory values.
///
/// These orderings are a presentation contract: they keep output tables in
/// the order readers of the published figures expect. They carry no
/// correctness weight beyond determinism.

const REVENUE_ORDER: &[&str] = &[
    "Total",
    "Individual Income Taxes",
    "Payroll Taxes",
    "Corporate Income Taxes",
    "Customs Duties",
    "Excise Taxes",
    "Estate and Gift Taxes",
    "Miscellaneous Receipts",
];

const OUTLAY_CATEGORY_ORDER: &[&str] = &["Total", "Mandatory", "Discretionary", "Net Interest"];

// "Fannie Freddie" appears here because it exists in the inputs and must sort
// deterministically mid-pipeline; it is filtered before any final output.
const OUTLAY_SUBCATEGORY_ORDER: &[&str] = &[
    "Total",
    "Total Mandatory",
    "Social Security",
    "Medicare",
    "Medicaid",
    "Fannie Freddie",
    "Other Mandatory",
    "Total Discretionary",
    "Defense Discretionary",
    "Nondefense Discretionary",
    "Net Interest",
];

const TOTAL_ONLY_ORDER: &[&str] = &["Total"];

pub(crate) fn category_order(component: Component) -> &'static [&'static str] {
    match component {
        Component::Revenue => REVENUE_ORDER,
        Component::Outlay => OUTLAY_CATEGORY_ORDER,
        Component::Deficit | Component::Debt => TOTAL_ONLY_ORDER,
    }
}

pub(crate) fn subcategory_order(component: Component) -> &'static [&'static str] {
    match component {
        Component::Revenue => REVENUE_ORDER,
        Component::Outlay => OUTLAY_SUBCATEGORY_ORDER,
        Component::Deficit | Component::Debt => TOTAL_ONLY_ORDER,
    }
}

/// Sort position of a category/subcategory value. Values in the fixed
/// ordering compare by position; values outside it sort after every known
/// value, lexically among themselves, and are logged once seen.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum CategoryRank {
    Known(usize),
    Unknown(String),
}

pub(crate) fn category_rank(component: Component, value: &str) -> CategoryRank {
    rank(category_order(component), component, "category", value)
}

pub(crate) fn subcategory_rank(component: Component, value: &str) -> CategoryRank {
    rank(subcategory_order(component), component, "subcategory", value)
}

fn rank(order: &[&str], component: Component, level: &str, value: &str) -> CategoryRank {
    match order.iter().position(|v| *v == value) {
        Some(i) => CategoryRank::Known(i),
        None => {
            warn!(
                component = %component,
                level,
                value,
                "value outside the fixed ordering; sorting after known values"
            );
            CategoryRank::Unknown(value.to_string())
        }
    }
}
