use std::str::FromStr;

use chrono::NaiveDate;

use super::component::Component;
use crate::errors::Error;

/// Why a baseline projection was revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCategory {
    /// Estimated effect of subsequent legislation. The only category that
    /// feeds projection-error analysis.
    Legislative,
    Economic,
    Technical,
}

impl FromStr for ChangeCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Legislative" => Ok(ChangeCategory::Legislative),
            "Economic" => Ok(ChangeCategory::Economic),
            "Technical" => Ok(ChangeCategory::Technical),
            other => Err(Error::InvalidChangeCategory {
                value: other.to_string(),
            }),
        }
    }
}

/// One revision applied to a baseline vintage's projection of a single
/// fiscal year. `changes_baseline_date` identifies the vintage the revision
/// was published against.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    pub component: Component,
    pub category: String,
    pub subcategory: String,
    pub projected_fiscal_year: i32,
    pub change_category: ChangeCategory,
    pub changes_baseline_date: NaiveDate,
    pub value: f64,
}
