use chrono::NaiveDate;

use super::component::{Component, Season};

/// One projected value from a baseline vintage.
///
/// A vintage (identified by `baseline_date`) projects each target fiscal year
/// at an ordinal distance `projected_year_number` of 1 ("budget year") through
/// 11; a 0 marks a backcast row, which never reaches final output.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineRecord {
    pub component: Component,
    pub category: String,
    pub subcategory: String,
    pub projected_fiscal_year: i32,
    pub projected_year_number: i32,
    pub winter_flag: bool,
    pub spring_flag: bool,
    pub baseline_date: NaiveDate,
    pub value: f64,
}

impl BaselineRecord {
    pub fn season_flag(&self, season: Season) -> bool {
        match season {
            Season::Winter => self.winter_flag,
            Season::Spring => self.spring_flag,
        }
    }
}
