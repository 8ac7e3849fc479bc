use std::fs;

use crate::{
    data::models::{
        component_model::ComponentModel, fiscal_amount_model::FiscalAmountModel,
        iso_date_model::IsoDateModel, season_flag_model::SeasonFlagModel,
    },
    entities::BaselineRecord,
    errors::{Error, Result},
};

pub(crate) trait BaselinesCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<BaselineRecord>>;

    fn from_file<P>(&self, path: P) -> Result<Vec<BaselineRecord>>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct BaselinesCsvDatasourceImpl;

#[derive(Debug, serde_derive::Deserialize)]
struct BaselineRowModel {
    component: ComponentModel,
    category: String,
    subcategory: String,
    projected_fiscal_year: i32,
    projected_year_number: i32,
    #[serde(rename = "Winter_flag")]
    winter_flag: SeasonFlagModel,
    #[serde(rename = "Spring_flag")]
    spring_flag: SeasonFlagModel,
    baseline_date: IsoDateModel,
    value: FiscalAmountModel,
}

impl From<BaselineRowModel> for BaselineRecord {
    fn from(row: BaselineRowModel) -> Self {
        BaselineRecord {
            component: row.component.into(),
            category: row.category,
            subcategory: row.subcategory,
            projected_fiscal_year: row.projected_fiscal_year,
            projected_year_number: row.projected_year_number,
            winter_flag: row.winter_flag.into(),
            spring_flag: row.spring_flag.into(),
            baseline_date: row.baseline_date.into(),
            value: row.value.into(),
        }
    }
}

impl BaselinesCsvDatasource for BaselinesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<BaselineRecord>> {
        csv::Reader::from_reader(s.as_bytes())
            .deserialize::<BaselineRowModel>()
            .map(|r| r.map(Into::into).map_err(Error::from))
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<BaselineRecord>>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(&path).map_err(|e| Error::ReadError {
            path: path.as_ref().display().to_string(),
            source: e,
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn reads_baseline_rows() {
        let csv = "component,category,subcategory,projected_fiscal_year,projected_year_number,\
                   Winter_flag,Spring_flag,baseline_date,value\n\
                   revenue,Total,Total,2020,2,True,False,2019-01-28,3550.0\n";
        let rows = BaselinesCsvDatasourceImpl.from_string(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].projected_year_number, 2);
        assert!(rows[0].winter_flag);
        assert!(!rows[0].spring_flag);
        assert_eq!(
            rows[0].baseline_date,
            NaiveDate::from_ymd_opt(2019, 1, 28).unwrap()
        );
    }

    #[test]
    fn bad_date_is_fatal() {
        let csv = "component,category,subcategory,projected_fiscal_year,projected_year_number,\
                   Winter_flag,Spring_flag,baseline_date,value\n\
                   revenue,Total,Total,2020,2,True,False,01/28/2019,3550.0\n";
        assert!(BaselinesCsvDatasourceImpl.from_string(csv).is_err());
    }
}
