use std::fs;

use crate::{
    data::models::{
        change_category_model::ChangeCategoryModel, component_model::ComponentModel,
        fiscal_amount_model::FiscalAmountModel, iso_date_model::IsoDateModel,
    },
    entities::ChangeRecord,
    errors::{Error, Result},
};

pub(crate) trait ChangesCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<ChangeRecord>>;

    fn from_file<P>(&self, path: P) -> Result<Vec<ChangeRecord>>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct ChangesCsvDatasourceImpl;

#[derive(Debug, serde_derive::Deserialize)]
struct ChangeRowModel {
    component: ComponentModel,
    category: String,
    subcategory: String,
    projected_fiscal_year: i32,
    change_category: ChangeCategoryModel,
    changes_baseline_date: IsoDateModel,
    value: FiscalAmountModel,
}

impl From<ChangeRowModel> for ChangeRecord {
    fn from(row: ChangeRowModel) -> Self {
        ChangeRecord {
            component: row.component.into(),
            category: row.category,
            subcategory: row.subcategory,
            projected_fiscal_year: row.projected_fiscal_year,
            change_category: row.change_category.into(),
            changes_baseline_date: row.changes_baseline_date.into(),
            value: row.value.into(),
        }
    }
}

impl ChangesCsvDatasource for ChangesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<ChangeRecord>> {
        csv::Reader::from_reader(s.as_bytes())
            .deserialize::<ChangeRowModel>()
            .map(|r| r.map(Into::into).map_err(Error::from))
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<ChangeRecord>>
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
    use crate::entities::ChangeCategory;

    #[test]
    fn reads_change_rows() {
        let csv = "component,category,subcategory,projected_fiscal_year,change_category,\
                   changes_baseline_date,value\n\
                   deficit,Total,Total,2020,Legislative,2019-08-21,(12.5)\n";
        let rows = ChangesCsvDatasourceImpl.from_string(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].change_category, ChangeCategory::Legislative);
        assert_eq!(rows[0].value, -12.5);
    }

    #[test]
    fn unknown_change_category_is_fatal() {
        let csv = "component,category,subcategory,projected_fiscal_year,change_category,\
                   changes_baseline_date,value\n\
                   deficit,Total,Total,2020,Administrative,2019-08-21,1.0\n";
        assert!(ChangesCsvDatasourceImpl.from_string(csv).is_err());
    }
}
