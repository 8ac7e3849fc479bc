use std::fs;

use crate::{
    data::models::{component_model::ComponentModel, fiscal_amount_model::FiscalAmountModel},
    entities::ActualRecord,
    errors::{Error, Result},
};

pub(crate) trait ActualsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<ActualRecord>>;

    fn from_file<P>(&self, path: P) -> Result<Vec<ActualRecord>>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct ActualsCsvDatasourceImpl;

#[derive(Debug, serde_derive::Deserialize)]
struct ActualRowModel {
    component: ComponentModel,
    category: String,
    subcategory: String,
    fiscal_year: i32,
    actual_value: FiscalAmountModel,
}

impl From<ActualRowModel> for ActualRecord {
    fn from(row: ActualRowModel) -> Self {
        ActualRecord {
            component: row.component.into(),
            category: row.category,
            subcategory: row.subcategory,
            fiscal_year: row.fiscal_year,
            actual_value: row.actual_value.into(),
        }
    }
}

impl ActualsCsvDatasource for ActualsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<ActualRecord>> {
        csv::Reader::from_reader(s.as_bytes())
            .deserialize::<ActualRowModel>()
            .map(|r| r.map(Into::into).map_err(Error::from))
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<ActualRecord>>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(&path).map_err(|e| Error::ReadError {
            path: path.as_ref().display().to_string(),
            source: e,
        })?)
    }
}
