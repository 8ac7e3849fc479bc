use std::fs;

use crate::{
    data::models::fiscal_amount_model::FiscalAmountModel,
    entities::GdpRecord,
    errors::{Error, Result},
};

pub(crate) trait GdpCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<GdpRecord>>;

    fn from_file<P>(&self, path: P) -> Result<Vec<GdpRecord>>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct GdpCsvDatasourceImpl;

#[derive(Debug, serde_derive::Deserialize)]
struct GdpRowModel {
    fiscal_year: i32,
    #[serde(rename = "GDP")]
    gdp: FiscalAmountModel,
}

impl From<GdpRowModel> for GdpRecord {
    fn from(row: GdpRowModel) -> Self {
        GdpRecord {
            fiscal_year: row.fiscal_year,
            gdp: row.gdp.into(),
        }
    }
}

impl GdpCsvDatasource for GdpCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<GdpRecord>> {
        csv::Reader::from_reader(s.as_bytes())
            .deserialize::<GdpRowModel>()
            .map(|r| r.map(Into::into).map_err(Error::from))
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<GdpRecord>>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(&path).map_err(|e| Error::ReadError {
            path: path.as_ref().display().to_string(),
            source: e,
        })?)
    }
}
