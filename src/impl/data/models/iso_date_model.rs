use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::Error;

#[derive(Debug)]
pub(crate) struct IsoDateModel(NaiveDate);

impl FromStr for IsoDateModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| Error::InvalidIsoDate {
            date: s.to_string(),
        })?;
        Ok(IsoDateModel(d))
    }
}

impl<'de> Deserialize<'de> for IsoDateModel {
    fn deserialize<D>(deserializer: D) -> Result<IsoDateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IsoDateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<IsoDateModel> for NaiveDate {
    fn from(model: IsoDateModel) -> Self {
        model.0
    }
}
