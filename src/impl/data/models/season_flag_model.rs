use std::str::FromStr;

use serde::Deserialize;

use crate::errors::Error;

/// Boolean baseline-season flag. Input tables carry "True"/"False"; "1"/"0"
/// and lowercase spellings are accepted as well.
#[derive(Debug)]
pub(crate) struct SeasonFlagModel(pub(crate) bool);

impl FromStr for SeasonFlagModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "True" | "true" | "TRUE" | "1" => Ok(SeasonFlagModel(true)),
            "False" | "false" | "FALSE" | "0" => Ok(SeasonFlagModel(false)),
            other => Err(Error::InvalidSeasonFlag {
                value: other.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for SeasonFlagModel {
    fn deserialize<D>(deserializer: D) -> Result<SeasonFlagModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SeasonFlagModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<SeasonFlagModel> for bool {
    fn from(model: SeasonFlagModel) -> Self {
        model.0
    }
}
