use std::str::FromStr;

use serde::Deserialize;

use crate::entities::ChangeCategory;

#[derive(Debug)]
pub(crate) struct ChangeCategoryModel(pub(crate) ChangeCategory);

impl<'de> Deserialize<'de> for ChangeCategoryModel {
    fn deserialize<D>(deserializer: D) -> Result<ChangeCategoryModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ChangeCategory::from_str(&s)
            .map(ChangeCategoryModel)
            .map_err(serde::de::Error::custom)
    }
}

impl From<ChangeCategoryModel> for ChangeCategory {
    fn from(model: ChangeCategoryModel) -> Self {
        model.0
    }
}
