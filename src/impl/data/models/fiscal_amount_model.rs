use std::str::FromStr;

use serde::Deserialize;

use crate::errors::Error;

/// Dollar amount or GDP value as it appears in the input tables. Accepts
/// comma grouping ("1,234.5") and accounting-style parenthesized negatives
/// ("(123.4)").
#[derive(Debug)]
pub(crate) struct FiscalAmountModel(pub(crate) f64);

impl FromStr for FiscalAmountModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(',', "");
        let is_negative = raw.trim().starts_with('(') && raw.trim().ends_with(')');
        let numeric_part = raw.trim().trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| Error::InvalidFiscalAmount {
                value: s.to_string(),
            })?;
        Ok(FiscalAmountModel(if is_negative { -amount } else { amount }))
    }
}

impl<'de> Deserialize<'de> for FiscalAmountModel {
    fn deserialize<D>(deserializer: D) -> Result<FiscalAmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FiscalAmountModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<FiscalAmountModel> for f64 {
    fn from(model: FiscalAmountModel) -> Self {
        model.0
    }
}
