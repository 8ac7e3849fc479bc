use std::str::FromStr;

use serde::Deserialize;

use crate::entities::Component;

#[derive(Debug)]
pub(crate) struct ComponentModel(pub(crate) Component);

impl<'de> Deserialize<'de> for ComponentModel {
    fn deserialize<D>(deserializer: D) -> Result<ComponentModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Component::from_str(&s)
            .map(ComponentModel)
            .map_err(serde::de::Error::custom)
    }
}

impl From<ComponentModel> for Component {
    fn from(model: ComponentModel) -> Self {
        model.0
    }
}
