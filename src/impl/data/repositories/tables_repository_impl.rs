use crate::{
    data::datasources::{
        actuals_csv_datasource::{ActualsCsvDatasource as _, ActualsCsvDatasourceImpl},
        baselines_csv_datasource::{BaselinesCsvDatasource as _, BaselinesCsvDatasourceImpl},
        changes_csv_datasource::{ChangesCsvDatasource as _, ChangesCsvDatasourceImpl},
        gdp_csv_datasource::{GdpCsvDatasource as _, GdpCsvDatasourceImpl},
    },
    domain::repositories::tables_repository::TablesRepository,
    entities::InputTables,
    errors::Result,
};

pub(crate) struct TablesRepositoryImpl {
    actuals_datasource: ActualsCsvDatasourceImpl,
    baselines_datasource: BaselinesCsvDatasourceImpl,
    changes_datasource: ChangesCsvDatasourceImpl,
    gdp_datasource: GdpCsvDatasourceImpl,
}

impl TablesRepositoryImpl {
    pub(crate) fn new() -> Self {
        Self {
            actuals_datasource: ActualsCsvDatasourceImpl,
            baselines_datasource: BaselinesCsvDatasourceImpl,
            changes_datasource: ChangesCsvDatasourceImpl,
            gdp_datasource: GdpCsvDatasourceImpl,
        }
    }
}

impl TablesRepository for TablesRepositoryImpl {
    fn from_string(
        &self,
        actuals_csv: &str,
        baselines_csv: &str,
        changes_csv: &str,
        gdp_csv: &str,
    ) -> Result<InputTables> {
        Ok(InputTables {
            actuals: self.actuals_datasource.from_string(actuals_csv)?,
            baselines: self.baselines_datasource.from_string(baselines_csv)?,
            changes: self.changes_datasource.from_string(changes_csv)?,
            gdp: self.gdp_datasource.from_string(gdp_csv)?,
        })
    }

    fn from_file<P>(
        &self,
        actuals_csv: P,
        baselines_csv: P,
        changes_csv: P,
        gdp_csv: P,
    ) -> Result<InputTables>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(InputTables {
            actuals: self.actuals_datasource.from_file(actuals_csv)?,
            baselines: self.baselines_datasource.from_file(baselines_csv)?,
            changes: self.changes_datasource.from_file(changes_csv)?,
            gdp: self.gdp_datasource.from_file(gdp_csv)?,
        })
    }
}
