use crate::{entities::InputTables, errors::Result};

/// Reads the four input tables (actuals, baselines, changes, GDP) from some
/// physical encoding. The pipeline core only sees `InputTables`.
pub(crate) trait TablesRepository {
    fn from_string(
        &self,
        actuals_csv: &str,
        baselines_csv: &str,
        changes_csv: &str,
        gdp_csv: &str,
    ) -> Result<InputTables>;

    fn from_file<P>(
        &self,
        actuals_csv: P,
        baselines_csv: P,
        changes_csv: P,
        gdp_csv: P,
    ) -> Result<InputTables>
    where
        P: AsRef<std::path::Path>;
}
