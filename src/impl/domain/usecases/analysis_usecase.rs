use tracing::info;

use crate::{
    data::repositories::tables_repository_impl::TablesRepositoryImpl,
    domain::{
        logic::{
            actuals_scaler::scale_actuals, error_calculator::calc_errors,
            merge_engine::merge_data, summary_stats::calc_summary_stats,
        },
        repositories::tables_repository::TablesRepository,
    },
    entities::{ComponentReport, InputTables, ProjectionAccuracyReport, ALL_COMPONENTS},
    errors::Result,
};

pub(crate) trait AnalysisUsecase {
    fn from_string(
        &self,
        actuals_csv: &str,
        baselines_csv: &str,
        changes_csv: &str,
        gdp_csv: &str,
    ) -> Result<ProjectionAccuracyReport>;

    fn from_file<P>(
        &self,
        actuals_csv: P,
        baselines_csv: P,
        changes_csv: P,
        gdp_csv: P,
    ) -> Result<ProjectionAccuracyReport>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct AnalysisUsecaseImpl<
    R1 = TablesRepositoryImpl, // Default.
> where
    R1: TablesRepository,
{
    tables_repository: R1,
}

impl AnalysisUsecaseImpl {
    pub(crate) fn new() -> Self {
        AnalysisUsecaseImpl {
            tables_repository: TablesRepositoryImpl::new(),
        }
    }
}

impl<R1> AnalysisUsecase for AnalysisUsecaseImpl<R1>
where
    R1: TablesRepository,
{
    fn from_string(
        &self,
        actuals_csv: &str,
        baselines_csv: &str,
        changes_csv: &str,
        gdp_csv: &str,
    ) -> Result<ProjectionAccuracyReport> {
        let tables =
            self.tables_repository
                .from_string(actuals_csv, baselines_csv, changes_csv, gdp_csv)?;
        Ok(run(&tables))
    }

    fn from_file<P>(
        &self,
        actuals_csv: P,
        baselines_csv: P,
        changes_csv: P,
        gdp_csv: P,
    ) -> Result<ProjectionAccuracyReport>
    where
        P: AsRef<std::path::Path>,
    {
        let tables =
            self.tables_repository
                .from_file(actuals_csv, baselines_csv, changes_csv, gdp_csv)?;
        Ok(run(&tables))
    }
}

/// Runs the full merge → errors → summary → scaled-actuals sequence for
/// every component. Each component's tables are a pure function of the
/// inputs; components run sequentially and independently.
fn run(tables: &InputTables) -> ProjectionAccuracyReport {
    let components = ALL_COMPONENTS
        .iter()
        .map(|&component| {
            let facts = merge_data(tables, component);
            let projection_errors = calc_errors(facts, component);
            let summary_stats = calc_summary_stats(&projection_errors, component);
            let actuals_pct_gdp = scale_actuals(&tables.actuals, &tables.gdp, component);
            info!(
                component = %component,
                error_rows = projection_errors.len(),
                summary_groups = summary_stats.len(),
                scaled_actuals = actuals_pct_gdp.len(),
                "computed projection accuracy tables"
            );
            ComponentReport {
                component,
                projection_errors,
                summary_stats,
                actuals_pct_gdp,
            }
        })
        .collect();
    ProjectionAccuracyReport { components }
}
