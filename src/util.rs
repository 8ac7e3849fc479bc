use std::fs;

use crate::{
    domain::usecases::analysis_usecase::{AnalysisUsecase as _, AnalysisUsecaseImpl},
    entities::ProjectionAccuracyReport,
    errors::{Error, Result},
    presentation::table_printer::TablePrinter,
};

/// One rendered output table, ready to persist as `<name>.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    pub name: String,
    pub contents: String,
}

pub struct ProjectionAccuracyUtil {
    analysis_usecase: AnalysisUsecaseImpl,
    printer: TablePrinter,
}

impl ProjectionAccuracyUtil {
    pub fn new() -> Self {
        Self {
            analysis_usecase: AnalysisUsecaseImpl::new(),
            printer: TablePrinter::new(),
        }
    }

    /// Runs the full pipeline over the four input tables and renders every
    /// output table. All tables are computed and rendered before anything is
    /// returned, so a failure never yields a partial set.
    pub fn from_string(
        &self,
        actuals_csv: &str,
        baselines_csv: &str,
        changes_csv: &str,
        gdp_csv: &str,
    ) -> Result<(ProjectionAccuracyReport, Vec<OutputTable>)> {
        let report =
            self.analysis_usecase
                .from_string(actuals_csv, baselines_csv, changes_csv, gdp_csv)?;
        let tables = self.render(&report)?;
        Ok((report, tables))
    }

    pub fn from_file<P>(
        &self,
        actuals_csv: P,
        baselines_csv: P,
        changes_csv: P,
        gdp_csv: P,
    ) -> Result<(ProjectionAccuracyReport, Vec<OutputTable>)>
    where
        P: AsRef<std::path::Path>,
    {
        let report =
            self.analysis_usecase
                .from_file(actuals_csv, baselines_csv, changes_csv, gdp_csv)?;
        let tables = self.render(&report)?;
        Ok((report, tables))
    }

    /// Writes each rendered table to `<dir>/<name>.csv`.
    pub fn write_to_dir<P>(&self, tables: &[OutputTable], dir: P) -> Result<()>
    where
        P: AsRef<std::path::Path>,
    {
        for table in tables {
            let path = dir.as_ref().join(format!("{}.csv", table.name));
            fs::write(&path, &table.contents).map_err(|e| Error::WriteError {
                path: path.display().to_string(),
                source: e,
            })?;
        }
        Ok(())
    }

    fn render(&self, report: &ProjectionAccuracyReport) -> Result<Vec<OutputTable>> {
        let mut tables = Vec::with_capacity(report.components.len() * 3);
        for component_report in &report.components {
            let component = component_report.component;
            tables.push(OutputTable {
                name: self.printer.errors_table_name(component),
                contents: self
                    .printer
                    .print_projection_errors(&component_report.projection_errors, component)?,
            });
            tables.push(OutputTable {
                name: self.printer.summary_table_name(component),
                contents: self
                    .printer
                    .print_summary_stats(&component_report.summary_stats, component)?,
            });
            tables.push(OutputTable {
                name: self.printer.scaled_actuals_table_name(component),
                contents: self
                    .printer
                    .print_actuals_pct_gdp(&component_report.actuals_pct_gdp, component)?,
            });
        }
        Ok(tables)
    }
}

impl Default for ProjectionAccuracyUtil {
    fn default() -> Self {
        Self::new()
    }
}
