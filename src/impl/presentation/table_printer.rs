use super::value_fmt;
use crate::{
    entities::{Component, ProjectionErrorRow, ScaledActualRow, SummaryRow},
    errors::{Error, Result},
};

/// Decimal places for persisted tables.
const ERRORS_TABLE_DECIMALS: usize = 3;
const SUMMARY_TABLE_DECIMALS: usize = 1;
const SCALED_TABLE_DECIMALS: usize = 1;

/// Renders the derived tables to CSV strings. Rendering is deterministic:
/// identical rows produce byte-identical output.
pub(crate) struct TablePrinter;

impl TablePrinter {
    pub(crate) fn new() -> Self {
        TablePrinter
    }

    pub(crate) fn errors_table_name(&self, component: Component) -> String {
        format!("{component}_projection_errors")
    }

    pub(crate) fn summary_table_name(&self, component: Component) -> String {
        format!("{component}_projection_errors_summary_stats")
    }

    pub(crate) fn scaled_actuals_table_name(&self, component: Component) -> String {
        format!("{component}_actuals_pct_GDP")
    }

    pub(crate) fn print_projection_errors(
        &self,
        rows: &[ProjectionErrorRow],
        component: Component,
    ) -> Result<String> {
        render(&self.errors_table_name(component), |wtr| {
            wtr.write_record([
                "component",
                "category",
                "subcategory",
                "projected_fiscal_year",
                "projected_year_number",
                "Winter_flag",
                "Spring_flag",
                "baseline_date",
                "value",
                "actual_value",
                "GDP",
                component.legislative_change_label(),
                "adjusted_projection",
                "projection_error",
                component.error_metric_label(),
            ])?;
            for row in rows {
                let f = &row.fact;
                wtr.write_record([
                    f.component.as_str().to_string(),
                    f.category.clone(),
                    f.subcategory.clone(),
                    f.projected_fiscal_year.to_string(),
                    f.projected_year_number.to_string(),
                    value_fmt::flag(f.winter_flag).to_string(),
                    value_fmt::flag(f.spring_flag).to_string(),
                    value_fmt::date(f.baseline_date),
                    value_fmt::fixed(f.value, ERRORS_TABLE_DECIMALS),
                    value_fmt::fixed(f.actual_value, ERRORS_TABLE_DECIMALS),
                    value_fmt::opt_fixed(f.gdp, ERRORS_TABLE_DECIMALS),
                    value_fmt::fixed(f.legislative_change, ERRORS_TABLE_DECIMALS),
                    value_fmt::fixed(row.adjusted_projection, ERRORS_TABLE_DECIMALS),
                    value_fmt::fixed(row.projection_error, ERRORS_TABLE_DECIMALS),
                    value_fmt::opt_fixed(row.relative_error, ERRORS_TABLE_DECIMALS),
                ])?;
            }
            Ok(())
        })
    }

    pub(crate) fn print_summary_stats(
        &self,
        rows: &[SummaryRow],
        component: Component,
    ) -> Result<String> {
        render(&self.summary_table_name(component), |wtr| {
            wtr.write_record([
                "component",
                "category",
                "subcategory",
                "projected_year_number",
                "projection_year_range",
                "number_of_projections",
                "average_error",
                "average_absolute_error",
                "RMSE",
                "two_thirds_spread",
            ])?;
            for row in rows {
                wtr.write_record([
                    row.component.as_str().to_string(),
                    row.category.clone(),
                    row.subcategory.clone(),
                    row.projected_year_number.to_string(),
                    row.projection_year_range.clone(),
                    row.number_of_projections.to_string(),
                    value_fmt::opt_fixed(row.average_error, SUMMARY_TABLE_DECIMALS),
                    value_fmt::opt_fixed(row.average_absolute_error, SUMMARY_TABLE_DECIMALS),
                    value_fmt::opt_fixed(row.rmse, SUMMARY_TABLE_DECIMALS),
                    value_fmt::opt_fixed(row.two_thirds_spread, SUMMARY_TABLE_DECIMALS),
                ])?;
            }
            Ok(())
        })
    }

    pub(crate) fn print_actuals_pct_gdp(
        &self,
        rows: &[ScaledActualRow],
        component: Component,
    ) -> Result<String> {
        render(&self.scaled_actuals_table_name(component), |wtr| {
            wtr.write_record([
                "component",
                "category",
                "subcategory",
                "fiscal_year",
                "actual_value",
                "GDP",
                "actuals_pct_GDP",
            ])?;
            for row in rows {
                wtr.write_record([
                    row.component.as_str().to_string(),
                    row.category.clone(),
                    row.subcategory.clone(),
                    row.fiscal_year.to_string(),
                    value_fmt::fixed(row.actual_value, SCALED_TABLE_DECIMALS),
                    value_fmt::opt_fixed(row.gdp, SCALED_TABLE_DECIMALS),
                    value_fmt::opt_fixed(row.actuals_pct_gdp, SCALED_TABLE_DECIMALS),
                ])?;
            }
            Ok(())
        })
    }
}

fn render<F>(table: &str, write_rows: F) -> Result<String>
where
    F: FnOnce(&mut csv::Writer<Vec<u8>>) -> csv::Result<()>,
{
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_rows(&mut wtr).map_err(|e| Error::RenderError {
        table: table.to_string(),
        source: Box::new(e),
    })?;
    let bytes = wtr.into_inner().map_err(|e| Error::RenderError {
        table: table.to_string(),
        source: Box::new(e.into_error()),
    })?;
    String::from_utf8(bytes).map_err(|e| Error::RenderError {
        table: table.to_string(),
        source: Box::new(e),
    })
}
