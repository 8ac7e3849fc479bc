use crate::entities::{Component, ErrorMetric, MergedFact, ProjectionErrorRow};

/// Derives the error metrics for each merged fact row.
///
/// `adjusted_projection` credits the baseline with legislation enacted after
/// its release, so the remaining error reflects forecasting, not policy. The
/// deficit error sign is inverted: a deficit that came in below the
/// projection scores as a favorable (negative) error. Undefined relative
/// errors (missing or zero denominator) propagate as `None`, never a failure.
pub(crate) fn calc_errors(facts: Vec<MergedFact>, component: Component) -> Vec<ProjectionErrorRow> {
    facts
        .into_iter()
        .map(|fact| {
            let adjusted_projection = fact.value + fact.legislative_change;
            let raw_error = adjusted_projection - fact.actual_value;
            let projection_error = if component.inverts_error_sign() {
                -raw_error
            } else {
                raw_error
            };
            let relative_error = match component.error_metric() {
                ErrorMetric::PctGdp => fact
                    .gdp
                    .filter(|gdp| *gdp != 0.0)
                    .map(|gdp| projection_error / gdp * 100.0),
                ErrorMetric::PctActual => (fact.actual_value != 0.0)
                    .then(|| projection_error / fact.actual_value * 100.0),
            };
            ProjectionErrorRow {
                fact,
                adjusted_projection,
                projection_error,
                relative_error,
            }
        })
        .collect()
}
