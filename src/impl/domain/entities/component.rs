use std::{fmt, str::FromStr};

use crate::errors::Error;

/// The fiscal measure being projected.
///
/// Every per-component rule in the pipeline (authoritative baseline season,
/// legislative-change semantics, error metric, sign convention) dispatches on
/// this enum, so adding a component forces every rule to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Outlay,
    Revenue,
    Deficit,
    Debt,
}

pub const ALL_COMPONENTS: [Component; 4] = [
    Component::Outlay,
    Component::Revenue,
    Component::Deficit,
    Component::Debt,
];

/// Release season of a baseline vintage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
}

/// Which denominator a component's relative projection error uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMetric {
    /// Error as a percent of GDP (deficit, debt).
    PctGdp,
    /// Error as a percent of the actual outcome (outlay, revenue).
    PctActual,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Outlay => "outlay",
            Component::Revenue => "revenue",
            Component::Deficit => "deficit",
            Component::Debt => "debt",
        }
    }

    /// The baseline season scored for this component. Revenue accuracy is
    /// measured against Winter baselines; everything else against Spring.
    pub fn baseline_season(&self) -> Season {
        match self {
            Component::Revenue => Season::Winter,
            Component::Outlay | Component::Deficit | Component::Debt => Season::Spring,
        }
    }

    /// Column label for the attributed legislative-change value. Debt carries
    /// its own label even though its changes originate from deficit records.
    pub fn legislative_change_label(&self) -> &'static str {
        match self {
            Component::Outlay => "legislative_outlay_change",
            Component::Revenue => "legislative_revenue_change",
            Component::Deficit => "legislative_deficit_change",
            Component::Debt => "legislative_debt_change",
        }
    }

    /// A deficit that came in lower than projected is recorded as a favorable
    /// (negative) error, so the raw error sign is flipped for deficit only.
    pub fn inverts_error_sign(&self) -> bool {
        matches!(self, Component::Deficit)
    }

    pub fn error_metric(&self) -> ErrorMetric {
        match self {
            Component::Deficit | Component::Debt => ErrorMetric::PctGdp,
            Component::Outlay | Component::Revenue => ErrorMetric::PctActual,
        }
    }

    /// Column label for the relative error metric of this component.
    pub fn error_metric_label(&self) -> &'static str {
        match self.error_metric() {
            ErrorMetric::PctGdp => "projection_error_pct_GDP",
            ErrorMetric::PctActual => "projection_error_pct_actual",
        }
    }
}

impl FromStr for Component {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outlay" => Ok(Component::Outlay),
            "revenue" => Ok(Component::Revenue),
            "deficit" => Ok(Component::Deficit),
            "debt" => Ok(Component::Debt),
            other => Err(Error::InvalidComponent {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_components() {
        for (s, c) in [
            ("outlay", Component::Outlay),
            ("revenue", Component::Revenue),
            ("deficit", Component::Deficit),
            ("debt", Component::Debt),
        ] {
            assert_eq!(s.parse::<Component>().unwrap(), c);
        }
    }

    #[test]
    fn rejects_unknown_component() {
        assert!(matches!(
            "interest".parse::<Component>(),
            Err(Error::InvalidComponent { .. })
        ));
    }

    #[test]
    fn revenue_scores_winter_baselines() {
        assert_eq!(Component::Revenue.baseline_season(), Season::Winter);
        assert_eq!(Component::Outlay.baseline_season(), Season::Spring);
        assert_eq!(Component::Deficit.baseline_season(), Season::Spring);
        assert_eq!(Component::Debt.baseline_season(), Season::Spring);
    }

    #[test]
    fn only_deficit_inverts_sign() {
        assert!(Component::Deficit.inverts_error_sign());
        assert!(!Component::Debt.inverts_error_sign());
        assert!(!Component::Outlay.inverts_error_sign());
        assert!(!Component::Revenue.inverts_error_sign());
    }
}
