use chrono::NaiveDate;

/// Fixed-decimal rendering for persisted numeric cells. Non-finite values
/// (an overflowed division, for instance) render as empty cells, matching
/// the treatment of undefined values.
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        String::new()
    }
}

/// `None` renders as an empty cell.
pub(crate) fn opt_fixed(value: Option<f64>, decimals: usize) -> String {
    value.map(|v| fixed(v, decimals)).unwrap_or_default()
}

/// Season flags render with the same spelling the input tables carry.
pub(crate) fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

pub(crate) fn date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_decimals() {
        assert_eq!(fixed(1.0, 3), "1.000");
        assert_eq!(fixed(-0.25, 1), "-0.2");
        assert_eq!(fixed(2.3456, 3), "2.346");
    }

    #[test]
    fn undefined_and_non_finite_render_empty() {
        assert_eq!(opt_fixed(None, 1), "");
        assert_eq!(fixed(f64::NAN, 1), "");
        assert_eq!(fixed(f64::INFINITY, 3), "");
    }

    #[test]
    fn renders_flags_and_dates() {
        assert_eq!(flag(true), "True");
        assert_eq!(flag(false), "False");
        assert_eq!(
            date(NaiveDate::from_ymd_opt(2019, 5, 9).unwrap()),
            "2019-05-09"
        );
    }
}
