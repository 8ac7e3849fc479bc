/// Arithmetic mean. `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Square root of the mean of squares. `None` for an empty slice.
pub(crate) fn root_mean_square(values: &[f64]) -> Option<f64> {
    mean(&values.iter().map(|v| v * v).collect::<Vec<_>>()).map(f64::sqrt)
}

/// Linearly-interpolated quantile over an ascending-sorted slice.
///
/// Uses the standard `h = (n - 1) * q` definition: the result interpolates
/// between the values at `floor(h)` and `ceil(h)`. `None` for an empty slice.
pub(crate) fn quantile_linear(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    Some(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-10, "{a} != {b}");
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(root_mean_square(&[]), None);
        assert_eq!(quantile_linear(&[], 0.5), None);
    }

    #[test]
    fn mean_and_rms() {
        assert_close(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
        assert_close(root_mean_square(&[3.0, 4.0]).unwrap(), (12.5f64).sqrt());
    }

    #[test]
    fn quantile_interpolates_linearly() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_close(quantile_linear(&values, 0.25).unwrap(), 1.75);
        assert_close(quantile_linear(&values, 0.5).unwrap(), 2.5);
        assert_close(quantile_linear(&values, 0.0).unwrap(), 1.0);
        assert_close(quantile_linear(&values, 1.0).unwrap(), 4.0);
    }

    #[test]
    fn quantile_of_singleton_is_the_value() {
        assert_close(quantile_linear(&[7.5], 1.0 / 6.0).unwrap(), 7.5);
        assert_close(quantile_linear(&[7.5], 5.0 / 6.0).unwrap(), 7.5);
    }

    #[test]
    fn two_thirds_spread_of_pair() {
        // For two values, h = q for the 1/6 and 5/6 quantiles, so the spread
        // covers two-thirds of the gap between them.
        let values = [0.0, 3.0];
        let spread = quantile_linear(&values, 5.0 / 6.0).unwrap()
            - quantile_linear(&values, 1.0 / 6.0).unwrap();
        assert_close(spread, 2.0);
    }
}
