pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Sample standard deviation (n - 1 denominator). `None` below two values.
pub fn sample_std(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;

    Some(variance.sqrt())
}

/// Quantile of an ascending slice, linearly interpolated between the two
/// closest ranks. `q` is clamped to `[0, 1]`.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = position.floor() as usize;
    let hi = position.ceil() as usize;
    let fraction = position - lo as f64;

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn sample_std_needs_two_values() {
        assert_eq!(sample_std(&[], 0.0), None);
        assert_eq!(sample_std(&[3.0], 3.0), None);
    }

    #[test]
    fn sample_std_basic() {
        // deviations -2, 0, 2 -> 8 / 2 = 4 -> 2
        assert_eq!(sample_std(&[2.0, 4.0, 6.0], 4.0), Some(2.0));
    }

    #[test]
    fn quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile(&sorted, 0.25), Some(1.75));
        assert_eq!(quantile(&sorted, 1.0), Some(4.0));
    }

    #[test]
    fn quantile_empty() {
        assert_eq!(quantile(&[], 0.5), None);
    }
}
