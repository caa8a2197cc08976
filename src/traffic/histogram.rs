//! Occurrence counts of arrival values.

/// Count `samples` into `bins` unit-wide bins starting at 0.
///
/// Each value is truncated towards zero; negative, non-finite and
/// out-of-range values are not counted.
pub fn histogram(samples: &[f64], bins: usize) -> Vec<f64> {
    let mut counts = vec![0.0; bins];
    for &value in samples {
        if !value.is_finite() || value < 0.0 {
            continue;
        }
        let bin = value.trunc() as usize;
        if let Some(count) = counts.get_mut(bin) {
            *count += 1.0;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_truncated_values() {
        let counts = histogram(&[0.0, 0.9, 1.0, 3.5, 3.0, 3.99], 5);
        assert_eq!(counts, vec![2.0, 1.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_ignores_out_of_range() {
        let counts = histogram(&[-1.0, 5.0, 100.0, f64::NAN, f64::INFINITY, 4.0], 5);
        assert_eq!(counts, vec![0.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zero_bins() {
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
    }
}
