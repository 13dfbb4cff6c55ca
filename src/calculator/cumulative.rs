//! Running totals over numeric series

/// Prefix sums of `series`; the output has the same length as the input.
pub fn cumulative_sum(series: &[f64]) -> Vec<f64> {
    series
        .iter()
        .scan(0.0, |total, value| {
            *total += value;
            Some(*total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert!(cumulative_sum(&[]).is_empty());
        assert_eq!(cumulative_sum(&[4.5]), vec![4.5]);
    }

    #[test]
    fn test_running_totals() {
        assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0, 4.0]), vec![1.0, 3.0, 6.0, 10.0]);
    }

    #[test]
    fn test_non_decreasing_for_non_negative_input() {
        let series: Vec<f64> = (0..50).map(|i| ((i * 7) % 11) as f64 * 0.5).collect();
        let totals = cumulative_sum(&series);

        assert_eq!(totals.len(), series.len());
        for pair in totals.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_negative_values_are_summed_as_is() {
        assert_eq!(cumulative_sum(&[5.0, -2.0, -3.0]), vec![5.0, 3.0, 0.0]);
    }
}
