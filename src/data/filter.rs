use super::model::{DataError, Dataset};

// ---------------------------------------------------------------------------
// Closed price range on the target column
// ---------------------------------------------------------------------------

/// A closed interval `[low, high]` selected with the price slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Both ends are inclusive.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Clamp both ends into `[min, max]` and keep `low <= high`.
    pub fn clamped(self, min: f64, max: f64) -> Self {
        let low = self.low.clamp(min, max);
        let high = self.high.clamp(low, max);
        Self { low, high }
    }
}

/// Indices of rows whose `column` value lies within `range`.
pub fn filtered_indices(
    dataset: &Dataset,
    column: &str,
    range: &PriceRange,
) -> Result<Vec<usize>, DataError> {
    let idx = dataset.column_index(column)?;
    Ok(dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| range.contains(row[idx]))
        .map(|(i, _)| i)
        .collect())
}

/// Values of `column` for the rows that pass the range filter.
pub fn filtered_values(
    dataset: &Dataset,
    column: &str,
    range: &PriceRange,
) -> Result<Vec<f64>, DataError> {
    let idx = dataset.column_index(column)?;
    Ok(filtered_indices(dataset, column, range)?
        .into_iter()
        .map(|i| dataset.rows[i][idx])
        .collect())
}

// ---------------------------------------------------------------------------
// Fixed-bin histogram
// ---------------------------------------------------------------------------

/// Equal-width bins spanning the observed values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Left edge of the first bin.
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width buckets over `[min, max]`.
    /// The maximum lands in the last bin. A constant sample is centred in a
    /// unit-wide span.
    pub fn new(values: &[f64], bins: usize) -> Self {
        if values.is_empty() || bins == 0 {
            return Self {
                start: 0.0,
                bin_width: 0.0,
                counts: Vec::new(),
            };
        }

        let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if (max - min).abs() < f64::EPSILON {
            min -= 0.5;
            max += 0.5;
        }

        let bin_width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &v in values {
            let bin = (((v - min) / bin_width) as usize).min(bins - 1);
            counts[bin] += 1;
        }

        Self {
            start: min,
            bin_width,
            counts,
        }
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Centre of bin `i`, used as the bar position.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.bin_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::sample_dataset;

    #[test]
    fn range_is_closed_on_both_ends() {
        let r = PriceRange::new(10.0, 20.0);
        assert!(r.contains(10.0));
        assert!(r.contains(20.0));
        assert!(!r.contains(9.999));
        assert!(!r.contains(20.001));
    }

    #[test]
    fn clamping_keeps_order() {
        let r = PriceRange::new(-3.0, 400.0).clamped(5.0, 150.0);
        assert_eq!(r, PriceRange::new(5.0, 150.0));

        let r = PriceRange::new(60.0, 40.0).clamped(5.0, 150.0);
        assert_eq!(r, PriceRange::new(60.0, 60.0));
    }

    #[test]
    fn histogram_total_matches_rows_in_range() {
        let ds = sample_dataset(200);
        let min = ds.min("MEDV").unwrap();

        for (low, high) in [(min, 150.0), (10.0, 100.0), (20.0, 20.0), (30.0, 35.0)] {
            let range = PriceRange::new(low, high);
            let expected = ds
                .column("MEDV")
                .unwrap()
                .into_iter()
                .filter(|v| *v >= low && *v <= high)
                .count();

            let values = filtered_values(&ds, "MEDV", &range).unwrap();
            let hist = Histogram::new(&values, 100);

            assert_eq!(values.len(), expected);
            assert_eq!(hist.total(), expected, "range ({low}, {high})");
        }
    }

    #[test]
    fn filtered_indices_point_at_matching_rows() {
        let ds = sample_dataset(30);
        let target = ds.column_index("MEDV").unwrap();
        let range = PriceRange::new(10.0, 25.0);
        for i in filtered_indices(&ds, "MEDV", &range).unwrap() {
            assert!(range.contains(ds.rows[i][target]));
        }
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let hist = Histogram::new(&[0.0, 5.0, 10.0], 10);
        assert_eq!(hist.counts.len(), 10);
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[5], 1);
        assert_eq!(hist.counts[9], 1);
        assert!((hist.bin_center(0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn constant_and_empty_samples() {
        let hist = Histogram::new(&[7.0, 7.0, 7.0], 4);
        assert_eq!(hist.total(), 3);
        assert!(hist.bin_width > 0.0);

        let empty = Histogram::new(&[], 100);
        assert!(empty.counts.is_empty());
        assert_eq!(empty.total(), 0);
    }
}
