use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq)]
pub enum DataError {
    #[error("column '{0}' not found")]
    MissingColumn(String),
    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The housing table: one row per property, every cell numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Row-major values; every row has `columns.len()` entries.
    pub rows: Vec<Vec<f64>>,
}

impl Dataset {
    /// Build a dataset, checking that every row matches the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != columns.len())
        {
            return Err(DataError::RaggedRow {
                row,
                expected: columns.len(),
                got: values.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Result<usize, DataError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, DataError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| r[idx]).collect())
    }

    /// Arithmetic mean of a column (`NaN` for an empty table).
    pub fn mean(&self, name: &str) -> Result<f64, DataError> {
        let values = self.column(name)?;
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Minimum of a column (`+inf` for an empty table).
    pub fn min(&self, name: &str) -> Result<f64, DataError> {
        Ok(self.column(name)?.into_iter().fold(f64::INFINITY, f64::min))
    }

    /// Maximum of a column (`-inf` for an empty table).
    pub fn max(&self, name: &str) -> Result<f64, DataError> {
        Ok(self
            .column(name)?
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max))
    }

    /// Split into a feature matrix (every column except `target`, original
    /// order) and the target vector.
    pub fn split_features_target(&self, target: &str) -> Result<TrainingSet, DataError> {
        let target_idx = self.column_index(target)?;

        let feature_names: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != target_idx)
            .map(|(_, c)| c.clone())
            .collect();

        let mut features = Vec::with_capacity(self.rows.len());
        let mut targets = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let x: Vec<f64> = row
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != target_idx)
                .map(|(_, v)| *v)
                .collect();
            features.push(x);
            targets.push(row[target_idx]);
        }

        Ok(TrainingSet {
            feature_names,
            features,
            targets,
        })
    }

    /// The first `n` rows restricted to `selected`, in selection order.
    /// Names that are not columns of the dataset are skipped.
    pub fn preview(&self, selected: &[String], n: usize) -> Preview {
        let picked: Vec<(String, usize)> = selected
            .iter()
            .filter_map(|name| {
                self.column_index(name)
                    .ok()
                    .map(|idx| (name.clone(), idx))
            })
            .collect();

        let rows = self
            .rows
            .iter()
            .take(n)
            .map(|row| picked.iter().map(|(_, idx)| row[*idx]).collect())
            .collect();

        Preview {
            columns: picked.into_iter().map(|(name, _)| name).collect(),
            rows,
        }
    }
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Feature/target split handed to the trainer.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    pub feature_names: Vec<String>,
    /// One feature row per sample, columns in `feature_names` order.
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

/// Column projection of the first few rows, for the preview table.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

#[cfg(test)]
pub(crate) fn sample_dataset(n_rows: usize) -> Dataset {
    let columns = ["CRIM", "ZN", "RM", "PTRATIO", "LSTAT", "MEDV"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = (0..n_rows)
        .map(|i| {
            let i = i as f64;
            vec![
                0.01 * i,
                (i * 7.0) % 25.0,
                4.0 + (i % 5.0),
                14.0 + (i % 8.0),
                30.0 - (i % 29.0),
                5.0 + (i * 3.0) % 46.0,
            ]
        })
        .collect();
    Dataset { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Dataset::new(names(&["A", "B"]), vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            DataError::RaggedRow {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn split_excludes_target_and_keeps_order() {
        let ds = sample_dataset(20);
        let set = ds.split_features_target("MEDV").unwrap();

        assert_eq!(set.feature_names, names(&["CRIM", "ZN", "RM", "PTRATIO", "LSTAT"]));
        assert_eq!(set.features.len(), 20);
        assert!(set.features.iter().all(|r| r.len() == 5));
        assert_eq!(set.targets, ds.column("MEDV").unwrap());
        assert_eq!(set.features[3][2], ds.rows[3][2]);
    }

    #[test]
    fn split_with_target_in_the_middle() {
        let ds = Dataset::new(
            names(&["A", "T", "B"]),
            vec![vec![1.0, 10.0, 2.0], vec![3.0, 20.0, 4.0]],
        )
        .unwrap();
        let set = ds.split_features_target("T").unwrap();
        assert_eq!(set.feature_names, names(&["A", "B"]));
        assert_eq!(set.features, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(set.targets, vec![10.0, 20.0]);
    }

    #[test]
    fn split_without_target_fails() {
        let ds = sample_dataset(3);
        assert_eq!(
            ds.split_features_target("PRICE").unwrap_err(),
            DataError::MissingColumn("PRICE".into())
        );
    }

    #[test]
    fn preview_default_columns_shows_ten_rows() {
        let ds = sample_dataset(50);
        let selected = names(&["RM", "PTRATIO", "LSTAT", "MEDV"]);
        let preview = ds.preview(&selected, 10);

        assert_eq!(preview.columns, selected);
        assert_eq!(preview.rows.len(), 10);
        assert!(preview.rows.iter().all(|r| r.len() == 4));
        assert_eq!(preview.rows[9][3], ds.rows[9][5]);
    }

    #[test]
    fn preview_of_short_table_shows_every_row() {
        let ds = sample_dataset(4);
        let preview = ds.preview(&names(&["MEDV"]), 10);
        assert_eq!(preview.rows.len(), 4);
    }

    #[test]
    fn preview_follows_selection_order_and_skips_unknown() {
        let ds = sample_dataset(2);
        let preview = ds.preview(&names(&["MEDV", "NOPE", "CRIM"]), 10);
        assert_eq!(preview.columns, names(&["MEDV", "CRIM"]));
        assert_eq!(preview.rows[1], vec![ds.rows[1][5], ds.rows[1][0]]);
    }

    #[test]
    fn column_statistics() {
        let ds = Dataset::new(
            names(&["A", "MEDV"]),
            vec![vec![1.0, 5.0], vec![2.0, 50.0], vec![6.0, 21.0]],
        )
        .unwrap();
        assert!((ds.mean("A").unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(ds.min("MEDV").unwrap(), 5.0);
        assert_eq!(ds.max("MEDV").unwrap(), 50.0);
        assert!(ds.mean("B").is_err());
    }
}
