use std::path::Path;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result, bail};

use super::model::Dataset;
use crate::config::{DATA_PATH, TARGET_COLUMN};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

static DATASET: DatasetCache = DatasetCache::new();

/// The housing table at [`DATA_PATH`], read once per process.
pub fn get_data() -> Result<Arc<Dataset>> {
    DATASET.get_or_load(Path::new(DATA_PATH))
}

// ---------------------------------------------------------------------------
// Process-lifetime cache
// ---------------------------------------------------------------------------

/// Holds the first successfully loaded dataset. Later calls return the same
/// `Arc` and never touch the disk again.
pub struct DatasetCache {
    cell: OnceLock<Arc<Dataset>>,
}

impl DatasetCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Dataset>> {
        if let Some(ds) = self.cell.get() {
            return Ok(Arc::clone(ds));
        }

        let loaded = Arc::new(load_csv(path)?);
        log::info!(
            "Loaded {} rows with columns {:?} from {}",
            loaded.len(),
            loaded.columns,
            path.display()
        );
        Ok(Arc::clone(self.cell.get_or_init(|| loaded)))
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one numeric row per
/// property. The target column must be present.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if !headers.iter().any(|h| h == TARGET_COLUMN) {
        bail!("CSV missing '{TARGET_COLUMN}' column");
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let row = record
            .iter()
            .zip(&headers)
            .map(|(cell, col)| {
                cell.trim()
                    .parse::<f64>()
                    .with_context(|| format!("Row {row_no}, {col}: '{cell}' is not a number"))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const SMALL: &str = "CRIM,RM,MEDV\n0.1,6.5,24.0\n0.2,5.9,21.6\n0.03,7.1,34.7\n";

    #[test]
    fn loads_header_and_rows_in_file_order() {
        let file = write_csv(SMALL);
        let ds = load_csv(file.path()).unwrap();

        assert_eq!(ds.columns, vec!["CRIM", "RM", "MEDV"]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.rows[2], vec![0.03, 7.1, 34.7]);
    }

    #[test]
    fn cache_returns_the_same_table() {
        let file = write_csv(SMALL);
        let cache = DatasetCache::new();

        let first = cache.get_or_load(file.path()).unwrap();
        let second = cache.get_or_load(file.path()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn cache_does_not_reread_the_file() {
        let file = write_csv(SMALL);
        let path = file.path().to_path_buf();
        let cache = DatasetCache::new();

        let first = cache.get_or_load(&path).unwrap();
        drop(file);
        let second = cache.get_or_load(&path).unwrap();

        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn missing_file_is_an_error() {
        let cache = DatasetCache::new();
        let err = cache
            .get_or_load(Path::new("does/not/exist.csv"))
            .unwrap_err();
        assert!(format!("{err:#}").contains("opening CSV"));
    }

    #[test]
    fn non_numeric_cell_is_an_error() {
        let file = write_csv("CRIM,MEDV\n0.1,24.0\nabc,21.6\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("'abc' is not a number"));
    }

    #[test]
    fn short_row_is_an_error() {
        let file = write_csv("CRIM,MEDV\n0.1,24.0\n0.2\n");
        assert!(load_csv(file.path()).is_err());
    }

    #[test]
    fn missing_target_column_is_an_error() {
        let file = write_csv("CRIM,RM\n0.1,6.5\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(err.to_string().contains("MEDV"));
    }

    #[test]
    fn shipped_table_loads_through_get_data() {
        let ds = get_data().unwrap();
        assert!(Arc::ptr_eq(&ds, &get_data().unwrap()));
        assert_eq!(ds.len(), 506);
        assert_eq!(
            ds.columns,
            [
                "CRIM", "ZN", "INDUS", "CHAS", "NOX", "RM", "AGE", "DIS", "RAD", "TAX",
                "PTRATIO", "B", "LSTAT", "MEDV"
            ]
        );

        let training = ds.split_features_target(TARGET_COLUMN).unwrap();
        assert_eq!(training.feature_names.len(), 13);
        assert_eq!(training.targets.len(), 506);
    }
}
