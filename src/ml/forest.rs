use std::fmt;

use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor as SmartForest, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::ModelError;
use crate::data::model::TrainingSet;

type Forest = SmartForest<f64, f64, DenseMatrix<f64>, Vec<f64>>;

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub max_depth: Option<usize>,
    /// Features examined per split; `None` means all of them.
    pub max_features: Option<usize>,
    /// Seed for bootstrap draws and feature sampling.
    pub random_state: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: None,
            max_features: None,
            random_state: 0,
        }
    }
}

impl ForestParams {
    /// Translate into smartcore parameters for a table with `n_features`
    /// columns.
    fn to_smartcore(self, n_features: usize) -> Result<RandomForestRegressorParameters, ModelError> {
        if self.n_estimators == 0 {
            return Err(ModelError::InvalidParams("n_estimators must be at least 1".into()));
        }
        if self.max_features == Some(0) {
            return Err(ModelError::InvalidParams("max_features must be at least 1".into()));
        }

        let m = self.max_features.unwrap_or(n_features).min(n_features);
        let mut params = RandomForestRegressorParameters::default()
            .with_n_trees(self.n_estimators)
            .with_m(m)
            .with_seed(self.random_state);

        if let Some(depth) = self.max_depth {
            let depth = u16::try_from(depth).map_err(|_| {
                ModelError::InvalidParams(format!("max_depth {depth} is out of range"))
            })?;
            params = params.with_max_depth(depth);
        }
        Ok(params)
    }
}

// ---------------------------------------------------------------------------
// Random forest regressor
// ---------------------------------------------------------------------------

/// smartcore random forest plus the column names it was fitted on. Inputs
/// are checked here so smartcore never sees an empty or ragged matrix.
pub struct RandomForestRegressor {
    feature_names: Vec<String>,
    params: ForestParams,
    forest: Forest,
}

impl fmt::Debug for RandomForestRegressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomForestRegressor")
            .field("feature_names", &self.feature_names)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl RandomForestRegressor {
    pub fn fit(params: ForestParams, data: &TrainingSet) -> Result<Self, ModelError> {
        let n_features = data.feature_names.len();
        let smart_params = params.to_smartcore(n_features)?;

        let n_samples = data.features.len();
        if n_samples == 0 || n_features == 0 {
            return Err(ModelError::EmptyTrainingSet);
        }
        if n_samples != data.targets.len() {
            return Err(ModelError::LengthMismatch {
                features: n_samples,
                targets: data.targets.len(),
            });
        }
        if let Some(row) = data.features.iter().find(|r| r.len() != n_features) {
            return Err(ModelError::FeatureCount {
                expected: n_features,
                got: row.len(),
            });
        }

        let x = DenseMatrix::from_2d_vec(&data.features);
        let forest = SmartForest::fit(&x, &data.targets, smart_params)
            .map_err(|e| ModelError::Fit(e.to_string()))?;

        Ok(Self {
            feature_names: data.feature_names.clone(),
            params,
            forest,
        })
    }

    /// Predict one sample; `x` must follow [`Self::feature_names`] order.
    pub fn predict(&self, x: &[f64]) -> Result<f64, ModelError> {
        let rows = vec![self.checked_row(x)?];
        self.predict_rows(&rows)?
            .first()
            .copied()
            .ok_or_else(|| ModelError::Fit("empty prediction".into()))
    }

    /// Coefficient of determination (R²) on the given rows.
    pub fn score(&self, x: &[Vec<f64>], y: &[f64]) -> Result<f64, ModelError> {
        if x.len() != y.len() {
            return Err(ModelError::LengthMismatch {
                features: x.len(),
                targets: y.len(),
            });
        }
        if y.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let rows = x
            .iter()
            .map(|row| self.checked_row(row))
            .collect::<Result<Vec<_>, _>>()?;
        let predicted = self.predict_rows(&rows)?;
        Ok(smartcore::metrics::r2(&y.to_vec(), &predicted))
    }

    /// Feature columns the model was trained on, in order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn params(&self) -> &ForestParams {
        &self.params
    }

    fn checked_row(&self, x: &[f64]) -> Result<Vec<f64>, ModelError> {
        if x.len() != self.feature_names.len() {
            return Err(ModelError::FeatureCount {
                expected: self.feature_names.len(),
                got: x.len(),
            });
        }
        Ok(x.to_vec())
    }

    fn predict_rows(&self, rows: &Vec<Vec<f64>>) -> Result<Vec<f64>, ModelError> {
        let x = DenseMatrix::from_2d_vec(rows);
        self.forest
            .predict(&x)
            .map_err(|e| ModelError::Fit(e.to_string()))
    }
}
