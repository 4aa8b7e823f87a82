//! Model training: a smartcore random forest fitted on the housing table.

pub mod forest;

use thiserror::Error;

use crate::config::{MAX_DEPTH, MAX_FEATURES, N_ESTIMATORS, RANDOM_STATE, TARGET_COLUMN};
use crate::data::model::{DataError, Dataset};
pub use forest::{ForestParams, RandomForestRegressor};

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("cannot fit with zero samples")]
    EmptyTrainingSet,
    #[error("{features} feature rows but {targets} targets")]
    LengthMismatch { features: usize, targets: usize },
    #[error("expected {expected} features, got {got}")]
    FeatureCount { expected: usize, got: usize },
    #[error("invalid hyperparameters: {0}")]
    InvalidParams(String),
    #[error("random forest failed: {0}")]
    Fit(String),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Hyperparameters used by the application.
pub fn app_forest_params() -> ForestParams {
    ForestParams {
        n_estimators: N_ESTIMATORS,
        max_depth: Some(MAX_DEPTH),
        max_features: Some(MAX_FEATURES),
        random_state: RANDOM_STATE,
    }
}

/// Fit the price model on every non-target column of `dataset`.
pub fn train_model(dataset: &Dataset) -> Result<RandomForestRegressor, ModelError> {
    let training = dataset.split_features_target(TARGET_COLUMN)?;
    let model = RandomForestRegressor::fit(app_forest_params(), &training)?;

    if let Ok(r2) = model.score(&training.features, &training.targets) {
        log::info!(
            "Trained {} trees on {} rows × {} features (in-sample R² {r2:.3})",
            model.params().n_estimators,
            training.features.len(),
            training.feature_names.len()
        );
    }
    Ok(model)
}
