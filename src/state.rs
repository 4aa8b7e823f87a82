use std::sync::Arc;

use crate::config::{
    DEFAULT_COLUMNS, DEFAULT_PRICE_RANGE, HISTOGRAM_BINS, PREVIEW_ROWS, PRICE_RANGE_MAX,
    TARGET_COLUMN,
};
use crate::data::filter::{filtered_values, Histogram, PriceRange};
use crate::data::model::{DataError, Dataset, Preview};
use crate::ml::RandomForestRegressor;
use crate::predict::{predict_price, FeatureInputs, Prediction};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Housing table (shared with the process-wide cache).
    pub dataset: Arc<Dataset>,

    /// Price model, fitted once at startup.
    pub model: RandomForestRegressor,

    /// Columns shown in the preview table, in the order they were picked.
    pub selected_columns: Vec<String>,

    /// Current slider selection on the target column.
    pub price_range: PriceRange,

    /// Slider limits: dataset minimum to the fixed upper bound.
    pub price_bounds: (f64, f64),

    /// Sidebar form values.
    pub inputs: FeatureInputs,

    /// Result of the last "Realizar Predição" click, cleared when the form
    /// changes.
    pub prediction: Option<Prediction>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, model: RandomForestRegressor) -> Result<Self, DataError> {
        let min_price = dataset.min(TARGET_COLUMN)?;
        let price_bounds = (min_price, PRICE_RANGE_MAX.max(min_price));
        let (low, high) = DEFAULT_PRICE_RANGE;
        let price_range = PriceRange::new(low, high).clamped(price_bounds.0, price_bounds.1);

        let selected_columns = DEFAULT_COLUMNS
            .iter()
            .filter(|c| dataset.column_index(c).is_ok())
            .map(|c| c.to_string())
            .collect();

        let inputs = FeatureInputs::defaults_from(&dataset)?;

        Ok(Self {
            dataset,
            model,
            selected_columns,
            price_range,
            price_bounds,
            inputs,
            prediction: None,
            status_message: None,
        })
    }

    // -- Exploration --

    pub fn is_selected(&self, column: &str) -> bool {
        self.selected_columns.iter().any(|c| c == column)
    }

    /// Add a column to the end of the selection, or remove it.
    pub fn toggle_column(&mut self, column: &str) {
        if let Some(pos) = self.selected_columns.iter().position(|c| c == column) {
            self.selected_columns.remove(pos);
        } else {
            self.selected_columns.push(column.to_string());
        }
    }

    /// Update the slider selection, clamped to the slider bounds.
    pub fn set_price_range(&mut self, low: f64, high: f64) {
        let (min, max) = self.price_bounds;
        self.price_range = PriceRange::new(low, high).clamped(min, max);
    }

    pub fn preview(&self) -> Preview {
        self.dataset.preview(&self.selected_columns, PREVIEW_ROWS)
    }

    /// Target values of the rows inside the selected price range.
    pub fn filtered_prices(&self) -> Vec<f64> {
        match filtered_values(&self.dataset, TARGET_COLUMN, &self.price_range) {
            Ok(values) => values,
            Err(e) => {
                log::error!("Filtering {TARGET_COLUMN} failed: {e}");
                Vec::new()
            }
        }
    }

    pub fn histogram(&self) -> Histogram {
        Histogram::new(&self.filtered_prices(), HISTOGRAM_BINS)
    }

    // -- Prediction --

    /// Replace the form values; a changed form hides the previous result.
    pub fn set_inputs(&mut self, inputs: FeatureInputs) {
        if inputs != self.inputs {
            self.inputs = inputs;
            self.prediction = None;
        }
    }

    pub fn predict(&mut self) {
        match predict_price(&self.model, &self.dataset, &self.inputs) {
            Ok(prediction) => {
                log::info!(
                    "Predicted price {} (model output {:.3})",
                    prediction.formatted,
                    prediction.raw
                );
                self.prediction = Some(prediction);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Prediction failed: {e:#}");
                self.prediction = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{ForestParams, RandomForestRegressor};
    use crate::predict::RiverBoundary;

    fn state() -> AppState {
        let columns: Vec<String> = [
            "CRIM", "INDUS", "CHAS", "NOX", "RM", "PTRATIO", "B", "LSTAT", "MEDV",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let rows: Vec<Vec<f64>> = (0..40)
            .map(|i| {
                let f = i as f64;
                vec![
                    0.05 * f,
                    3.0 + (i % 7) as f64,
                    (i % 2) as f64,
                    0.5,
                    4.0 + 0.1 * f,
                    15.0 + (i % 5) as f64,
                    390.0,
                    25.0 - 0.5 * f,
                    8.0 + f,
                ]
            })
            .collect();
        let dataset = Arc::new(Dataset::new(columns, rows).unwrap());
        let training = dataset.split_features_target(TARGET_COLUMN).unwrap();
        let params = ForestParams {
            n_estimators: 10,
            max_depth: Some(5),
            max_features: Some(3),
            random_state: 1,
        };
        let model = RandomForestRegressor::fit(params, &training).unwrap();
        AppState::new(dataset, model).unwrap()
    }

    #[test]
    fn starts_with_default_selection() {
        let st = state();
        assert_eq!(st.selected_columns, ["RM", "PTRATIO", "LSTAT", "MEDV"]);
        assert_eq!(st.price_bounds, (8.0, PRICE_RANGE_MAX));
        assert_eq!(st.price_range, PriceRange::new(10.0, 100.0));
        assert!(st.prediction.is_none());
    }

    #[test]
    fn toggling_columns_keeps_pick_order() {
        let mut st = state();
        st.toggle_column("PTRATIO");
        st.toggle_column("CRIM");
        assert_eq!(st.selected_columns, ["RM", "LSTAT", "MEDV", "CRIM"]);
        assert!(st.is_selected("CRIM"));
        assert!(!st.is_selected("PTRATIO"));

        let preview = st.preview();
        assert_eq!(preview.columns, st.selected_columns);
        assert_eq!(preview.rows.len(), PREVIEW_ROWS);
    }

    #[test]
    fn histogram_counts_rows_in_range() {
        let mut st = state();
        // MEDV runs 8..=47.
        assert_eq!(st.histogram().total(), 38);

        st.set_price_range(20.0, 29.0);
        assert_eq!(st.histogram().total(), 10);

        st.set_price_range(0.0, 500.0);
        assert_eq!(st.price_range, PriceRange::new(8.0, PRICE_RANGE_MAX));
        assert_eq!(st.histogram().total(), 40);
    }

    #[test]
    fn predict_then_edit_clears_result() {
        let mut st = state();
        st.predict();
        let first = st.prediction.clone().expect("prediction");
        assert!(first.formatted.starts_with("US$"));

        st.predict();
        assert_eq!(st.prediction.as_ref(), Some(&first));

        let mut inputs = st.inputs;
        inputs.chas = RiverBoundary::Nao;
        st.set_inputs(inputs);
        assert!(st.prediction.is_none());
        assert_eq!(st.inputs.chas, RiverBoundary::Nao);
    }

    #[test]
    fn missing_target_gives_an_empty_histogram() {
        let mut st = state();
        st.dataset = Arc::new(Dataset::new(vec!["RM".into()], vec![vec![6.0]]).unwrap());
        assert!(st.filtered_prices().is_empty());
        assert_eq!(st.histogram().total(), 0);
    }

    #[test]
    fn builds_from_shipped_table() {
        let dataset = crate::data::loader::get_data().unwrap();
        let training = dataset.split_features_target(TARGET_COLUMN).unwrap();
        let params = ForestParams {
            n_estimators: 5,
            max_depth: Some(4),
            max_features: Some(3),
            random_state: 42,
        };
        let model = RandomForestRegressor::fit(params, &training).unwrap();
        let mut st = AppState::new(Arc::clone(&dataset), model).unwrap();

        assert_eq!(st.selected_columns, ["RM", "PTRATIO", "LSTAT", "MEDV"]);
        assert_eq!(st.inputs.indus, dataset.mean("INDUS").unwrap());
        assert_eq!(st.inputs.rm, 1.0);
        assert_eq!(st.inputs.chas, RiverBoundary::Sim);

        st.predict();
        assert!(st.status_message.is_none());
        assert!(st.prediction.is_some());
    }

    #[test]
    fn unchanged_form_keeps_result() {
        let mut st = state();
        st.predict();
        let inputs = st.inputs;
        st.set_inputs(inputs);
        assert!(st.prediction.is_some());
    }
}
