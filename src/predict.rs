use crate::config::{DEFAULT_ROOMS, PREDICTION_SCALE, PREDICTION_UNIT};
use crate::data::model::{DataError, Dataset};
use crate::ml::{ModelError, RandomForestRegressor};

// ---------------------------------------------------------------------------
// River boundary choice
// ---------------------------------------------------------------------------

/// "Faz limite com o rio?" select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiverBoundary {
    #[default]
    Sim,
    Nao,
}

impl RiverBoundary {
    pub const ALL: [RiverBoundary; 2] = [RiverBoundary::Sim, RiverBoundary::Nao];

    pub fn label(self) -> &'static str {
        match self {
            RiverBoundary::Sim => "Sim",
            RiverBoundary::Nao => "Não",
        }
    }

    /// Value of the CHAS feature.
    pub fn as_feature(self) -> f64 {
        match self {
            RiverBoundary::Sim => 1.0,
            RiverBoundary::Nao => 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Feature input vector
// ---------------------------------------------------------------------------

/// The eight values entered in the sidebar form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureInputs {
    pub crim: f64,
    pub indus: f64,
    pub chas: RiverBoundary,
    pub nox: f64,
    pub rm: f64,
    pub ptratio: f64,
    pub b: f64,
    pub lstat: f64,
}

impl FeatureInputs {
    /// Column means of the dataset, except `rm` (literal default) and `chas`
    /// (first option).
    pub fn defaults_from(dataset: &Dataset) -> Result<Self, DataError> {
        Ok(Self {
            crim: dataset.mean("CRIM")?,
            indus: dataset.mean("INDUS")?,
            chas: RiverBoundary::default(),
            nox: dataset.mean("NOX")?,
            rm: DEFAULT_ROOMS,
            ptratio: dataset.mean("PTRATIO")?,
            b: dataset.mean("B")?,
            lstat: dataset.mean("LSTAT")?,
        })
    }

    /// `(column, value)` pairs in form order.
    pub fn named_values(&self) -> [(&'static str, f64); 8] {
        [
            ("CRIM", self.crim),
            ("INDUS", self.indus),
            ("CHAS", self.chas.as_feature()),
            ("NOX", self.nox),
            ("RM", self.rm),
            ("PTRATIO", self.ptratio),
            ("B", self.b),
            ("LSTAT", self.lstat),
        ]
    }

    /// Build a full feature row in `feature_names` order. Columns the form
    /// does not cover take their dataset mean.
    pub fn to_feature_vector(
        &self,
        feature_names: &[String],
        dataset: &Dataset,
    ) -> Result<Vec<f64>, DataError> {
        let named = self.named_values();
        feature_names
            .iter()
            .map(|name| match named.iter().find(|(col, _)| *col == name.as_str()) {
                Some((_, value)) => Ok(*value),
                None => dataset.mean(name),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

/// A model output together with its display form.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub raw: f64,
    pub formatted: String,
}

/// Run the model on the form values.
pub fn predict_price(
    model: &RandomForestRegressor,
    dataset: &Dataset,
    inputs: &FeatureInputs,
) -> Result<Prediction, ModelError> {
    let x = inputs.to_feature_vector(model.feature_names(), dataset)?;
    let raw = model.predict(&x)?;
    let formatted = format_currency(scale_prediction(raw));
    log::debug!("Predicted {raw:.4} for {x:?} → {formatted}");
    Ok(Prediction { raw, formatted })
}

/// `round(raw * PREDICTION_SCALE, 2) * PREDICTION_UNIT`. The rounding works
/// on the exact decimal value of the float with ties to even, so a product
/// stored as `99.98499…` becomes `99.98`.
pub fn scale_prediction(raw: f64) -> f64 {
    let scaled = raw * PREDICTION_SCALE;
    let rounded = format!("{scaled:.2}").parse::<f64>().unwrap_or(scaled);
    rounded * PREDICTION_UNIT
}

/// US-style currency: `US$1,234,567.89`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("US${sign}{grouped}.{frac_part}")
}
