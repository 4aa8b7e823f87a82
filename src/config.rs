// ---------------------------------------------------------------------------
// Application constants
// ---------------------------------------------------------------------------

/// Location of the housing table, relative to the working directory.
pub const DATA_PATH: &str = "data/data.csv";

/// Column predicted by the model (median home value, in $1000s).
pub const TARGET_COLUMN: &str = "MEDV";

/// Columns preselected in the exploration multi-select.
pub const DEFAULT_COLUMNS: [&str; 4] = ["RM", "PTRATIO", "LSTAT", "MEDV"];

/// Rows shown in the preview table.
pub const PREVIEW_ROWS: usize = 10;

/// Upper bound of the price slider. The lower bound is the dataset minimum.
pub const PRICE_RANGE_MAX: f64 = 150.0;

/// Initial `(low, high)` price selection.
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (10.0, 100.0);

/// Number of histogram bins.
pub const HISTOGRAM_BINS: usize = 100;

// -- Random forest hyperparameters --

pub const N_ESTIMATORS: usize = 200;
pub const MAX_DEPTH: usize = 7;
pub const MAX_FEATURES: usize = 3;

/// Seed for bootstrap sampling and feature selection, so the model (and every
/// prediction made with the default inputs) is the same on every start.
pub const RANDOM_STATE: u64 = 42;

// -- Prediction output --

/// Raw model output is multiplied by this factor, then rounded to cents.
pub const PREDICTION_SCALE: f64 = 10.0;

/// Unit multiplier applied after rounding.
pub const PREDICTION_UNIT: f64 = 1000.0;

/// Literal default for the room count input.
pub const DEFAULT_ROOMS: f64 = 1.0;
