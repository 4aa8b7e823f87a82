/// Data layer: table type, loading, and range filtering.
///
/// Architecture:
/// ```text
///   data/data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (cached for the process)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  columns + numeric rows, feature/target split
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  price range → filtered rows → histogram
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
