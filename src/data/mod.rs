/// Data layer: core types, loading, and numeric conversion.
///
/// Architecture:
/// ```text
///   data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (rows of text fields)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  array    │  Dataset → ArrayView (column-major f64 grid)
///   └──────────┘
/// ```

pub mod array;
pub mod loader;
pub mod model;
