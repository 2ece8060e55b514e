/// Data layer: tabular types, CSV loading, and export.
///
/// Architecture:
/// ```text
///   .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + infer column types → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  named columns of cells, numeric column index
///   └──────────┘
///        │  Dataset::column(name)
///        ▼
///   ┌──────────┐
///   │  Column   │  Vec<Option<f64>>, row position preserved  ──► engine
///   └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
