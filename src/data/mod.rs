/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  database.csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (schema checked here)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, derived publisher groups
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ aggregate │  value counts, dense grids, keyword top-N
///   └──────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
