//! Data layer: core types, loading, and row filtering.
//!
//! Architecture:
//! ```text
//!  Usa_cars_datasets.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse CSV → ListingTable, drop index, coerce year
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ ListingTable  │  typed columns, read-only after load
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  numeric predicates → row indices
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
