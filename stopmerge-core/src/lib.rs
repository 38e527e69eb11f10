//! Normalization and coordinate grouping of delivery stops.
//!
//! Raw spreadsheet rows are mapped onto [`model::CanonicalRow`] values by the
//! normalizer, validated as a batch, then merged into [`model::GroupedRow`]
//! values whenever two stops share a coordinate prefix and a street number.
//! See [`pipeline::process_rows`] for the full batch operation.
pub mod algorithm;
pub mod config;
pub mod model;
pub mod pipeline;
