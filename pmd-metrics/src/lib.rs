//! Core types for daily wellness and productivity metrics.
//!
//! The dashboard payload arrives as `{ "metrics_view": [...] }`. `ingest`
//! normalizes it once into fully populated [`record::DailyRecord`]s plus the
//! [`record::MetricCatalog`] derived from the same payload, so the
//! aggregation and chart crates never deal with partial rows.

pub mod error;
pub mod ingest;
pub mod record;

pub use error::{Result, SourceError};
pub use ingest::MetricsView;
pub use record::{DailyRecord, MetricCatalog};
