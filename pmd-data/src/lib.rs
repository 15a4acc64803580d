//! Weekly bucketing and aggregation of daily metric records.
//!
//! `bucket` maps a calendar date to the date naming its week under a
//! [`bucket::Convention`]; `weekly` groups records by that key and reduces
//! each group (wellness averaged, productivity summed).

pub mod bucket;
pub mod weekly;

pub use bucket::{bucket_key, Convention};
pub use weekly::{aggregate, aggregate_view, AggregatedRecord};
