//! Weekly aggregation of daily records.
//!
//! Records are grouped by [`bucket_key`] and each group is reduced to one
//! [`AggregatedRecord`]:
//! - wellness metrics are averaged over the whole group, so a day missing a
//!   metric counts as `0` and still counts toward the divisor;
//! - productivity activities are summed, missing days counting as `0`.
//!
//! Output is ordered by bucket date regardless of input order, and a bucket
//! only exists if at least one record landed in it.

use crate::bucket::{bucket_key, Convention};
use chrono::NaiveDate;
use log::debug;
use pmd_metrics::record::MetricValues;
use pmd_metrics::{DailyRecord, MetricsView};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One week of aggregated measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    pub bucket: NaiveDate,
    /// Group average per wellness metric
    pub wellness: MetricValues,
    /// Group sum per productivity activity
    pub productivity: MetricValues,
}

impl AggregatedRecord {
    pub fn wellness_value(&self, key: &str) -> f64 {
        self.wellness.get(key).copied().unwrap_or(0.0)
    }

    pub fn productivity_value(&self, key: &str) -> f64 {
        self.productivity.get(key).copied().unwrap_or(0.0)
    }

    /// Sum of the productivity values for the keys selected by `include`.
    pub fn productivity_total<'a, I>(&self, keys: I, include: impl Fn(&str) -> bool) -> f64
    where
        I: IntoIterator<Item = &'a String>,
    {
        keys.into_iter()
            .filter(|k| include(k.as_str()))
            .map(|k| self.productivity_value(k))
            .sum()
    }
}

/// Group `records` into weeks under `convention` and reduce each week.
///
/// Only the given keys are aggregated; every output record carries every key.
pub fn aggregate(
    records: &[DailyRecord],
    convention: Convention,
    wellness_keys: &[String],
    productivity_keys: &[String],
) -> Vec<AggregatedRecord> {
    let mut groups: BTreeMap<NaiveDate, Vec<&DailyRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(bucket_key(record.date, convention))
            .or_default()
            .push(record);
    }

    // BTreeMap iteration is ascending by bucket date
    let aggregated: Vec<AggregatedRecord> = groups
        .into_iter()
        .map(|(bucket, group)| reduce_group(bucket, &group, wellness_keys, productivity_keys))
        .collect();

    debug!(
        "Aggregated {} records into {} weekly buckets ({})",
        records.len(),
        aggregated.len(),
        convention
    );
    aggregated
}

/// Aggregate a normalized view over its own catalog.
pub fn aggregate_view(view: &MetricsView, convention: Convention) -> Vec<AggregatedRecord> {
    aggregate(
        &view.records,
        convention,
        &view.catalog.wellness,
        &view.catalog.productivity,
    )
}

fn reduce_group(
    bucket: NaiveDate,
    group: &[&DailyRecord],
    wellness_keys: &[String],
    productivity_keys: &[String],
) -> AggregatedRecord {
    let size = group.len() as f64;

    let wellness = wellness_keys
        .iter()
        .map(|key| {
            let sum: f64 = group.iter().map(|r| r.wellness_value(key)).sum();
            (key.clone(), sum / size)
        })
        .collect();

    let productivity = productivity_keys
        .iter()
        .map(|key| {
            let sum: f64 = group.iter().map(|r| r.productivity_value(key)).sum();
            (key.clone(), sum)
        })
        .collect();

    AggregatedRecord {
        bucket,
        wellness,
        productivity,
    }
}
