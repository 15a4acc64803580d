//! Normalization of the raw `{ "metrics_view": [...] }` payload.
//!
//! This is the only place that looks at untyped rows. Rows that are not
//! objects, or that have no parseable `date`, are skipped. Missing or
//! non-object `wellness`/`productivity` members count as empty maps, and
//! non-numeric values count as absent. Every surviving record is zero-filled
//! over the catalog.

use crate::error::Result;
use crate::record::{DailyRecord, MetricCatalog, MetricValues};
use log::{debug, info};
use pmd_utils::dates::parse_date_prefix;
use serde_json::Value;
use std::collections::HashSet;

/// Top-level member holding the daily rows.
pub const METRICS_VIEW_KEY: &str = "metrics_view";

const DATE_KEY: &str = "date";
const WELLNESS_KEY: &str = "wellness";
const PRODUCTIVITY_KEY: &str = "productivity";

/// A normalized metrics series: dated, zero-filled records and the catalog
/// they were filled against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsView {
    pub records: Vec<DailyRecord>,
    pub catalog: MetricCatalog,
}

impl MetricsView {
    /// Build a view from already typed records, zero-filling them over `catalog`.
    pub fn new(mut records: Vec<DailyRecord>, catalog: MetricCatalog) -> Self {
        for record in &mut records {
            catalog.zero_fill(record);
        }
        Self { records, catalog }
    }

    /// Parse a response body. Only a body that is not JSON at all is an error.
    pub fn from_json_str(body: &str) -> Result<Self> {
        let payload: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&payload))
    }

    /// Normalize an already decoded payload. Never fails: an absent or
    /// non-array `metrics_view` yields an empty view.
    pub fn from_value(payload: &Value) -> Self {
        let rows: &[Value] = match payload.get(METRICS_VIEW_KEY) {
            Some(Value::Array(rows)) => rows,
            Some(other) => {
                debug!("{} is not an array ({}), treating as empty", METRICS_VIEW_KEY, kind_of(other));
                &[]
            }
            None => {
                debug!("Payload has no {}, treating as empty", METRICS_VIEW_KEY);
                &[]
            }
        };

        let catalog = derive_catalog(rows);
        let mut records = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            match normalize_row(row, &catalog) {
                Some(record) => records.push(record),
                None => debug!("Skipping {} row {}: not an object or no usable date", METRICS_VIEW_KEY, idx),
            }
        }

        let dropped = rows.len() - records.len();
        if dropped > 0 {
            info!("Dropped {} of {} {} rows", dropped, rows.len(), METRICS_VIEW_KEY);
        }
        info!(
            "Loaded {} daily records ({} wellness metrics, {} productivity activities)",
            records.len(),
            catalog.wellness.len(),
            catalog.productivity.len()
        );

        Self { records, catalog }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Wellness keys come from the first row carrying a wellness object;
/// productivity keys are the union over every row, in first-seen order.
fn derive_catalog(rows: &[Value]) -> MetricCatalog {
    let wellness = rows
        .iter()
        .find_map(|row| row.get(WELLNESS_KEY).and_then(Value::as_object))
        .map(|members| members.keys().cloned().collect())
        .unwrap_or_default();

    let mut seen = HashSet::new();
    let mut productivity = Vec::new();
    for members in rows
        .iter()
        .filter_map(|row| row.get(PRODUCTIVITY_KEY).and_then(Value::as_object))
    {
        for key in members.keys() {
            if seen.insert(key.as_str()) {
                productivity.push(key.clone());
            }
        }
    }

    MetricCatalog::new(wellness, productivity)
}

fn normalize_row(row: &Value, catalog: &MetricCatalog) -> Option<DailyRecord> {
    let members = row.as_object()?;
    let date = members
        .get(DATE_KEY)
        .and_then(Value::as_str)
        .and_then(|s| parse_date_prefix(s).ok())?;

    let mut record = DailyRecord {
        date,
        wellness: numeric_members(members.get(WELLNESS_KEY)),
        productivity: numeric_members(members.get(PRODUCTIVITY_KEY)),
    };
    catalog.zero_fill(&mut record);
    Some(record)
}

fn numeric_members(value: Option<&Value>) -> MetricValues {
    value
        .and_then(Value::as_object)
        .map(|members| {
            members
                .iter()
                .filter_map(|(k, v)| v.as_f64().map(|n| (k.clone(), n)))
                .collect()
        })
        .unwrap_or_default()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use chrono::NaiveDate;
    use serde_json::json;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_well_formed_payload() {
        let payload = json!({
            "metrics_view": [
                {"date": "2024-01-05", "wellness": {"sleep_score": 80, "readiness_score": 75}, "productivity": {"coding": 2}},
                {"date": "2024-01-06", "wellness": {"sleep_score": 60, "readiness_score": 70}, "productivity": {"read": 1.5}},
            ]
        });
        let view = MetricsView::from_value(&payload);
        assert_eq!(view.len(), 2);
        assert_eq!(view.catalog.wellness, vec!["sleep_score", "readiness_score"]);
        assert_eq!(view.catalog.productivity, vec!["coding", "read"]);
        assert_eq!(view.records[0].date, day(5));
        assert_eq!(view.records[0].productivity["read"], 0.0);
        assert_eq!(view.records[1].productivity["coding"], 0.0);
        assert_eq!(view.records[1].productivity["read"], 1.5);
    }

    #[test]
    fn test_missing_or_wrong_metrics_view() {
        assert!(MetricsView::from_value(&json!({})).is_empty());
        assert!(MetricsView::from_value(&json!({"metrics_view": null})).is_empty());
        assert!(MetricsView::from_value(&json!({"metrics_view": "nope"})).is_empty());
        let view = MetricsView::from_value(&json!({"metrics_view": []}));
        assert!(view.is_empty());
        assert!(view.catalog.is_empty());
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let payload = json!({
            "metrics_view": [
                null,
                42,
                {"wellness": {"sleep_score": 90}, "productivity": {"coding": 4}},
                {"date": "not a date", "productivity": {"read": 1}},
                {"date": "2024-01-07"},
                {"date": "2024-01-08T07:30:00Z", "wellness": "broken", "productivity": {"coding": "3", "read": 2}},
            ]
        });
        let view = MetricsView::from_value(&payload);
        assert_eq!(view.len(), 2);

        // Dateless rows still contribute catalog keys
        assert_eq!(view.catalog.wellness, vec!["sleep_score"]);
        assert_eq!(view.catalog.productivity, vec!["coding", "read"]);

        let first = &view.records[0];
        assert_eq!(first.date, day(7));
        assert_eq!(first.wellness["sleep_score"], 0.0);
        assert_eq!(first.productivity["coding"], 0.0);

        let second = &view.records[1];
        assert_eq!(second.date, day(8));
        assert_eq!(second.wellness["sleep_score"], 0.0);
        // Non-numeric values are zero-filled
        assert_eq!(second.productivity["coding"], 0.0);
        assert_eq!(second.productivity["read"], 2.0);
    }

    #[test]
    fn test_wellness_keys_from_first_row_only() {
        let payload = json!({
            "metrics_view": [
                {"date": "2024-01-05", "wellness": {"sleep_score": 80}},
                {"date": "2024-01-06", "wellness": {"sleep_score": 60, "hrv": 42}},
            ]
        });
        let view = MetricsView::from_value(&payload);
        assert_eq!(view.catalog.wellness, vec!["sleep_score"]);
        assert!(!view.records[1].wellness.contains_key("hrv"));
    }

    #[test]
    fn test_key_order_follows_payload() {
        let body = r#"{"metrics_view": [
            {"date": "2024-01-05", "wellness": {"z_score": 1, "a_score": 2}, "productivity": {"read": 1, "coding": 2}},
            {"date": "2024-01-06", "productivity": {"language_learning": 1, "coding": 1}}
        ]}"#;
        let view = MetricsView::from_json_str(body).unwrap();
        assert_eq!(view.catalog.wellness, vec!["z_score", "a_score"]);
        assert_eq!(view.catalog.productivity, vec!["read", "coding", "language_learning"]);
    }

    #[test]
    fn test_invalid_json_is_source_error() {
        let err = MetricsView::from_json_str("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SourceError::InvalidJson(_)));
    }

    #[test]
    fn test_new_zero_fills() {
        let catalog = MetricCatalog::new(vec!["sleep_score".into()], vec!["coding".into()]);
        let view = MetricsView::new(vec![DailyRecord::new(day(5))], catalog);
        assert_eq!(view.records[0].wellness["sleep_score"], 0.0);
        assert_eq!(view.records[0].productivity["coding"], 0.0);
    }
}
