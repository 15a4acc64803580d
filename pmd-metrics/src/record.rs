use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metric name to value for one day (or one aggregated week).
pub type MetricValues = BTreeMap<String, f64>;

/// One day of measurements.
///
/// Wellness values are point-in-time scores (typically 0-100), productivity
/// values are durations in hours. Records produced by ingestion are always
/// dated and zero-filled over the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub wellness: MetricValues,
    pub productivity: MetricValues,
}

impl DailyRecord {
    /// Create a record for `date` with no measurements.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            wellness: MetricValues::new(),
            productivity: MetricValues::new(),
        }
    }

    pub fn with_wellness(mut self, key: &str, value: f64) -> Self {
        self.wellness.insert(key.to_string(), value);
        self
    }

    pub fn with_productivity(mut self, key: &str, value: f64) -> Self {
        self.productivity.insert(key.to_string(), value);
        self
    }

    /// Wellness value for `key`, `0.0` when absent.
    pub fn wellness_value(&self, key: &str) -> f64 {
        self.wellness.get(key).copied().unwrap_or(0.0)
    }

    /// Productivity value for `key`, `0.0` when absent.
    pub fn productivity_value(&self, key: &str) -> f64 {
        self.productivity.get(key).copied().unwrap_or(0.0)
    }
}

/// The wellness metric names and productivity activity names present in a
/// series, in first-seen order. The order is what keeps series ordering and
/// color assignment stable across rebuilds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCatalog {
    pub wellness: Vec<String>,
    pub productivity: Vec<String>,
}

impl MetricCatalog {
    pub fn new(wellness: Vec<String>, productivity: Vec<String>) -> Self {
        Self {
            wellness,
            productivity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wellness.is_empty() && self.productivity.is_empty()
    }

    /// Make the record's maps total over this catalog: every catalog key is
    /// present (missing ones become `0.0`) and keys outside the catalog are
    /// dropped.
    pub fn zero_fill(&self, record: &mut DailyRecord) {
        record.wellness = fill(&self.wellness, &record.wellness);
        record.productivity = fill(&self.productivity, &record.productivity);
    }
}

fn fill(keys: &[String], values: &MetricValues) -> MetricValues {
    keys.iter()
        .map(|k| (k.clone(), values.get(k).copied().unwrap_or(0.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MetricCatalog {
        MetricCatalog::new(
            vec!["sleep_score".to_string(), "readiness_score".to_string()],
            vec!["coding".to_string(), "read".to_string()],
        )
    }

    #[test]
    fn test_zero_fill_makes_maps_total() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let mut record = DailyRecord::new(date)
            .with_wellness("sleep_score", 80.0)
            .with_wellness("hrv", 40.0)
            .with_productivity("coding", 2.5);
        catalog().zero_fill(&mut record);

        assert_eq!(record.wellness.len(), 2);
        assert_eq!(record.wellness["sleep_score"], 80.0);
        assert_eq!(record.wellness["readiness_score"], 0.0);
        assert!(!record.wellness.contains_key("hrv"));
        assert_eq!(record.productivity["coding"], 2.5);
        assert_eq!(record.productivity["read"], 0.0);
    }

    #[test]
    fn test_value_lookups_default_to_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let record = DailyRecord::new(date).with_productivity("coding", 1.0);
        assert_eq!(record.productivity_value("coding"), 1.0);
        assert_eq!(record.productivity_value("read"), 0.0);
        assert_eq!(record.wellness_value("sleep_score"), 0.0);
    }

    #[test]
    fn test_catalog_keeps_key_order() {
        let catalog = catalog();
        assert_eq!(catalog.wellness, vec!["sleep_score", "readiness_score"]);
        assert_eq!(catalog.productivity, vec!["coding", "read"]);
        assert!(!catalog.is_empty());
        assert!(MetricCatalog::default().is_empty());
        assert!(!MetricCatalog::new(Vec::new(), vec!["read".to_string()]).is_empty());
    }
}
