//! Dashboard configuration.
//!
//! Defaults cover the keys the dashboard was built around. An override
//! document only needs the fields it changes.

use crate::style::Palette;
use crate::visibility::VisibilitySet;
use pmd_data::Convention;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Endpoint serving `{ "metrics_view": [...] }`.
pub const DEFAULT_SOURCE_URL: &str = "/health";

/// Keys shown when the dashboard first loads.
pub const DEFAULT_VISIBLE: [&str; 7] = [
    "study_engineering_and_ml",
    "readiness_score",
    "sleep_score",
    "language_learning",
    "coding",
    "read",
    "job_activities",
];

const DEFAULT_FIXED_COLORS: [(&str, &str); 5] = [
    ("coding", "#444444"),
    ("language_learning", "#DC143C"),
    ("job_activities", "#008080"),
    ("read", "#FFA500"),
    ("study_engineering_and_ml", "#1E90FF"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub source_url: String,
    pub default_convention: Convention,
    pub default_visible: Vec<String>,
    pub fixed_colors: BTreeMap<String, String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            default_convention: Convention::default(),
            default_visible: DEFAULT_VISIBLE.iter().map(|k| k.to_string()).collect(),
            fixed_colors: DEFAULT_FIXED_COLORS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.fixed_colors.clone())
    }

    pub fn initial_visibility(&self) -> VisibilitySet {
        self.default_visible.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.source_url, "/health");
        assert_eq!(config.default_convention, Convention::WeekStartsFriday);
        assert!(config.initial_visibility().contains("sleep_score"));
        assert!(!config.initial_visibility().contains("hrv"));
        assert_eq!(config.palette().fixed("read"), Some("#FFA500"));
    }

    #[test]
    fn test_partial_override() {
        let config = DashboardConfig::from_json_str(
            r#"{"default_convention": "rolling-week-ends-sunday", "default_visible": ["coding"]}"#,
        )
        .unwrap();
        assert_eq!(config.default_convention, Convention::RollingWeekEndsSunday);
        assert_eq!(config.initial_visibility().len(), 1);
        // Untouched fields keep their defaults
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.fixed_colors.len(), 5);
    }
}
