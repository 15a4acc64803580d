//! Chart input construction.
//!
//! Each wellness metric becomes a line on the left axis and each productivity
//! activity a bar in the shared "productivity" stack on the right axis. Series
//! for hidden keys are still emitted with `hidden: true`, so toggling only
//! flips a flag and never changes data or colors.

use crate::style::Palette;
use crate::visibility::VisibilitySet;
use log::debug;
use pmd_data::AggregatedRecord;
use pmd_utils::dates::format_date;
use serde::Serialize;

/// Stack group shared by every productivity bar.
pub const PRODUCTIVITY_STACK: &str = "productivity";
/// Left axis, wellness scores.
pub const WELLNESS_AXIS: &str = "y";
/// Right axis, productivity hours.
pub const PRODUCTIVITY_AXIS: &str = "y1";

const LINE_BORDER_WIDTH: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Bar,
}

/// One Chart.js dataset. Optional style fields are left out of the JSON
/// when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    /// One value per bucket, aligned with `ChartInput::labels`
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: String,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
}

impl Series {
    /// Line color for lines, fill color for bars.
    pub fn color(&self) -> &str {
        self.border_color
            .as_deref()
            .or(self.background_color.as_deref())
            .unwrap_or_default()
    }

    pub fn is_bar(&self) -> bool {
        self.kind == SeriesKind::Bar
    }
}

/// Renderer input: bucket labels plus one series per metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartInput {
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
    /// Sum of the visible productivity values per bucket
    #[serde(skip)]
    pub visible_totals: Vec<f64>,
}

impl ChartInput {
    /// The series drawn for `key`, if the key is in the catalog.
    pub fn series(&self, key: &str) -> Option<&Series> {
        self.datasets.iter().find(|s| s.label == key)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the chart input for `aggregated` under the current visibility.
pub fn build(
    aggregated: &[AggregatedRecord],
    wellness_keys: &[String],
    productivity_keys: &[String],
    visible: &VisibilitySet,
    palette: &Palette,
) -> ChartInput {
    let labels = aggregated.iter().map(|r| format_date(&r.bucket)).collect();

    let lines = wellness_keys.iter().enumerate().map(|(idx, key)| {
        let style = palette.wellness_style(key, idx);
        Series {
            label: key.clone(),
            kind: SeriesKind::Line,
            data: aggregated.iter().map(|r| r.wellness_value(key)).collect(),
            stack: None,
            y_axis_id: WELLNESS_AXIS.to_string(),
            hidden: !visible.contains(key),
            border_color: Some(style.color),
            background_color: None,
            border_width: Some(LINE_BORDER_WIDTH),
            fill: Some(false),
            point_radius: Some(style.point_radius),
            point_hover_radius: Some(style.point_hover_radius),
            point_border_color: style.point_border_color,
            point_background_color: style.point_background_color,
        }
    });

    let bars = productivity_keys.iter().enumerate().map(|(idx, key)| Series {
        label: key.clone(),
        kind: SeriesKind::Bar,
        data: aggregated.iter().map(|r| r.productivity_value(key)).collect(),
        stack: Some(PRODUCTIVITY_STACK.to_string()),
        y_axis_id: PRODUCTIVITY_AXIS.to_string(),
        hidden: !visible.contains(key),
        border_color: None,
        background_color: Some(palette.productivity_color(key, idx)),
        border_width: None,
        fill: None,
        point_radius: None,
        point_hover_radius: None,
        point_border_color: None,
        point_background_color: None,
    });

    let datasets: Vec<Series> = lines.chain(bars).collect();
    let visible_totals = visible_totals(aggregated, productivity_keys, visible);

    debug!(
        "Built chart input: {} buckets, {} series ({} visible)",
        aggregated.len(),
        datasets.len(),
        datasets.iter().filter(|s| !s.hidden).count()
    );

    ChartInput {
        labels,
        datasets,
        visible_totals,
    }
}

/// Per bucket, the sum of productivity values whose key is visible.
pub fn visible_totals(
    aggregated: &[AggregatedRecord],
    productivity_keys: &[String],
    visible: &VisibilitySet,
) -> Vec<f64> {
    aggregated
        .iter()
        .map(|r| r.productivity_total(productivity_keys, |k| visible.contains(k)))
        .collect()
}
