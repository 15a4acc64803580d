//! Chart.js options for the weekly dashboard.

use crate::dataset::{PRODUCTIVITY_AXIS, WELLNESS_AXIS};
use serde_json::{json, Value};

pub const WELLNESS_AXIS_TITLE: &str = "Wellness Scores";
pub const PRODUCTIVITY_AXIS_TITLE: &str = "Productivity (hours)";

/// Options object passed next to the chart input.
///
/// The legend stays hidden because the category toggles below the chart
/// replace it. Bars stack on the right axis; lines use the left one.
pub fn chart_options() -> Value {
    json!({
        "responsive": true,
        "interaction": { "mode": "index", "intersect": false },
        "plugins": {
            "legend": { "display": false },
            "tooltip": { "mode": "index", "intersect": false },
        },
        "scales": {
            WELLNESS_AXIS: {
                "type": "linear",
                "position": "left",
                "title": { "display": true, "text": WELLNESS_AXIS_TITLE },
            },
            PRODUCTIVITY_AXIS: {
                "type": "linear",
                "position": "right",
                "stacked": true,
                "grid": { "drawOnChartArea": false },
                "title": { "display": true, "text": PRODUCTIVITY_AXIS_TITLE },
            },
            "x": { "stacked": true },
        },
    })
}
