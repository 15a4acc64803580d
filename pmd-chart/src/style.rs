//! Series colors and point styling.
//!
//! Colors depend only on the key and its position in the catalog, so they
//! stay the same across rebuilds as long as the catalog order does.

use std::collections::BTreeMap;

/// Wellness metric drawn with large hollow points.
pub const READINESS_SCORE: &str = "readiness_score";
/// Wellness metric drawn with large hollow points.
pub const SLEEP_SCORE: &str = "sleep_score";

const READINESS_COLOR: &str = "#87CEFA";
const SLEEP_COLOR: &str = "#A9A9A9";
const HOLLOW_POINT_FILL: &str = "#FFFFFF";

/// Hue step between consecutive wellness lines.
pub const WELLNESS_HUE_STEP: usize = 40;
/// Hue step between consecutive productivity bars.
pub const PRODUCTIVITY_HUE_STEP: usize = 60;

const LINE_POINT_RADIUS: u32 = 3;
const LINE_POINT_HOVER_RADIUS: u32 = 5;
const HIGHLIGHT_POINT_RADIUS: u32 = 6;

/// Styling of one wellness line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStyle {
    pub color: String,
    pub point_radius: u32,
    pub point_hover_radius: u32,
    pub point_border_color: Option<String>,
    pub point_background_color: Option<String>,
}

/// Fixed colors for well-known keys; everything else gets a hue by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    fixed: BTreeMap<String, String>,
}

impl Palette {
    pub fn new(fixed: BTreeMap<String, String>) -> Self {
        Self { fixed }
    }

    pub fn fixed(&self, key: &str) -> Option<&str> {
        self.fixed.get(key).map(String::as_str)
    }

    /// Style for the wellness metric at `index` in the catalog.
    pub fn wellness_style(&self, key: &str, index: usize) -> LineStyle {
        let highlight = match key {
            READINESS_SCORE => Some(READINESS_COLOR),
            SLEEP_SCORE => Some(SLEEP_COLOR),
            _ => None,
        };

        match highlight {
            Some(color) => LineStyle {
                color: color.to_string(),
                point_radius: HIGHLIGHT_POINT_RADIUS,
                point_hover_radius: LINE_POINT_HOVER_RADIUS,
                point_border_color: Some(color.to_string()),
                point_background_color: Some(HOLLOW_POINT_FILL.to_string()),
            },
            None => LineStyle {
                color: self
                    .fixed(key)
                    .map(str::to_string)
                    .unwrap_or_else(|| hsl(index * WELLNESS_HUE_STEP, 70, 50)),
                point_radius: LINE_POINT_RADIUS,
                point_hover_radius: LINE_POINT_HOVER_RADIUS,
                point_border_color: None,
                point_background_color: None,
            },
        }
    }

    /// Fill color for the productivity activity at `index` in the catalog.
    pub fn productivity_color(&self, key: &str, index: usize) -> String {
        self.fixed(key)
            .map(str::to_string)
            .unwrap_or_else(|| hsl(index * PRODUCTIVITY_HUE_STEP, 60, 60))
    }
}

fn hsl(hue: usize, saturation: u32, lightness: u32) -> String {
    format!("hsl({}, {}%, {}%)", hue, saturation, lightness)
}
