//! Labels drawn over the stacked productivity bars after the renderer has
//! laid them out.
//!
//! The renderer exposes where each bar segment ended up through
//! [`BarLayout`]; this module only reads those positions. Every visible
//! segment with a positive value gets its own value label, and each bucket
//! with a positive visible total gets the total above its topmost segment.

use crate::dataset::ChartInput;
use serde::{Deserialize, Serialize};

/// Vertical gap in pixels between the topmost segment and its total label.
pub const TOTAL_LABEL_OFFSET: f64 = 14.0;

/// Screen position of one bar segment. `y` is the top edge and `base` the
/// bottom edge; smaller `y` is higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarAnchor {
    pub x: f64,
    pub y: f64,
    pub base: f64,
}

/// Read access to the renderer's final bar positions.
pub trait BarLayout {
    /// Anchor of the segment drawn for dataset `series_index` in bucket
    /// `bucket_index`, or `None` if nothing was drawn there.
    fn anchor(&self, series_index: usize, bucket_index: usize) -> Option<BarAnchor>;
}

/// Layout reported by the JS side: one entry per dataset, `null` for
/// datasets that are not visible bars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutSnapshot(pub Vec<Option<Vec<Option<BarAnchor>>>>);

impl LayoutSnapshot {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

impl BarLayout for LayoutSnapshot {
    fn anchor(&self, series_index: usize, bucket_index: usize) -> Option<BarAnchor> {
        self.0
            .get(series_index)?
            .as_ref()?
            .get(bucket_index)
            .copied()
            .flatten()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    /// Value of a single stacked segment, centered inside it
    Segment,
    /// Sum of the visible segments, above the stack
    Total,
}

/// A text label positioned in screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub bucket_index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Format hours the way every on-chart label shows them.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Compute the segment and total labels for `input` from `layout`.
///
/// Hidden series are ignored even if the layout reports anchors for them,
/// and totals come from `input.visible_totals`, never from hidden data.
pub fn annotate(input: &ChartInput, layout: &impl BarLayout) -> Vec<Annotation> {
    let bars: Vec<(usize, &[f64])> = input
        .datasets
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_bar() && !s.hidden)
        .map(|(idx, s)| (idx, s.data.as_slice()))
        .collect();

    let mut annotations = Vec::new();
    for bucket_index in 0..input.labels.len() {
        let mut top: Option<BarAnchor> = None;

        for &(series_index, data) in &bars {
            let Some(anchor) = layout.anchor(series_index, bucket_index) else {
                continue;
            };
            let value = data.get(bucket_index).copied().unwrap_or(0.0);
            if value > 0.0 {
                annotations.push(Annotation {
                    kind: AnnotationKind::Segment,
                    bucket_index,
                    text: format_hours(value),
                    x: anchor.x,
                    y: (anchor.y + anchor.base) / 2.0,
                });
            }
            if top.map_or(true, |t| anchor.y < t.y) {
                top = Some(anchor);
            }
        }

        let total = input.visible_totals.get(bucket_index).copied().unwrap_or(0.0);
        if let (true, Some(top)) = (total > 0.0, top) {
            annotations.push(Annotation {
                kind: AnnotationKind::Total,
                bucket_index,
                text: format_hours(total),
                x: top.x,
                y: top.y - TOTAL_LABEL_OFFSET,
            });
        }
    }
    annotations
}

/// The chart input a given render generation was drawn from.
///
/// Every render gets a new generation and the renderer reports which one is
/// on screen when it asks for labels. A stale generation gets no labels, so
/// totals of a new input are never placed over bars of an old one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationSource {
    generation: u64,
    input: ChartInput,
}

impl AnnotationSource {
    /// Replace the input and return the generation the renderer must report.
    pub fn publish(&mut self, input: ChartInput) -> u64 {
        self.generation += 1;
        self.input = input;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Labels for the chart drawn at `generation`, or none if it is stale.
    pub fn annotate(&self, generation: u64, layout: &impl BarLayout) -> Vec<Annotation> {
        if generation != self.generation {
            return Vec::new();
        }
        annotate(&self.input, layout)
    }
}


#[cfg(test)]
mod source_tests {
    use super::*;
    use crate::dataset::{Series, SeriesKind};

    fn bar_input(labels: &[&str], coding: Vec<f64>) -> ChartInput {
        ChartInput {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            visible_totals: coding.clone(),
            datasets: vec![Series {
                label: "coding".to_string(),
                kind: SeriesKind::Bar,
                data: coding,
                stack: Some("productivity".to_string()),
                y_axis_id: "y1".to_string(),
                hidden: false,
                border_color: None,
                background_color: Some("#444444".to_string()),
                border_width: None,
                fill: None,
                point_radius: None,
                point_hover_radius: None,
                point_border_color: None,
                point_background_color: None,
            }],
        }
    }

    fn one_bar() -> LayoutSnapshot {
        LayoutSnapshot(vec![Some(vec![Some(BarAnchor {
            x: 40.0,
            y: 100.0,
            base: 300.0,
        })])])
    }

    #[test]
    fn test_publish_advances_generation() {
        let mut source = AnnotationSource::default();
        assert_eq!(source.generation(), 0);
        assert_eq!(source.publish(bar_input(&["2024-01-05"], vec![2.0])), 1);
        assert_eq!(source.publish(bar_input(&["2024-01-05"], vec![2.0])), 2);
        assert_eq!(source.generation(), 2);
    }

    #[test]
    fn test_stale_generation_gets_no_labels() {
        let mut source = AnnotationSource::default();
        let drawn = source.publish(bar_input(&["2023-12-29"], vec![2.0]));
        // A new input is published before the renderer has swapped its data
        let pending = source.publish(bar_input(&["2024-01-07"], vec![9.0]));

        assert!(source.annotate(drawn, &one_bar()).is_empty());

        let labels = source.annotate(pending, &one_bar());
        let total = labels
            .iter()
            .find(|a| a.kind == AnnotationKind::Total)
            .unwrap();
        assert_eq!(total.text, "9.00");
        assert_eq!((total.x, total.y), (40.0, 86.0));
    }

    #[test]
    fn test_empty_source_has_no_labels() {
        let source = AnnotationSource::default();
        assert!(source.annotate(0, &one_bar()).is_empty());
    }
}
