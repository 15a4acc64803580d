//! Chart dataset builder and dashboard controller for weekly metrics.
//!
//! This crate provides:
//! - `dataset`: turns aggregated weeks into the Chart.js `{ labels, datasets }` input
//! - `style`: per-series colors and point styling
//! - `annotation`: on-chart labels for stacked bar segments and visible totals
//! - `dashboard`: the view state (convention + visible keys) and `dispatch`/`rebuild`
//! - `config` and `options`: dashboard defaults and Chart.js options

pub mod annotation;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod options;
pub mod style;
pub mod visibility;

pub use annotation::{
    annotate, Annotation, AnnotationSource, BarAnchor, BarLayout, LayoutSnapshot,
};
pub use config::DashboardConfig;
pub use dashboard::{Action, Dashboard, ViewState};
pub use dataset::{build, ChartInput, Series, SeriesKind};
pub use style::Palette;
pub use visibility::VisibilitySet;
