//! Reusable Dioxus RSX components for the dashboard.

mod aggregation_toggle;
mod category_toggles;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;

pub use aggregation_toggle::AggregationToggle;
pub use category_toggles::CategoryToggles;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;

/// Class list for a toggle control, adding `toggled` when active.
pub(crate) fn toggle_class(base: &str, active: bool) -> String {
    if active {
        format!("{} toggled", base)
    } else {
        base.to_string()
    }
}
