//! Weekly Wellness and Productivity Dashboard
//!
//! Plots weekly averages of wellness scores (lines, left axis) against weekly
//! totals of productive hours (stacked bars, right axis). The user picks how
//! days are grouped into weeks and which metrics are shown.
//!
//! Data flow:
//! 1. On mount, the app fetches `{ "metrics_view": [...] }` from the configured
//!    source once. A failed fetch or a non-JSON body stops bring-up and shows
//!    the error.
//! 2. The payload is normalized into a `MetricsView` and wrapped in a
//!    `Dashboard`, which publishes the first chart input.
//! 3. Toggle clicks dispatch actions on the dashboard; each dispatch rebuilds
//!    the chart input, and the render effect hands it to Chart.js tagged with
//!    the annotation generation it was published under. If Chart.js never
//!    loads, the render fails and the error replaces the chart.

use dioxus::prelude::*;
use pmd_chart::options::chart_options;
use pmd_chart::{Dashboard, DashboardConfig};
use pmd_chart_ui::components::{
    AggregationToggle, CategoryToggles, ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner,
};
use pmd_chart_ui::js_bridge;
use pmd_chart_ui::state::AppState;
use pmd_metrics::{MetricsView, SourceError};

/// Chart.js, loaded from the CDN before the chart script is evaluated.
const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

/// Chart container DOM element ID used by Chart.js to render into.
const CHART_ID: &str = "dashboardChart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weekly-metrics-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch the series once on mount
    use_effect(move || {
        spawn(async move {
            let config = DashboardConfig::default();
            match load_view(&config.source_url).await {
                Ok(view) => {
                    log::info!(
                        "Loaded {} daily records from {}",
                        view.len(),
                        config.source_url
                    );
                    state.load(Dashboard::new(view, &config));
                }
                Err(e) => {
                    log::error!("Failed to load metrics: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load metrics: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // Re-render chart whenever the chart input changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let Some(input) = (state.chart_input)() else {
            return;
        };

        js_bridge::init_charts();

        let data_json = match serde_json::to_string(&input) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize chart input: {}", e);
                return;
            }
        };
        let options_json = chart_options().to_string();

        let generation = js_bridge::install_annotator(input);
        spawn(async move {
            if let Err(e) =
                js_bridge::render_weekly_chart(CHART_ID, generation, &data_json, &options_json)
                    .await
            {
                log::error!("Failed to render chart: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to render chart: {}", e)));
            }
        });
    });

    rsx! {
        document::Script { src: CHART_JS_URL }
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Weekly Wellness & Productivity".to_string(),
                axes_description: "Left axis: average wellness score. Right axis: productive hours per week.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                AggregationToggle {}

                ChartContainer {
                    id: CHART_ID.to_string(),
                    min_height: 450,
                }

                CategoryToggles {}
            }
        }
    }
}

/// Fetch and normalize the metrics payload.
async fn load_view(url: &str) -> pmd_metrics::Result<MetricsView> {
    let body = js_bridge::fetch_text(url)
        .await
        .map_err(SourceError::unavailable)?;
    MetricsView::from_json_str(&body)
}
