//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! View changes go through [`AppState::dispatch`], which updates the
//! dashboard and publishes the rebuilt chart input in one step.

use dioxus::prelude::*;
use pmd_chart::{Action, ChartInput, Dashboard};

/// Shared application state for the dashboard app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the initial fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if bring-up failed
    pub error_msg: Signal<Option<String>>,
    /// Loaded series and view state (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Chart input for the current view state
    pub chart_input: Signal<Option<ChartInput>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dashboard: Signal::new(None),
            chart_input: Signal::new(None),
        }
    }

    /// Install a freshly loaded dashboard and its initial chart input.
    pub fn load(&mut self, dashboard: Dashboard) {
        let input = dashboard.rebuild();
        self.dashboard.set(Some(dashboard));
        self.chart_input.set(Some(input));
    }

    /// Apply a view change. Ignored until a dashboard is loaded.
    pub fn dispatch(&mut self, action: Action) {
        let input = match &mut *self.dashboard.write() {
            Some(dashboard) => dashboard.dispatch(action),
            None => return,
        };
        self.chart_input.set(Some(input));
    }
}
