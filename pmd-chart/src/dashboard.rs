//! Dashboard controller.
//!
//! `Dashboard` owns the loaded series and the only mutable state of the
//! page: the aggregation convention and the visible keys. The UI calls
//! [`Dashboard::dispatch`] with an [`Action`] and renders the returned
//! [`ChartInput`]; every call re-aggregates from the raw records, so nothing
//! from a previous convention survives a switch.

use crate::config::DashboardConfig;
use crate::dataset::{build, ChartInput};
use crate::style::Palette;
use crate::visibility::VisibilitySet;
use log::debug;
use pmd_data::{aggregate_view, AggregatedRecord, Convention};
use pmd_metrics::{MetricCatalog, MetricsView};

/// What the user currently has selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub convention: Convention,
    pub visible: VisibilitySet,
}

/// A user interaction that changes the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetConvention(Convention),
    ToggleKey(String),
    Show(String),
    Hide(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    view: MetricsView,
    palette: Palette,
    state: ViewState,
}

impl Dashboard {
    pub fn new(view: MetricsView, config: &DashboardConfig) -> Self {
        Self {
            view,
            palette: config.palette(),
            state: ViewState {
                convention: config.default_convention,
                visible: config.initial_visibility(),
            },
        }
    }

    pub fn convention(&self) -> Convention {
        self.state.convention
    }

    pub fn visible(&self) -> &VisibilitySet {
        &self.state.visible
    }

    pub fn catalog(&self) -> &MetricCatalog {
        &self.view.catalog
    }

    /// The weekly series under the current convention.
    pub fn aggregated(&self) -> Vec<AggregatedRecord> {
        aggregate_view(&self.view, self.state.convention)
    }

    /// Chart input for the current state.
    pub fn rebuild(&self) -> ChartInput {
        let catalog = &self.view.catalog;
        build(
            &self.aggregated(),
            &catalog.wellness,
            &catalog.productivity,
            &self.state.visible,
            &self.palette,
        )
    }

    /// Apply `action` and return the chart input for the new state.
    pub fn dispatch(&mut self, action: Action) -> ChartInput {
        debug!("Dashboard action: {:?}", action);
        match action {
            Action::SetConvention(convention) => {
                self.state.convention = convention;
            }
            Action::ToggleKey(key) => {
                self.state.visible.toggle(&key);
            }
            Action::Show(key) => {
                self.state.visible.insert(&key);
            }
            Action::Hide(key) => {
                self.state.visible.remove(&key);
            }
        }
        self.rebuild()
    }
}
