//! Buttons switching the weekly aggregation convention.

use super::toggle_class;
use crate::state::AppState;
use dioxus::prelude::*;
use pmd_chart::Action;
use pmd_data::Convention;

const BUTTON_STYLE: &str = "padding: 6px 12px; border: 1px solid #BDBDBD; border-radius: 4px; cursor: pointer;";
const ACTIVE_STYLE: &str = "background: #1E88E5; color: #fff; border-color: #1E88E5;";

/// One button per convention; the active one carries the `toggled` class.
#[component]
pub fn AggregationToggle() -> Element {
    let mut state = use_context::<AppState>();
    let current = state
        .dashboard
        .read()
        .as_ref()
        .map(|d| d.convention())
        .unwrap_or_default();

    let buttons: Vec<Element> = Convention::ALL
        .into_iter()
        .map(|convention| {
            let active = convention == current;
            let class = toggle_class("aggregation-toggle-btn", active);
            let style = if active {
                format!("{} {}", BUTTON_STYLE, ACTIVE_STYLE)
            } else {
                BUTTON_STYLE.to_string()
            };
            rsx! {
                button {
                    key: "{convention}",
                    class: "{class}",
                    style: "{style}",
                    onclick: move |_| state.dispatch(Action::SetConvention(convention)),
                    {convention.label()}
                }
            }
        })
        .collect();

    rsx! {
        div {
            id: "aggregationToggleContainer",
            style: "display: flex; gap: 8px; margin: 8px 0;",
            {buttons.into_iter()}
        }
    }
}
