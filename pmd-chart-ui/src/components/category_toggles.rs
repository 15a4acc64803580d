//! Per-metric show/hide toggles, grouped into Wellness and Productivity.

use super::toggle_class;
use crate::state::AppState;
use dioxus::prelude::*;
use pmd_chart::Action;

const ITEM_STYLE: &str = "padding: 4px 10px; border-radius: 12px; border: 1px solid #E0E0E0; cursor: pointer; list-style: none;";

/// Both category blocks for the loaded catalog.
#[component]
pub fn CategoryToggles() -> Element {
    let state = use_context::<AppState>();
    let catalog = state.dashboard.read().as_ref().map(|d| d.catalog().clone());
    let Some(catalog) = catalog else {
        return rsx! {};
    };

    rsx! {
        div {
            id: "categoriesSection",
            style: "display: flex; flex-wrap: wrap; gap: 24px; margin-top: 12px;",
            CategoryBlock { title: "Wellness".to_string(), keys: catalog.wellness.clone() }
            CategoryBlock { title: "Productivity".to_string(), keys: catalog.productivity.clone() }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CategoryBlockProps {
    pub title: String,
    pub keys: Vec<String>,
}

/// A titled list of keys; a visible key is filled with its series color.
#[component]
fn CategoryBlock(props: CategoryBlockProps) -> Element {
    let mut state = use_context::<AppState>();

    let entries: Vec<(String, bool, String)> = {
        let chart_input = state.chart_input.read();
        props
            .keys
            .iter()
            .map(|key| {
                let series = chart_input.as_ref().and_then(|input| input.series(key));
                let active = series.is_some_and(|s| !s.hidden);
                let color = series.map(|s| s.color().to_string()).unwrap_or_default();
                (key.clone(), active, color)
            })
            .collect()
    };

    let items: Vec<Element> = entries
        .into_iter()
        .map(|(key, active, color)| {
            let class = toggle_class("category-item", active);
            let style = if active {
                format!("{} background: {}; color: #fff;", ITEM_STYLE, color)
            } else {
                ITEM_STYLE.to_string()
            };
            let text = display_name(&key);
            let toggled_key = key.clone();
            rsx! {
                li {
                    key: "{key}",
                    class: "{class}",
                    style: "{style}",
                    onclick: move |_| state.dispatch(Action::ToggleKey(toggled_key.clone())),
                    "{text}"
                }
            }
        })
        .collect();

    rsx! {
        div {
            class: "category-block",
            div {
                class: "category-title",
                style: "font-weight: bold; margin-bottom: 6px;",
                "{props.title}"
            }
            ul {
                class: "category-list",
                style: "display: flex; flex-wrap: wrap; gap: 6px; padding: 0; margin: 0;",
                {items.into_iter()}
            }
        }
    }
}

/// `language_learning` -> `language learning`
fn display_name(key: &str) -> String {
    key.replace('_', " ")
}
