//! Shared Dioxus components and Chart.js bridge for the metrics dashboard.
//!
//! This crate provides:
//! - `js_bridge`: fetch, chart rendering and the annotation hook via `js_sys`/`web_sys`
//! - `state`: reactive AppState with Dioxus Signals around a `pmd_chart::Dashboard`
//! - `components`: reusable RSX components (toggles, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
