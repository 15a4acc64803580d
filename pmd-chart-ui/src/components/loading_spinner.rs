//! Loading spinner component.

use dioxus::prelude::*;

/// Shown while the metrics are being fetched.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading metrics..."
        }
    }
}
