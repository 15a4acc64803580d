//! Typed wrappers around JS interop via `js_sys::eval()` and `web_sys`.
//!
//! The Chart.js glue lives in `assets/js/weekly-chart.js` and is evaluated
//! as globals (no ES modules) once Chart.js has loaded. Annotation placement
//! stays in Rust: the JS plugin calls back into [`AnnotationSource`] with the
//! bar layout and the generation of the data it just drew.

use anyhow::{anyhow, bail};
use pmd_chart::{AnnotationSource, ChartInput, LayoutSnapshot};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

// Embed the chart JS at compile time
static WEEKLY_CHART_JS: &str = include_str!("../assets/js/weekly-chart.js");

/// Global the JS annotation plugin calls.
const ANNOTATE_HOOK: &str = "__pmdAnnotate";

/// Poll interval while waiting for Chart.js and the container.
const POLL_INTERVAL_MS: u32 = 100;
/// Give up on Chart.js after this many polls (10 s).
const MAX_POLLS: u32 = 100;

type AnnotateFn = dyn Fn(f64, String) -> String;

thread_local! {
    static SOURCE: RefCell<AnnotationSource> = RefCell::new(AnnotationSource::default());
    // Installed once; lives for the rest of the page
    static HOOK: RefCell<Option<Closure<AnnotateFn>>> = const { RefCell::new(None) };
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('PMD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-Chart.js polling loop.
///
/// The script is stored on `window` and evaluated at global scope once
/// `Chart` exists, then its entry point is promoted to `window.*`.
/// Calling this more than once is a no-op.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__pmdChartsReady && !window.__pmdChartScript) {{ window.__pmdChartScript = {}; }}",
        serde_json::to_string(WEEKLY_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    call_js(&format!(
        r#"
        (function() {{
            if (window.__pmdChartsReady || window.__pmdChartsPolling) return;
            window.__pmdChartsPolling = true;
            var polls = 0;
            var waitForChart = setInterval(function() {{
                polls += 1;
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChart);
                    (0, eval)(window.__pmdChartScript);
                    delete window.__pmdChartScript;
                    if (typeof renderWeeklyChart !== 'undefined') window.renderWeeklyChart = renderWeeklyChart;
                    window.__pmdChartsPolling = false;
                    window.__pmdChartsReady = true;
                    console.log('PMD charts initialized');
                }} else if (polls >= {max}) {{
                    clearInterval(waitForChart);
                    window.__pmdChartsPolling = false;
                    console.error('[PMD] Chart.js did not load');
                }}
            }}, {interval});
        }})();
        "#,
        max = MAX_POLLS,
        interval = POLL_INTERVAL_MS,
    ));
}

/// Render (or update) the weekly chart in `container_id`.
///
/// Waits until the chart script is ready and the container exists, so it can
/// be called right after the component tree is built. A newer call cancels
/// a pending one, which then resolves without drawing. Fails if Chart.js has
/// not loaded after [`MAX_POLLS`] polls or the draw throws.
pub async fn render_weekly_chart(
    container_id: &str,
    generation: u64,
    data_json: &str,
    options_json: &str,
) -> anyhow::Result<()> {
    let script = render_script(container_id, generation, data_json, options_json)?;
    let promise = js_sys::eval(&script).map_err(|e| js_error("render", e))?;
    let promise: js_sys::Promise = promise.dyn_into().map_err(|e| js_error("render", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| js_error("render", e))?;
    Ok(())
}

/// The JS that waits for Chart.js and the container, then draws. Evaluates
/// to a promise; a newer script resolves the pending one with `false`.
fn render_script(
    container_id: &str,
    generation: u64,
    data_json: &str,
    options_json: &str,
) -> serde_json::Result<String> {
    // JSON string literals are valid JS string literals
    let id = serde_json::to_string(container_id)?;
    let data = serde_json::to_string(data_json)?;
    let options = serde_json::to_string(options_json)?;
    Ok(format!(
        r#"
        (function() {{
            var previous = window.__pmdRenderPending;
            if (previous) {{ clearInterval(previous.timer); previous.resolve(false); }}
            return new Promise(function(resolve, reject) {{
                var pending = {{ resolve: resolve }};
                var polls = 0;
                var finish = function() {{
                    clearInterval(pending.timer);
                    if (window.__pmdRenderPending === pending) window.__pmdRenderPending = null;
                }};
                pending.timer = setInterval(function() {{
                    polls += 1;
                    if (window.__pmdChartsReady &&
                        typeof window.renderWeeklyChart !== 'undefined' &&
                        document.getElementById({id})) {{
                        finish();
                        try {{
                            window.renderWeeklyChart({id}, {data}, {options}, {generation});
                            resolve(true);
                        }} catch(e) {{ reject('renderWeeklyChart: ' + e); }}
                    }} else if (polls >= {max}) {{
                        finish();
                        reject('chart library did not load');
                    }}
                }}, {interval});
                window.__pmdRenderPending = pending;
            }});
        }})()
        "#,
        max = MAX_POLLS,
        interval = POLL_INTERVAL_MS,
    ))
}

/// Make `input` the source of on-chart annotations and return the generation
/// to render it with.
///
/// Labels are only produced once the chart reports that generation, so
/// redraws of the previous data in the meantime stay unlabeled.
pub fn install_annotator(input: ChartInput) -> u64 {
    let generation = SOURCE.with(|source| source.borrow_mut().publish(input));
    HOOK.with(|hook| {
        if hook.borrow().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            log::warn!("No global window; chart annotations disabled");
            return;
        };
        let closure = Closure::<AnnotateFn>::new(annotations_json);
        if let Err(e) =
            js_sys::Reflect::set(&window, &JsValue::from_str(ANNOTATE_HOOK), closure.as_ref())
        {
            log::warn!("Failed to install annotation hook: {:?}", e);
            return;
        }
        hook.replace(Some(closure));
    });
    generation
}

fn annotations_json(generation: f64, layout_json: String) -> String {
    let layout = match LayoutSnapshot::from_json_str(&layout_json) {
        Ok(layout) => layout,
        Err(e) => {
            log::warn!("Ignoring unreadable chart layout: {}", e);
            return "[]".to_string();
        }
    };
    let annotations = SOURCE.with(|source| source.borrow().annotate(generation as u64, &layout));
    serde_json::to_string(&annotations).unwrap_or_else(|_| "[]".to_string())
}

/// GET `url` and return the response body as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error("fetch", e))?;
    let response: Response = response.dyn_into().map_err(|e| js_error("fetch", e))?;
    if !response.ok() {
        bail!("GET {} returned HTTP {}", url, response.status());
    }

    let body = response.text().map_err(|e| js_error("read body", e))?;
    let body = JsFuture::from(body).await.map_err(|e| js_error("read body", e))?;
    body.as_string()
        .ok_or_else(|| anyhow!("GET {} returned a non-text body", url))
}

fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    match err.as_string() {
        Some(msg) => anyhow!("{} failed: {}", context, msg),
        None => anyhow!("{} failed: {:?}", context, err),
    }
}
