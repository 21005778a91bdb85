//! Chart.js rendering for dashboard charts.
//!
//! Chart.js is loaded as a global `Chart` constructor from `index.html`.
//! Configs are built as JSON, converted with `serde_wasm_bindgen`, and the
//! axis tick callbacks are attached afterwards as JS functions.

use contracts::shared::chart::{ChartBackend, ChartName, ChartSeries};
use contracts::shared::number_format::NumberLocale;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_json::{json, Value};
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

/// DOM id of the canvas a chart is drawn on.
pub fn canvas_id(name: ChartName) -> &'static str {
    match name {
        ChartName::DailySales => "d400-daily-sales-chart",
        ChartName::AverageOrder => "d400-average-order-chart",
        ChartName::SeasonPerformance => "d401-season-performance-chart",
    }
}

struct DatasetStyle {
    color: &'static str,
    background: &'static str,
    fill: bool,
}

const BLUE: DatasetStyle = DatasetStyle {
    color: "#3b82f6",
    background: "rgba(59, 130, 246, 0.1)",
    fill: false,
};
const GREEN: DatasetStyle = DatasetStyle {
    color: "#10b981",
    background: "rgba(16, 185, 129, 0.1)",
    fill: false,
};
const BLUE_FILLED: DatasetStyle = DatasetStyle { fill: true, ..BLUE };
const GRAY: DatasetStyle = DatasetStyle {
    color: "#9ca3af",
    background: "rgba(156, 163, 175, 0.1)",
    fill: false,
};

fn palette(name: ChartName) -> [DatasetStyle; 2] {
    match name {
        ChartName::AverageOrder => [BLUE_FILLED, GRAY],
        ChartName::DailySales | ChartName::SeasonPerformance => [BLUE, GREEN],
    }
}

/// Chart.js line chart config, without the tick callback.
pub fn chart_config(name: ChartName, data: &ChartSeries) -> Value {
    let point_radius = if name == ChartName::AverageOrder { 4 } else { 5 };
    let datasets: Vec<Value> = data
        .series()
        .iter()
        .zip(palette(name))
        .map(|(series, style)| {
            json!({
                "label": series.name,
                "data": series.values,
                "borderColor": style.color,
                "backgroundColor": style.background,
                "borderWidth": 3,
                "fill": style.fill,
                "tension": 0.4,
                "pointBackgroundColor": style.color,
                "pointBorderColor": "#ffffff",
                "pointBorderWidth": 2,
                "pointRadius": point_radius,
            })
        })
        .collect();

    let legend = if name == ChartName::AverageOrder {
        json!({ "display": false })
    } else {
        json!({
            "display": true,
            "position": "top",
            "labels": { "usePointStyle": true, "padding": 20, "font": { "size": 12 } }
        })
    };

    json!({
        "type": "line",
        "data": { "labels": data.labels(), "datasets": datasets },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": legend },
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "grid": { "color": "#e2e8f0" },
                    "ticks": {}
                },
                "x": { "grid": { "display": false } }
            },
            "interaction": { "intersect": false, "mode": "index" }
        }
    })
}

/// Body of the y-axis tick callback; its argument is `value`.
pub fn tick_callback_body(name: ChartName, locale: &NumberLocale) -> String {
    let prefix = js_string(&locale.currency_prefix);
    let suffix = js_string(&locale.currency_suffix);
    match name {
        ChartName::AverageOrder => format!(
            "return {} + value.toLocaleString() + {};",
            prefix, suffix
        ),
        ChartName::DailySales | ChartName::SeasonPerformance => {
            format!("return {} + (value / 1000) + 'K' + {};", prefix, suffix)
        }
    }
}

fn js_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "''".to_string())
}

/// Whether the `Chart` global has been loaded.
pub fn is_available() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str("Chart")).ok())
        .map(|value| value.is_function())
        .unwrap_or(false)
}

/// Draws charts with Chart.js. Handles are the `Chart` instances.
pub struct ChartJsBackend {
    locale: NumberLocale,
}

impl ChartJsBackend {
    pub fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    fn try_create(&self, name: ChartName, data: &ChartSeries) -> Result<JsValue, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("document not available"))?;
        let canvas = document
            .get_element_by_id(canvas_id(name))
            .ok_or_else(|| JsValue::from_str("canvas not found"))?;

        let constructor = Reflect::get(&window, &JsValue::from_str("Chart"))?;
        if !constructor.is_function() {
            return Err(JsValue::from_str("Chart is not loaded"));
        }
        let constructor: Function = constructor.dyn_into()?;

        let config = chart_config(name, data)
            .serialize(&Serializer::json_compatible())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let ticks = get_path(&config, &["options", "scales", "y", "ticks"])?;
        let callback = Function::new_with_args("value", &tick_callback_body(name, &self.locale));
        Reflect::set(&ticks, &JsValue::from_str("callback"), &callback)?;

        Reflect::construct(&constructor, &Array::of2(&canvas, &config))
    }
}

fn get_path(root: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    path.iter().try_fold(root.clone(), |node, key| {
        Reflect::get(&node, &JsValue::from_str(key))
    })
}

impl ChartBackend for ChartJsBackend {
    type Handle = JsValue;

    fn create(&mut self, name: ChartName, data: &ChartSeries) -> Option<JsValue> {
        match self.try_create(name, data) {
            Ok(chart) => {
                log::debug!("chart '{}' created", name.as_str());
                Some(chart)
            }
            Err(err) => {
                log::warn!("chart '{}' not created: {:?}", name.as_str(), err);
                None
            }
        }
    }

    fn destroy(&mut self, handle: JsValue) {
        let result = Reflect::get(&handle, &JsValue::from_str("destroy"))
            .and_then(|destroy| destroy.dyn_into::<Function>())
            .and_then(|destroy| destroy.call0(&handle));
        if let Err(err) = result {
            log::warn!("failed to destroy chart: {:?}", err);
        }
    }
}
