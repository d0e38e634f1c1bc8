//! Tooltip engine exposed to the chart renderer running in JavaScript

use dashchart_config::{ConfigValidator, PresetManager};
use dashchart_shared::{SeriesPoint, SeriesValue, TooltipInput, TooltipSettings};
use dashchart_tooltip::{
    apply_placement, compute_position, Formatters, TooltipFormatter, TooltipOption,
};
use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom::{read_geometry, DomArrow};
use crate::to_js_error;

/// Formatter and position callbacks for one chart
#[wasm_bindgen]
pub struct TooltipEngine {
    settings: TooltipSettings,
    filter: Option<Function>,
    value_formatter: Option<Function>,
    name_formatter: Option<Function>,
    marker_formatter: Option<Function>,
    formatter: TooltipFormatter,
}

#[wasm_bindgen]
impl TooltipEngine {
    /// Create an engine from a settings object; `undefined` uses the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<TooltipEngine, JsValue> {
        let settings: TooltipSettings = if settings.is_undefined() || settings.is_null() {
            TooltipSettings::default()
        } else {
            serde_wasm_bindgen::from_value(settings)
                .map_err(|e| to_js_error("TooltipEngine", "new", e))?
        };
        ConfigValidator::validate_tooltip(&settings)
            .map_err(|e| to_js_error("TooltipEngine", "new", e))?;

        Ok(Self::with_settings(settings))
    }

    /// Create an engine from a named preset
    #[wasm_bindgen(js_name = fromPreset)]
    pub fn from_preset(name: &str) -> Result<TooltipEngine, JsValue> {
        let settings = PresetManager::new()
            .get(name)
            .cloned()
            .ok_or_else(|| to_js_error("TooltipEngine", "fromPreset", format!("Unknown preset: {name}")))?;

        Ok(Self::with_settings(settings))
    }

    /// `filter(value, params) -> boolean`
    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&mut self, filter: Function) {
        self.filter = Some(filter);
        self.rebuild();
    }

    /// `valueFormatter(value, seriesName, params) -> string`
    #[wasm_bindgen(js_name = setValueFormatter)]
    pub fn set_value_formatter(&mut self, formatter: Function) {
        self.value_formatter = Some(formatter);
        self.rebuild();
    }

    /// `nameFormatter(name) -> string`
    #[wasm_bindgen(js_name = setNameFormatter)]
    pub fn set_name_formatter(&mut self, formatter: Function) {
        self.name_formatter = Some(formatter);
        self.rebuild();
    }

    /// `markerFormatter(marker, seriesName) -> string`
    #[wasm_bindgen(js_name = setMarkerFormatter)]
    pub fn set_marker_formatter(&mut self, formatter: Function) {
        self.marker_formatter = Some(formatter);
        self.rebuild();
    }

    /// Tooltip HTML for the renderer's formatter callback
    pub fn format(&self, params: JsValue) -> Result<String, JsValue> {
        let input: TooltipInput = serde_wasm_bindgen::from_value(params)
            .map_err(|e| to_js_error("TooltipEngine", "format", e))?;
        Ok(self.formatter.format(&input))
    }

    /// Position callback: places the tooltip above the cursor, moves the
    /// arrow and returns `{left, top}` for the renderer.
    pub fn position(
        &self,
        cursor_x: f64,
        cursor_y: f64,
        tooltip: &HtmlElement,
    ) -> Result<JsValue, JsValue> {
        let geometry = read_geometry(cursor_x, cursor_y, tooltip);
        let placement = compute_position(&geometry);

        match DomArrow::find(tooltip) {
            Some(mut arrow) => apply_placement(&placement, &mut arrow),
            None => log::debug!("Tooltip has no arrow element"),
        }

        #[derive(Serialize)]
        struct Position {
            left: f64,
            top: f64,
        }

        serde_wasm_bindgen::to_value(&Position {
            left: placement.left,
            top: placement.top,
        })
        .map_err(|e| to_js_error("TooltipEngine", "position", e))
    }

    /// Static tooltip option (trigger, hide delay, ...) for the renderer
    #[wasm_bindgen(js_name = chartOption)]
    pub fn chart_option(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&TooltipOption::from_settings(&self.settings))
            .map_err(|e| to_js_error("TooltipEngine", "chartOption", e))
    }
}

impl TooltipEngine {
    fn with_settings(settings: TooltipSettings) -> Self {
        let formatter = TooltipFormatter::new(settings.clone(), Formatters::new());
        Self {
            settings,
            filter: None,
            value_formatter: None,
            name_formatter: None,
            marker_formatter: None,
            formatter,
        }
    }

    fn rebuild(&mut self) {
        self.formatter = TooltipFormatter::new(self.settings.clone(), self.js_formatters());
    }

    fn js_formatters(&self) -> Formatters {
        let mut formatters = Formatters::new();

        if let Some(filter) = self.filter.clone() {
            formatters = formatters.with_filter(move |value: Option<&SeriesValue>, point: &SeriesPoint| {
                filter
                    .call2(&JsValue::NULL, &to_js(&value), &to_js(point))
                    .map(|keep| keep.is_truthy())
                    .unwrap_or_else(|err| {
                        log::error!("Tooltip filter threw: {err:?}");
                        true
                    })
            });
        }

        if let Some(value_formatter) = self.value_formatter.clone() {
            formatters = formatters.with_value_formatter(
                move |value: Option<&SeriesValue>, series: Option<&str>, point: Option<&SeriesPoint>| {
                    let args = js_sys::Array::of3(&to_js(&value), &to_js(&series), &to_js(&point));
                    call_for_string(&value_formatter, &args)
                },
            );
        }

        if let Some(name_formatter) = self.name_formatter.clone() {
            formatters = formatters.with_name_formatter(move |name: &str| {
                call_for_string(&name_formatter, &js_sys::Array::of1(&JsValue::from_str(name)))
            });
        }

        if let Some(marker_formatter) = self.marker_formatter.clone() {
            formatters =
                formatters.with_marker_formatter(move |marker: &str, series: Option<&str>| {
                    let args = js_sys::Array::of2(&JsValue::from_str(marker), &to_js(&series));
                    call_for_string(&marker_formatter, &args)
                });
        }

        formatters
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
}

fn call_for_string(function: &Function, args: &js_sys::Array) -> String {
    match function.apply(&JsValue::NULL, args) {
        Ok(result) => result.as_string().unwrap_or_default(),
        Err(err) => {
            log::error!("Tooltip formatter threw: {err:?}");
            String::new()
        }
    }
}
