//! WASM bridge for the price chart widget
//! Exposes `FinancialChart` to JavaScript and wires DOM events to the engine

use std::rc::Rc;

use price_chart_config::ChartConfig;
use price_chart_data::{DataLoader, FetchClient, MarketEndpoint};
use price_chart_shared::{ChartResult, PhysicalPosition, PointerEvent};
use uuid::Uuid;
use wasm_bindgen::prelude::*;

pub mod chart_engine;
pub mod controls;
pub mod dom;
pub mod fullscreen;
pub mod header;
pub mod instance_manager;
pub mod listeners;
pub mod widget;

pub use chart_engine::{ChartEngine, ChartSnapshot};
pub use header::HeaderView;

use instance_manager::{not_found, ChartInstance, InstanceManager};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialized");
    }
}

#[wasm_bindgen]
pub struct FinancialChart {
    instance_id: Uuid,
}

#[wasm_bindgen]
impl FinancialChart {
    /// Create a widget that will render into the element with id `root_id`.
    /// `config_json` is merged over the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(root_id: &str, config_json: Option<String>) -> Result<FinancialChart, JsValue> {
        let config = match config_json {
            Some(json) => ChartConfig::from_json(&json)?,
            None => ChartConfig::default(),
        };
        let endpoint = MarketEndpoint::from_config(&config.api)?;
        let loader = Rc::new(DataLoader::new(endpoint, FetchClient::new()));

        let instance_id = InstanceManager::create_instance(ChartInstance {
            root_id: root_id.to_string(),
            engine: chart_engine::ChartEngine::new(config),
            loader,
            view: None,
        });
        log::info!("FinancialChart created for #{root_id}");
        Ok(FinancialChart { instance_id })
    }

    /// Build the widget DOM and load the default range.
    #[wasm_bindgen]
    pub fn init(&self) -> Result<(), JsValue> {
        Ok(widget::mount(self.instance_id)?)
    }

    #[wasm_bindgen]
    pub fn render(&self) -> Result<(), JsValue> {
        Ok(widget::render(self.instance_id)?)
    }

    #[wasm_bindgen]
    pub fn resize(&self, width: f64) -> Result<(), JsValue> {
        Ok(widget::resize(self.instance_id, width)?)
    }

    #[wasm_bindgen]
    pub fn select_range(&self, label: &str) -> Result<(), JsValue> {
        Ok(widget::select_range(self.instance_id, label)?)
    }

    #[wasm_bindgen]
    pub fn select_tab(&self, label: &str) -> Result<(), JsValue> {
        Ok(widget::select_tab(self.instance_id, label)?)
    }

    /// Returns the requested fullscreen state.
    #[wasm_bindgen]
    pub fn toggle_fullscreen(&self) -> Result<bool, JsValue> {
        Ok(widget::toggle_fullscreen(self.instance_id)?)
    }

    /// Pointer position relative to the canvas, in CSS pixels.
    #[wasm_bindgen]
    pub fn handle_mouse_move(&self, x: f64, y: f64) -> Result<(), JsValue> {
        let event = PointerEvent::CursorMoved {
            position: PhysicalPosition::new(x, y),
        };
        Ok(widget::handle_pointer(self.instance_id, event)?)
    }

    #[wasm_bindgen]
    pub fn handle_mouse_leave(&self) -> Result<(), JsValue> {
        Ok(widget::handle_pointer(self.instance_id, PointerEvent::CursorLeft)?)
    }

    #[wasm_bindgen(getter)]
    pub fn current_price(&self) -> f64 {
        self.read(|engine| engine.store().quote().current_price)
            .unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn price_change(&self) -> f64 {
        self.read(|engine| engine.store().quote().price_change)
            .unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn percentage_change(&self) -> f64 {
        self.read(|engine| engine.store().quote().percentage_change)
            .unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn selected_range(&self) -> Option<String> {
        self.read(|engine| engine.store().ui().time_range.label().to_string())
            .ok()
    }

    #[wasm_bindgen(getter)]
    pub fn selected_tab(&self) -> Option<String> {
        self.read(|engine| engine.store().ui().menu_tab.label().to_string())
            .ok()
    }

    #[wasm_bindgen(getter)]
    pub fn is_fullscreen(&self) -> bool {
        self.read(|engine| engine.store().ui().fullscreen)
            .unwrap_or_default()
    }

    /// Quote, selection and last render summary as a plain JS object.
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.read(|engine| engine.snapshot())?;
        Ok(serde_wasm_bindgen::to_value(&snapshot)?)
    }

    /// Header text and colour as a plain JS object.
    #[wasm_bindgen]
    pub fn header(&self) -> Result<JsValue, JsValue> {
        let header = self.read(|engine| engine.header())?;
        Ok(serde_wasm_bindgen::to_value(&header)?)
    }

    /// Remove the widget from the page. Pending loads are discarded.
    #[wasm_bindgen]
    pub fn destroy(&self) {
        widget::destroy(self.instance_id);
    }
}

impl FinancialChart {
    fn read<R>(&self, f: impl FnOnce(&ChartEngine) -> R) -> ChartResult<R> {
        InstanceManager::with_instance(&self.instance_id, |instance| f(&instance.engine))
            .ok_or_else(|| not_found(&self.instance_id))
    }
}
