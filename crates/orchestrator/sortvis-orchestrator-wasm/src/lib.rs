use std::time::Duration;

use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use sortvis_core::{Algorithm, Canvas, Frame};
use sortvis_orchestrator::{ControlPanel, Intent, Orchestrator, OrchestratorConfig};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Canvas backed by a JS `draw(frame)` callback.
struct JsCanvas {
    f: Function,
}

#[derive(Serialize)]
struct Placeholder<'a> {
    placeholder: &'a str,
}

impl JsCanvas {
    fn send<T: Serialize>(&self, payload: &T) {
        // A throwing callback must not poison the run; the next frame retries.
        if let Ok(value) = swb::to_value(payload) {
            let _ = self.f.call1(&JsValue::UNDEFINED, &value);
        }
    }
}

impl Canvas for JsCanvas {
    fn draw(&mut self, frame: &Frame) {
        self.send(frame);
    }

    fn draw_placeholder(&mut self, message: &str) {
        self.send(&Placeholder {
            placeholder: message,
        });
    }
}

/// Control panel backed by a JS `setRunningState(bool)` callback.
struct JsControls {
    f: Function,
}

impl ControlPanel for JsControls {
    fn set_running_state(&mut self, running: bool) {
        let _ = self.f.call1(&JsValue::UNDEFINED, &JsValue::from_bool(running));
    }
}

#[derive(Serialize)]
struct ModeInfo<'a> {
    id: &'a str,
    title: &'a str,
    max_size: Option<usize>,
    algorithm_choice: bool,
}

#[derive(Serialize)]
struct AlgorithmInfo {
    id: &'static str,
    name: &'static str,
}

#[wasm_bindgen]
pub struct SortApp {
    core: Orchestrator<JsCanvas, JsControls>,
}

#[wasm_bindgen]
impl SortApp {
    /// Create the app. `config` is a JSON object matching `OrchestratorConfig`
    /// or undefined/null for defaults. `draw` receives frames (or
    /// `{ placeholder }`), `set_running_state` receives a boolean.
    ///
    ///   new SortApp({ initial_mode: "heap" }, drawFrame, setRunning)
    #[wasm_bindgen(constructor)]
    pub fn new(
        config: JsValue,
        draw: Function,
        set_running_state: Function,
    ) -> Result<SortApp, JsError> {
        console_error_panic_hook::set_once();

        let mut cfg: OrchestratorConfig = if jsvalue_is_undefined_or_null(&config) {
            OrchestratorConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        if cfg.seed.is_none() {
            // no system clock on wasm32; ask the browser
            cfg.seed = Some((js_sys::Math::random() * 9_007_199_254_740_992.0) as u64);
        }

        let core = Orchestrator::new(
            cfg,
            JsCanvas { f: draw },
            JsControls {
                f: set_running_state,
            },
        )
        .map_err(|e| JsError::new(&format!("init error: {e}")))?;
        Ok(SortApp { core })
    }

    pub fn start(&mut self) {
        self.core.start();
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    #[wasm_bindgen(js_name = change_speed)]
    pub fn change_speed(&mut self, ms: u32) {
        self.core.change_speed(u64::from(ms));
    }

    pub fn generate(&mut self, size: u32) {
        self.core.generate(size as usize);
    }

    #[wasm_bindgen(js_name = change_algorithm)]
    pub fn change_algorithm(&mut self, id: String) -> Result<(), JsError> {
        let algorithm: Algorithm = id
            .parse()
            .map_err(|e| JsError::new(&format!("change_algorithm: {e}")))?;
        self.core.change_algorithm(algorithm);
        Ok(())
    }

    #[wasm_bindgen(js_name = set_step_mode)]
    pub fn set_step_mode(&mut self, enabled: bool) {
        self.core.set_step_mode(enabled);
    }

    #[wasm_bindgen(js_name = switch_mode)]
    pub fn switch_mode(&mut self, mode: String) {
        self.core.switch_mode(&mode);
    }

    /// Replace the dataset with host-supplied values.
    #[wasm_bindgen(js_name = load_values)]
    pub fn load_values(&mut self, values: Vec<i32>) {
        self.core.load_data(values.into());
    }

    /// Route one intent object, e.g. `{ type: "speed_change", ms: 50 }`.
    pub fn dispatch(&mut self, intent: JsValue) -> Result<(), JsError> {
        if jsvalue_is_undefined_or_null(&intent) {
            return Err(JsError::new("dispatch: intent is null/undefined"));
        }
        let intent: Intent =
            swb::from_value(intent).map_err(|e| JsError::new(&format!("intent error: {e}")))?;
        self.core.dispatch(intent);
        Ok(())
    }

    /// Advance by `dt_ms` milliseconds. Returns the driver outputs, or null
    /// when the mode has no visualizer.
    pub fn update(&mut self, dt_ms: f64) -> Result<JsValue, JsError> {
        if !dt_ms.is_finite() {
            return Err(JsError::new("update: dt_ms must be finite"));
        }
        let dt = Duration::from_secs_f64(dt_ms.max(0.0) / 1000.0);
        match self.core.update(dt) {
            Some(out) => {
                swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
            }
            None => Ok(JsValue::NULL),
        }
    }

    pub fn status(&self) -> String {
        self.core.status().to_string()
    }

    pub fn title(&self) -> String {
        self.core.title().to_string()
    }

    pub fn mode(&self) -> String {
        self.core.mode().to_string()
    }

    pub fn values(&self) -> Vec<i32> {
        self.core.values().to_vec()
    }

    /// Registered modes in menu order.
    pub fn modes(&self) -> Result<JsValue, JsError> {
        let modes: Vec<ModeInfo<'_>> = self
            .core
            .registry()
            .iter()
            .map(|m| ModeInfo {
                id: &m.id,
                title: &m.title,
                max_size: m.max_size,
                algorithm_choice: m.algorithm_choice,
            })
            .collect();
        swb::to_value(&modes).map_err(|e| JsError::new(&format!("modes error: {e}")))
    }

    /// Algorithms offered by the basic mode.
    pub fn algorithms(&self) -> Result<JsValue, JsError> {
        let list: Vec<AlgorithmInfo> = Algorithm::BASIC
            .iter()
            .map(|a| AlgorithmInfo {
                id: a.id(),
                name: a.display_name(),
            })
            .collect();
        swb::to_value(&list).map_err(|e| JsError::new(&format!("algorithms error: {e}")))
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
