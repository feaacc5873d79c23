//! sortvis-orchestrator
//!
//! Composition root of the sorting visualizer. The [`Orchestrator`] owns the
//! current visualizer, the dataset, the canvas and the control panel. It maps
//! control-panel [`Intent`]s onto visualizer calls, keeps the status line and
//! reports the running state back to the panel.
//!
//! Hosts drive time by calling [`Orchestrator::update`] once per frame.

pub mod config;
pub mod controls;
pub mod data;
pub mod registry;

use std::sync::Arc;
use std::time::Duration;

use sortvis_core::{
    Algorithm, Canvas, Dataset, DriverOutputs, Element, SortError, SortStart, StepOutcome,
    Visualizer,
};
use tracing::{debug, info, warn};

pub use crate::config::OrchestratorConfig;
pub use crate::controls::{ControlPanel, Intent, RecordingControls};
pub use crate::data::DataGenerator;
pub use crate::registry::{ModeConfig, ModeRegistry, VisualizerFactory};

#[derive(Debug)]
pub struct Orchestrator<C: Canvas, P: ControlPanel> {
    cfg: OrchestratorConfig,
    registry: Arc<ModeRegistry>,
    canvas: C,
    controls: P,
    mode: String,
    title: String,
    status: String,
    data: Dataset,
    visualizer: Option<Box<dyn Visualizer>>,
    algorithm: Algorithm,
    step_mode: bool,
    delay_ms: u64,
    generator: DataGenerator,
}

impl<C: Canvas, P: ControlPanel> Orchestrator<C, P> {
    /// Orchestrator over the process-wide mode registry.
    pub fn new(cfg: OrchestratorConfig, canvas: C, controls: P) -> Result<Self, SortError> {
        Self::with_registry(cfg, ModeRegistry::shared(), canvas, controls)
    }

    /// Generates the startup dataset and switches to `cfg.initial_mode`.
    pub fn with_registry(
        cfg: OrchestratorConfig,
        registry: Arc<ModeRegistry>,
        canvas: C,
        controls: P,
    ) -> Result<Self, SortError> {
        cfg.validate()?;
        if !registry.contains(&cfg.initial_mode) {
            return Err(SortError::UnknownMode(cfg.initial_mode.clone()));
        }
        let mut generator = DataGenerator::new(cfg.value_min, cfg.value_max, cfg.seed)?;
        let data = generator.generate(cfg.default_data_size);
        let delay_ms = cfg.clamp_delay(cfg.driver.delay_ms);
        let initial_mode = cfg.initial_mode.clone();

        let mut orchestrator = Self {
            cfg,
            registry,
            canvas,
            controls,
            mode: String::new(),
            title: String::new(),
            status: String::new(),
            data,
            visualizer: None,
            algorithm: Algorithm::default(),
            step_mode: false,
            delay_ms,
            generator,
        };
        orchestrator.switch_mode(&initial_mode);
        Ok(orchestrator)
    }

    // ── Intents ─────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "dispatch");
        match intent {
            Intent::Start => self.start(),
            Intent::Stop => self.stop(),
            Intent::Reset => self.reset(),
            Intent::Step => self.step(),
            Intent::SpeedChange { ms } => self.change_speed(ms),
            Intent::Generate { size } => self.generate(size),
            Intent::AlgorithmChange { algorithm } => match algorithm.parse::<Algorithm>() {
                Ok(algorithm) => self.change_algorithm(algorithm),
                Err(err) => warn!(%err, "algorithm change ignored"),
            },
            Intent::StepMode { enabled } => self.set_step_mode(enabled),
            Intent::SwitchMode { mode } => self.switch_mode(&mode),
        }
    }

    /// Replace the active visualizer. Unknown ids are ignored.
    pub fn switch_mode(&mut self, id: &str) {
        let registry = Arc::clone(&self.registry);
        let Some(mode) = registry.get(id) else {
            warn!(mode = id, "unknown mode ignored");
            return;
        };

        if let Some(current) = self.visualizer.as_mut() {
            current.stop();
        }
        self.visualizer = None;
        self.mode = mode.id.clone();
        self.title = mode.title.clone();

        match mode.build(mode.fit(&self.data), &self.cfg.driver) {
            Ok(mut visualizer) => {
                visualizer.set_delay(Duration::from_millis(self.delay_ms));
                visualizer.draw(&mut self.canvas);
                let len = visualizer.array().len();
                self.visualizer = Some(visualizer);
                self.status = format!("{} | Data size: {len}", self.title);
                info!(mode = id, len, held = self.data.len(), "mode switched");
            }
            Err(err) => {
                warn!(mode = id, %err, "visualizer unavailable");
                self.canvas
                    .draw_placeholder(&format!("{}\n(coming soon)", self.title));
                self.status = format!("{} - not implemented yet", self.title);
            }
        }
        self.controls.set_running_state(false);
    }

    /// Resume a paused run or start a fresh one.
    pub fn start(&mut self) {
        let choice = self.mode_config().is_some_and(|m| m.algorithm_choice);
        let Some(visualizer) = self.visualizer.as_mut() else {
            debug!("start ignored: no visualizer");
            return;
        };
        visualizer.set_step_mode(self.step_mode);
        self.controls.set_running_state(true);

        if visualizer.can_resume() {
            visualizer.sort(None);
            self.status = format!("Resumed: {}", self.title);
            return;
        }
        let started = if choice {
            visualizer.sort(Some(self.algorithm))
        } else {
            visualizer.sort(None)
        };
        if started == SortStart::Started {
            self.status = if choice {
                format!("Running: {}", self.algorithm.display_name())
            } else {
                format!("Running: {}", self.title)
            };
        }
    }

    pub fn stop(&mut self) {
        let Some(visualizer) = self.visualizer.as_mut() else {
            return;
        };
        visualizer.stop();
        self.controls.set_running_state(false);
        self.status = "Paused (press Start to resume)".to_string();
    }

    pub fn reset(&mut self) {
        let Some(visualizer) = self.visualizer.as_mut() else {
            return;
        };
        visualizer.reset(None, &mut self.canvas);
        self.controls.set_running_state(false);
        self.status = format!("Reset | Data size: {}", visualizer.array().len());
    }

    /// One manual step (step mode only).
    pub fn step(&mut self) {
        let Some(visualizer) = self.visualizer.as_mut() else {
            return;
        };
        if visualizer.step(&mut self.canvas) == StepOutcome::Completed {
            self.on_complete();
        }
    }

    pub fn change_speed(&mut self, ms: u64) {
        self.delay_ms = self.cfg.clamp_delay(ms);
        if let Some(visualizer) = self.visualizer.as_mut() {
            visualizer.set_delay(Duration::from_millis(self.delay_ms));
        }
    }

    /// New random dataset of `size` values. The active mode sees it
    /// truncated to its cap; the full dataset is kept for later switches.
    pub fn generate(&mut self, size: usize) {
        let data = self.generator.generate(size);
        let shown = self.replace_data(data);
        self.status = format!("New data generated | Size: {shown}");
    }

    /// Host-supplied dataset; handled like a generated one.
    pub fn load_data(&mut self, data: Dataset) {
        let shown = self.replace_data(data);
        self.status = format!("Data loaded | Size: {shown}");
    }

    /// Store `data` and reset the visualizer onto its fitted copy. Returns
    /// the number of values now on screen.
    fn replace_data(&mut self, data: Dataset) -> usize {
        self.data = data;
        let fitted = match self.mode_config() {
            Some(mode) => mode.fit(&self.data),
            None => self.data.clone(),
        };
        let shown = fitted.len();
        if let Some(visualizer) = self.visualizer.as_mut() {
            visualizer.reset(Some(fitted), &mut self.canvas);
        }
        self.controls.set_running_state(false);
        shown
    }

    /// Picked up by the next fresh run; a run in flight keeps its algorithm.
    pub fn change_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        if self.mode_config().is_some_and(|m| m.algorithm_choice) {
            self.status = format!("Algorithm changed: {}", algorithm.display_name());
        }
    }

    pub fn set_step_mode(&mut self, enabled: bool) {
        self.step_mode = enabled;
        if let Some(visualizer) = self.visualizer.as_mut() {
            visualizer.set_step_mode(enabled);
        }
    }

    /// Advance the active visualizer by `dt`.
    pub fn update(&mut self, dt: Duration) -> Option<&DriverOutputs> {
        let completed = match self.visualizer.as_mut() {
            Some(visualizer) => visualizer.update(dt, &mut self.canvas).completed(),
            None => return None,
        };
        if completed {
            self.on_complete();
        }
        self.visualizer.as_ref().map(|v| v.driver().outputs())
    }

    fn on_complete(&mut self) {
        self.controls.set_running_state(false);
        self.status = "Sort complete!".to_string();
        info!(mode = %self.mode, "sort complete");
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn mode_config(&self) -> Option<&ModeConfig> {
        self.registry.get(&self.mode)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Last generated or loaded dataset, before any mode cap is applied.
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Values currently on screen.
    pub fn values(&self) -> &[Element] {
        match self.visualizer.as_deref() {
            Some(visualizer) => visualizer.array(),
            None => self.data.as_slice(),
        }
    }

    pub fn visualizer(&self) -> Option<&dyn Visualizer> {
        self.visualizer.as_deref()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn step_mode(&self) -> bool {
        self.step_mode
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn registry(&self) -> &ModeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.cfg
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn controls(&self) -> &P {
        &self.controls
    }
}
