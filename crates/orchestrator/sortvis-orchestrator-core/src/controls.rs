//! Control panel contract and the intents a panel sends.

use serde::{Deserialize, Serialize};

/// The only call the core makes into the control panel.
pub trait ControlPanel {
    /// Enable/disable widgets according to whether a sort is running.
    fn set_running_state(&mut self, running: bool);
}

/// One request from the control panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    Start,
    Stop,
    Reset,
    Step,
    SpeedChange { ms: u64 },
    Generate { size: usize },
    /// Algorithm id (`bubble`, `selection`, ...). Unknown ids are ignored.
    AlgorithmChange { algorithm: String },
    StepMode { enabled: bool },
    SwitchMode { mode: String },
}

impl Intent {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Panel that records every running-state change.
#[derive(Debug, Default)]
pub struct RecordingControls {
    pub history: Vec<bool>,
}

impl RecordingControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last state the core reported, if any.
    pub fn running(&self) -> Option<bool> {
        self.history.last().copied()
    }
}

impl ControlPanel for RecordingControls {
    fn set_running_state(&mut self, running: bool) {
        self.history.push(running);
    }
}
