//! Canvas contract: what the core hands to a renderer.
//!
//! Bar geometry, colors and fonts are the renderer's business. A [`Frame`]
//! only says which values to show, which positions to emphasise and in which
//! role, and which layout family produced it.

use serde::{Deserialize, Serialize};

use crate::dataset::Element;
use crate::driver::SortPhase;
use crate::step::{AlgorithmStep, StepAction};

/// Drawing surface consumed by visualizers and the orchestrator.
pub trait Canvas {
    fn draw(&mut self, frame: &Frame);

    /// Replace the drawing with a centred message.
    fn draw_placeholder(&mut self, message: &str);
}

/// Layout hint, one per visualizer family.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Bars,
    Partition,
    Split,
    Tree,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightRole {
    Compare,
    Swap,
    Write,
    Pivot,
    Sorted,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub index: usize,
    pub role: HighlightRole,
}

/// One render request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub layout: Layout,
    pub values: Vec<Element>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    /// Positions known to hold their final value.
    #[serde(default)]
    pub sorted: Vec<usize>,
    pub phase: SortPhase,
    pub steps_applied: u64,
    /// Size of the heap prefix (tree layout only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heap_size: Option<usize>,
}

impl Frame {
    /// Highlights for the positions a step touched.
    pub fn highlights_for(step: &AlgorithmStep) -> Vec<Highlight> {
        let role = match step.action {
            StepAction::Compare { .. } => HighlightRole::Compare,
            StepAction::Swap { .. } => HighlightRole::Swap,
            StepAction::Write { .. } => HighlightRole::Write,
            StepAction::Pivot { .. } => HighlightRole::Pivot,
            StepAction::MarkSorted { .. } => HighlightRole::Sorted,
        };
        step.highlighted()
            .into_iter()
            .map(|index| Highlight { index, role })
            .collect()
    }
}

/// Canvas that keeps every frame; used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub frames: Vec<Frame>,
    pub placeholders: Vec<String>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.placeholders.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn draw_placeholder(&mut self, message: &str) {
        self.placeholders.push(message.to_string());
    }
}
