//! sortvis-core (host-agnostic)
//!
//! Step producers for the supported sorting algorithms, the visualizer
//! capability contract with one implementation per algorithm family, and the
//! animation driver that turns host frame time into discrete sort steps.
//! Hosts (wasm, headless) own the clock and call `update(dt)` each frame.

pub mod algorithm;
pub mod canvas;
pub mod config;
pub mod dataset;
pub mod driver;
pub mod error;
pub mod outputs;
pub mod producer;
pub mod step;
pub mod visualizer;

// Re-exports for consumers (orchestrator, adapters)
pub use algorithm::Algorithm;
pub use canvas::{Canvas, Frame, Highlight, HighlightRole, Layout, RecordingCanvas};
pub use config::DriverConfig;
pub use dataset::{Dataset, Element};
pub use driver::{AnimationDriver, Decorate, SortPhase};
pub use error::SortError;
pub use outputs::{DriverOutputs, SortEvent};
pub use producer::StepProducer;
pub use step::{AlgorithmStep, StepAction};
pub use visualizer::{
    BasicVisualizer, HeapVisualizer, MergeVisualizer, QuickVisualizer, SortStart, StepOutcome,
    Visualizer, VisualizerKind,
};
