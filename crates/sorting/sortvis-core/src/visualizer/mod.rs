//! Visualizer capability contract and the four visualizer families.
//!
//! Every family composes an [`AnimationDriver`] and supplies its own frame
//! decoration and producer choice. There is no shared base type; the trait's
//! provided methods only forward to the driver.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::canvas::{Canvas, Frame};
use crate::dataset::{Dataset, Element};
use crate::driver::{AnimationDriver, SortPhase};
use crate::outputs::DriverOutputs;

mod basic;
mod heap;
mod merge;
mod quick;

pub use basic::BasicVisualizer;
pub use heap::HeapVisualizer;
pub use merge::MergeVisualizer;
pub use quick::QuickVisualizer;

/// What a `sort()` call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStart {
    Started,
    Resumed,
    AlreadyRunning,
}

/// What a `step()` call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Applied,
    /// The step exhausted the producer.
    Completed,
    /// Not in step mode, or nothing to step.
    Ignored,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizerKind {
    Basic,
    Quick,
    Merge,
    Heap,
}

impl VisualizerKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Heap => "heap",
        }
    }
}

/// Uniform surface the orchestrator drives.
pub trait Visualizer: fmt::Debug {
    fn kind(&self) -> VisualizerKind;

    fn driver(&self) -> &AnimationDriver;

    fn driver_mut(&mut self) -> &mut AnimationDriver;

    /// Layout and family-specific markers for this visualizer's frames.
    fn decorate(&self) -> fn(&mut Frame);

    /// Start, resume, or ignore (while running). `selector` is only honored
    /// by families that offer an algorithm choice.
    fn sort(&mut self, selector: Option<Algorithm>) -> SortStart;

    /// Algorithm the next fresh `sort()` would use without a selector.
    fn algorithm(&self) -> Algorithm;

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.driver().draw(canvas, self.decorate());
    }

    fn frame(&self) -> Frame {
        self.driver().frame(self.decorate())
    }

    fn step(&mut self, canvas: &mut dyn Canvas) -> StepOutcome {
        let decorate = self.decorate();
        self.driver_mut().step(canvas, decorate)
    }

    fn stop(&mut self) -> bool {
        self.driver_mut().stop()
    }

    fn can_resume(&self) -> bool {
        self.driver().can_resume()
    }

    fn reset(&mut self, data: Option<Dataset>, canvas: &mut dyn Canvas) {
        let decorate = self.decorate();
        self.driver_mut().reset(data, canvas, decorate);
    }

    fn set_step_mode(&mut self, enabled: bool) {
        self.driver_mut().set_step_mode(enabled);
    }

    fn set_delay(&mut self, delay: Duration) {
        self.driver_mut().set_delay(delay);
    }

    fn update(&mut self, dt: Duration, canvas: &mut dyn Canvas) -> &DriverOutputs {
        let decorate = self.decorate();
        self.driver_mut().update(dt, canvas, decorate)
    }

    fn phase(&self) -> SortPhase {
        self.driver().phase()
    }

    fn is_running(&self) -> bool {
        self.driver().phase().is_running()
    }

    fn array(&self) -> &[Element] {
        self.driver().array()
    }

    fn original(&self) -> &Dataset {
        self.driver().original()
    }

    fn step_mode(&self) -> bool {
        self.driver().step_mode()
    }

    fn delay(&self) -> Duration {
        self.driver().delay()
    }

    fn steps_applied(&self) -> u64 {
        self.driver().steps_applied()
    }
}
