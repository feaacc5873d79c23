//! Output contracts of the animation driver.
//!
//! Outputs carry the steps applied during one call and a separate list of
//! semantic events. Hosts read them after every `update()`.

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::step::AlgorithmStep;

/// Discrete signals emitted by the driver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum SortEvent {
    Started {
        algorithm: Algorithm,
    },
    Resumed,
    Paused,
    /// Producer exhausted. Emitted once per run.
    Completed {
        algorithm: Algorithm,
        steps: u64,
    },
    Reset,
}

/// Filled by every driver `update()` and `step()` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DriverOutputs {
    #[serde(default)]
    pub steps: Vec<AlgorithmStep>,
    #[serde(default)]
    pub events: Vec<SortEvent>,
}

impl DriverOutputs {
    #[inline]
    pub fn clear(&mut self) {
        self.steps.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_step(&mut self, step: AlgorithmStep) {
        self.steps.push(step);
    }

    #[inline]
    pub fn push_event(&mut self, event: SortEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.events.is_empty()
    }

    /// True when this batch finished the run.
    pub fn completed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SortEvent::Completed { .. }))
    }
}
