//! AlgorithmStep: one drawable comparison or mutation event.
//!
//! Each step carries the full array snapshot *after* the event, so applying a
//! step never depends on previously applied steps. The action tells a renderer
//! which positions to emphasise and how.

use serde::{Deserialize, Serialize};

use crate::dataset::Element;

/// What happened in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepAction {
    /// Two positions were compared; the array is unchanged.
    Compare { i: usize, j: usize },
    /// Two positions exchanged their values.
    Swap { i: usize, j: usize },
    /// A value was written into a position (merge buffer write-back).
    Write { index: usize, value: Element },
    /// A position was chosen as partition pivot.
    Pivot { index: usize },
    /// A position holds its final value.
    MarkSorted { index: usize },
}

impl StepAction {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Compare { .. } => "compare",
            Self::Swap { .. } => "swap",
            Self::Write { .. } => "write",
            Self::Pivot { .. } => "pivot",
            Self::MarkSorted { .. } => "mark_sorted",
        }
    }

    /// True for actions that change array contents.
    #[inline]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Swap { .. } | Self::Write { .. })
    }

    /// Positions touched by the action, in a stable order.
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Self::Compare { i, j } | Self::Swap { i, j } => vec![i, j],
            Self::Write { index, .. } | Self::Pivot { index } | Self::MarkSorted { index } => {
                vec![index]
            }
        }
    }

    /// Apply the action as a delta. Used to cross-check snapshots.
    pub fn apply_delta(&self, array: &mut [Element]) {
        match *self {
            Self::Swap { i, j } => array.swap(i, j),
            Self::Write { index, value } => array[index] = value,
            Self::Compare { .. } | Self::Pivot { .. } | Self::MarkSorted { .. } => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmStep {
    pub action: StepAction,
    /// Array contents after this step.
    pub snapshot: Vec<Element>,
}

impl AlgorithmStep {
    pub fn new(action: StepAction, snapshot: Vec<Element>) -> Self {
        Self { action, snapshot }
    }

    /// Make `array` equal to the state this step describes.
    #[inline]
    pub fn apply(&self, array: &mut Vec<Element>) {
        array.clone_from(&self.snapshot);
    }

    #[inline]
    pub fn highlighted(&self) -> Vec<usize> {
        self.action.indices()
    }
}
