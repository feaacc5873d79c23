//! Algorithm identifiers, display names and producer construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::Element;
use crate::error::SortError;
use crate::producer::{
    bubble::BubbleCursor, heap::HeapCursor, insertion::InsertionCursor, merge::MergeCursor,
    quick::QuickCursor, selection::SelectionCursor, CursorProducer, StepProducer,
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Quick,
        Self::Merge,
        Self::Heap,
    ];

    /// Algorithms offered by the multi-algorithm (basic) visualizer.
    pub const BASIC: [Algorithm; 3] = [Self::Bubble, Self::Selection, Self::Insertion];

    #[inline]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Heap => "heap",
        }
    }

    #[inline]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
            Self::Heap => "Heap Sort",
        }
    }

    /// Fresh producer over a private copy of `data`.
    pub fn producer(&self, data: &[Element]) -> Box<dyn StepProducer> {
        match self {
            Self::Bubble => Box::new(CursorProducer::new(BubbleCursor::default(), data)),
            Self::Selection => Box::new(CursorProducer::new(SelectionCursor::default(), data)),
            Self::Insertion => Box::new(CursorProducer::new(InsertionCursor::default(), data)),
            Self::Quick => Box::new(CursorProducer::new(QuickCursor::default(), data)),
            Self::Merge => Box::new(CursorProducer::new(MergeCursor::default(), data)),
            Self::Heap => Box::new(CursorProducer::new(HeapCursor::default(), data)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.id().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        assert_eq!(
            "bogo".parse::<Algorithm>(),
            Err(SortError::UnknownAlgorithm("bogo".into()))
        );
    }

    #[test]
    fn serde_uses_ids() {
        assert_eq!(
            serde_json::to_string(&Algorithm::Insertion).unwrap(),
            "\"insertion\""
        );
    }
}
