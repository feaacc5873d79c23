//! Dataset: the ordered values handed to a visualizer.

use serde::{Deserialize, Serialize};

/// Element type of every dataset.
pub type Element = i32;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Vec<Element>);

impl Dataset {
    pub fn new(values: Vec<Element>) -> Self {
        Self(values)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Element] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Element> {
        self.0
    }

    /// First `cap` elements, or a full copy when no cap applies.
    pub fn truncated(&self, cap: Option<usize>) -> Self {
        match cap {
            Some(cap) if cap < self.0.len() => Self(self.0[..cap].to_vec()),
            _ => self.clone(),
        }
    }

    /// True when the values are non-descending.
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }
}

impl From<Vec<Element>> for Dataset {
    fn from(values: Vec<Element>) -> Self {
        Self(values)
    }
}

impl From<&[Element]> for Dataset {
    fn from(values: &[Element]) -> Self {
        Self(values.to_vec())
    }
}
