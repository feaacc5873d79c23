//! Step producers: lazy, finite, non-restartable step sequences.
//!
//! Every algorithm is written as an explicit cursor over a private working
//! copy. One `advance()` runs one inner-loop iteration and records the steps
//! it caused on a [`Tape`]. The producer keeps at most one iteration of
//! lookahead, which makes `is_exhausted()` exact without running ahead.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::algorithm::Algorithm;
use crate::dataset::Element;
use crate::step::{AlgorithmStep, StepAction};

pub(crate) mod bubble;
pub(crate) mod heap;
pub(crate) mod insertion;
pub(crate) mod merge;
pub(crate) mod quick;
pub(crate) mod selection;

/// Pull-based source of [`AlgorithmStep`]s for one sort run.
pub trait StepProducer: fmt::Debug {
    /// Algorithm this producer runs.
    fn algorithm(&self) -> Algorithm;

    /// Next unconsumed step, or `None` once exhausted.
    fn next_step(&mut self) -> Option<AlgorithmStep>;

    /// True when `next_step()` would return `None`.
    fn is_exhausted(&self) -> bool;
}

/// Working copy plus the steps recorded but not yet handed out.
#[derive(Debug)]
pub(crate) struct Tape {
    data: Vec<Element>,
    pending: VecDeque<AlgorithmStep>,
}

impl Tape {
    fn new(data: &[Element]) -> Self {
        Self {
            data: data.to_vec(),
            pending: VecDeque::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn slice(&self, from: usize, to: usize) -> Vec<Element> {
        self.data[from..to].to_vec()
    }

    fn record(&mut self, action: StepAction) {
        self.pending
            .push_back(AlgorithmStep::new(action, self.data.clone()));
    }

    /// Record a comparison and return `data[i].cmp(&data[j])`.
    pub(crate) fn compare(&mut self, i: usize, j: usize) -> Ordering {
        self.record(StepAction::Compare { i, j });
        self.data[i].cmp(&self.data[j])
    }

    /// Record a comparison at positions `i`, `j` of two values held outside
    /// the working copy (merge buffers) and return `a.cmp(&b)`.
    pub(crate) fn compare_buffered(
        &mut self,
        i: usize,
        j: usize,
        a: Element,
        b: Element,
    ) -> Ordering {
        self.record(StepAction::Compare { i, j });
        a.cmp(&b)
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
        self.record(StepAction::Swap { i, j });
    }

    pub(crate) fn write(&mut self, index: usize, value: Element) {
        self.data[index] = value;
        self.record(StepAction::Write { index, value });
    }

    pub(crate) fn pivot(&mut self, index: usize) {
        self.record(StepAction::Pivot { index });
    }

    pub(crate) fn mark_sorted(&mut self, index: usize) {
        self.record(StepAction::MarkSorted { index });
    }
}

/// Explicit continuation of one algorithm.
pub(crate) trait Cursor: fmt::Debug {
    const ALGORITHM: Algorithm;

    /// Run one iteration, recording its steps on `tape`.
    /// Returns false once the algorithm has nothing left to do.
    fn advance(&mut self, tape: &mut Tape) -> bool;
}

#[derive(Debug)]
pub(crate) struct CursorProducer<C: Cursor> {
    cursor: C,
    tape: Tape,
    finished: bool,
}

impl<C: Cursor> CursorProducer<C> {
    pub(crate) fn new(cursor: C, data: &[Element]) -> Self {
        let mut producer = Self {
            cursor,
            tape: Tape::new(data),
            finished: false,
        };
        producer.fill();
        producer
    }

    fn fill(&mut self) {
        while self.tape.pending.is_empty() && !self.finished {
            if !self.cursor.advance(&mut self.tape) {
                self.finished = true;
            }
        }
    }
}

impl<C: Cursor> StepProducer for CursorProducer<C> {
    fn algorithm(&self) -> Algorithm {
        C::ALGORITHM
    }

    fn next_step(&mut self) -> Option<AlgorithmStep> {
        let step = self.tape.pending.pop_front()?;
        self.fill();
        Some(step)
    }

    fn is_exhausted(&self) -> bool {
        self.tape.pending.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn drain(producer: &mut dyn StepProducer) -> Vec<AlgorithmStep> {
    std::iter::from_fn(|| producer.next_step()).collect()
}
