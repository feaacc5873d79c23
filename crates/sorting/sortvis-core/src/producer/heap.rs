use std::cmp::Ordering;

use super::{Cursor, Tape};
use crate::algorithm::Algorithm;

/// Sift-down in progress inside the heap prefix `0..end`.
#[derive(Clone, Copy, Debug)]
struct Sift {
    root: usize,
    end: usize,
}

impl Sift {
    /// One level of sift-down. Returns false once the root settled.
    fn step(&mut self, tape: &mut Tape) -> bool {
        let left = 2 * self.root + 1;
        if left >= self.end {
            return false;
        }
        let mut largest = self.root;
        if tape.compare(left, largest) == Ordering::Greater {
            largest = left;
        }
        let right = left + 1;
        if right < self.end && tape.compare(right, largest) == Ordering::Greater {
            largest = right;
        }
        if largest == self.root {
            return false;
        }
        tape.swap(self.root, largest);
        self.root = largest;
        true
    }
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    /// Heapify: sift every internal node, counting down.
    Build { remaining: usize },
    /// Move the max to `end - 1` and restore the heap on `0..end - 1`.
    Extract { end: usize },
    Done,
}

/// Max-heap sort with explicit phase and sift cursors.
#[derive(Debug, Default)]
pub(crate) struct HeapCursor {
    phase: Option<Phase>,
    sift: Option<Sift>,
}

impl Cursor for HeapCursor {
    const ALGORITHM: Algorithm = Algorithm::Heap;

    fn advance(&mut self, tape: &mut Tape) -> bool {
        let n = tape.len();
        let phase = *self
            .phase
            .get_or_insert(Phase::Build { remaining: n / 2 });

        if let Some(mut sift) = self.sift {
            self.sift = sift.step(tape).then_some(sift);
            return true;
        }

        match phase {
            Phase::Build { remaining } if remaining > 0 => {
                let root = remaining - 1;
                self.phase = Some(Phase::Build { remaining: root });
                self.sift = Some(Sift { root, end: n });
                true
            }
            Phase::Build { .. } => {
                self.phase = Some(Phase::Extract { end: n });
                true
            }
            Phase::Extract { end } if end > 1 => {
                let last = end - 1;
                tape.swap(0, last);
                tape.mark_sorted(last);
                self.phase = Some(Phase::Extract { end: last });
                self.sift = Some(Sift { root: 0, end: last });
                true
            }
            Phase::Extract { end } => {
                if end == 1 {
                    tape.mark_sorted(0);
                }
                self.phase = Some(Phase::Done);
                false
            }
            Phase::Done => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::producer::drain;
    use crate::step::StepAction;
    use crate::Algorithm;

    #[test]
    fn builds_max_heap_before_extracting() {
        let input = [3, 9, 2, 7, 5, 1];
        let mut p = Algorithm::Heap.producer(&input);
        let steps = drain(p.as_mut());
        // the first MarkSorted follows the first extraction swap
        let first_mark = steps
            .iter()
            .position(|s| matches!(s.action, StepAction::MarkSorted { .. }))
            .unwrap();
        let before = &steps[first_mark - 1];
        assert_eq!(before.action, StepAction::Swap { i: 0, j: 5 });
        assert_eq!(before.snapshot[5], 9);
    }

    #[test]
    fn marks_descending_then_root() {
        let mut p = Algorithm::Heap.producer(&[4, 1, 3, 2]);
        let marked: Vec<usize> = drain(p.as_mut())
            .into_iter()
            .filter_map(|s| match s.action {
                StepAction::MarkSorted { index } => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(marked, vec![3, 2, 1, 0]);
    }
}
