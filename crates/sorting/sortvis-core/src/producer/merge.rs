use std::cmp::Ordering;

use super::{Cursor, Tape};
use crate::algorithm::Algorithm;
use crate::dataset::Element;

/// Pending work on the explicit recursion stack. Ranges are half-open.
#[derive(Clone, Copy, Debug)]
enum Frame {
    Split { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

/// Merge of `left` and `right` buffers back into `lo..hi`.
#[derive(Debug)]
struct MergeRun {
    mid: usize,
    left: Vec<Element>,
    right: Vec<Element>,
    li: usize,
    ri: usize,
    out: usize,
}

impl MergeRun {
    /// Write one element back. Returns false when both buffers are drained.
    ///
    /// The left operand may already be overwritten in place, so a comparison
    /// points at the write target and at the right operand's slot, which
    /// stays untouched until it is consumed.
    fn step(&mut self, tape: &mut Tape) -> bool {
        let value = match (self.left.get(self.li), self.right.get(self.ri)) {
            (Some(&l), Some(&r)) => {
                // ties take from the left buffer
                if tape.compare_buffered(self.out, self.mid + self.ri, l, r) != Ordering::Greater {
                    self.li += 1;
                    l
                } else {
                    self.ri += 1;
                    r
                }
            }
            (Some(&l), None) => {
                self.li += 1;
                l
            }
            (None, Some(&r)) => {
                self.ri += 1;
                r
            }
            (None, None) => return false,
        };
        tape.write(self.out, value);
        self.out += 1;
        true
    }
}

/// Top-down merge sort with the recursion unrolled onto a frame stack.
#[derive(Debug, Default)]
pub(crate) struct MergeCursor {
    frames: Vec<Frame>,
    active: Option<MergeRun>,
    started: bool,
}

impl Cursor for MergeCursor {
    const ALGORITHM: Algorithm = Algorithm::Merge;

    fn advance(&mut self, tape: &mut Tape) -> bool {
        if !self.started {
            self.started = true;
            self.frames.push(Frame::Split {
                lo: 0,
                hi: tape.len(),
            });
        }

        if let Some(run) = self.active.as_mut() {
            if run.step(tape) {
                return true;
            }
            self.active = None;
        }

        match self.frames.pop() {
            Some(Frame::Split { lo, hi }) => {
                if hi - lo > 1 {
                    let mid = lo + (hi - lo) / 2;
                    // LIFO: left half runs first, merge runs last
                    self.frames.push(Frame::Merge { lo, mid, hi });
                    self.frames.push(Frame::Split { lo: mid, hi });
                    self.frames.push(Frame::Split { lo, hi: mid });
                }
                true
            }
            Some(Frame::Merge { lo, mid, hi }) => {
                self.active = Some(MergeRun {
                    mid,
                    left: tape.slice(lo, mid),
                    right: tape.slice(mid, hi),
                    li: 0,
                    ri: 0,
                    out: lo,
                });
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::producer::drain;
    use crate::step::StepAction;
    use crate::Algorithm;

    #[test]
    fn mutates_only_through_writes() {
        let mut p = Algorithm::Merge.producer(&[5, 2, 4, 6, 1, 3, 2, 6]);
        let steps = drain(p.as_mut());
        assert!(steps
            .iter()
            .all(|s| matches!(s.action, StepAction::Compare { .. } | StepAction::Write { .. })));
        assert_eq!(steps.last().unwrap().snapshot, vec![1, 2, 2, 3, 4, 5, 6, 6]);
    }

    #[test]
    fn writes_once_per_element_per_level() {
        // 4 elements: two merges of width 2 (4 writes) and one of width 4 (4 writes)
        let mut p = Algorithm::Merge.producer(&[4, 3, 2, 1]);
        let writes = drain(p.as_mut())
            .iter()
            .filter(|s| matches!(s.action, StepAction::Write { .. }))
            .count();
        assert_eq!(writes, 8);
    }

    #[test]
    fn compares_point_at_write_target_and_live_right_operand() {
        // [3,4|1,2]: after 1 lands at index 0, the next comparison is 3 vs 2
        let steps = drain(Algorithm::Merge.producer(&[3, 4, 1, 2]).as_mut());
        let last_merge: Vec<_> = steps.iter().rev().take(6).rev().collect();
        assert!(matches!(last_merge[0].action, StepAction::Compare { i: 0, j: 2 }));
        assert!(matches!(last_merge[2].action, StepAction::Compare { i: 1, j: 3 }));
        assert_eq!(last_merge[2].snapshot[3], 2);

        for pair in steps.windows(2) {
            if let StepAction::Compare { i, j } = pair[0].action {
                let right = pair[0].snapshot[j];
                match pair[1].action {
                    StepAction::Write { index, value } => {
                        assert_eq!(index, i);
                        assert!(value <= right);
                    }
                    other => panic!("compare followed by {other:?}"),
                }
            }
        }
    }

    #[test]
    fn single_element_has_no_steps() {
        let p = Algorithm::Merge.producer(&[7]);
        assert!(p.is_exhausted());
    }
}
