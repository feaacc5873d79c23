use std::cmp::Ordering;

use super::{Cursor, Tape};
use crate::algorithm::Algorithm;

/// Lomuto partition in progress over `lo..=hi`, pivot at `hi`.
#[derive(Clone, Copy, Debug)]
struct Partition {
    lo: usize,
    hi: usize,
    /// Next slot for an element smaller than the pivot.
    store: usize,
    /// Scan position.
    scan: usize,
}

/// Quick sort driven by an explicit stack of pending inclusive ranges.
#[derive(Debug, Default)]
pub(crate) struct QuickCursor {
    pending: Vec<(usize, usize)>,
    active: Option<Partition>,
    started: bool,
}

impl QuickCursor {
    fn partition_step(p: &mut Partition, tape: &mut Tape) -> bool {
        if p.scan < p.hi {
            if tape.compare(p.scan, p.hi) == Ordering::Less {
                if p.store != p.scan {
                    tape.swap(p.store, p.scan);
                }
                p.store += 1;
            }
            p.scan += 1;
            return true;
        }
        false
    }
}

impl Cursor for QuickCursor {
    const ALGORITHM: Algorithm = Algorithm::Quick;

    fn advance(&mut self, tape: &mut Tape) -> bool {
        if !self.started {
            self.started = true;
            if tape.len() > 0 {
                self.pending.push((0, tape.len() - 1));
            }
        }

        if let Some(mut p) = self.active {
            if Self::partition_step(&mut p, tape) {
                self.active = Some(p);
                return true;
            }
            // place pivot between the two halves
            if p.store != p.hi {
                tape.swap(p.store, p.hi);
            }
            tape.mark_sorted(p.store);
            self.active = None;
            // right pushed first so the left range is processed first
            if p.store < p.hi {
                self.pending.push((p.store + 1, p.hi));
            }
            if p.store > p.lo {
                self.pending.push((p.lo, p.store - 1));
            }
            return true;
        }

        match self.pending.pop() {
            Some((lo, hi)) if lo == hi => {
                tape.mark_sorted(lo);
                true
            }
            Some((lo, hi)) => {
                tape.pivot(hi);
                self.active = Some(Partition {
                    lo,
                    hi,
                    store: lo,
                    scan: lo,
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
    fn first_step_selects_last_as_pivot() {
        let mut p = Algorithm::Quick.producer(&[4, 1, 3]);
        let first = p.next_step().unwrap();
        assert_eq!(first.action, StepAction::Pivot { index: 2 });
    }

    #[test]
    fn every_position_is_finalised() {
        let mut p = Algorithm::Quick.producer(&[6, 2, 9, 1, 5, 3, 8, 7]);
        let mut marked: Vec<usize> = drain(p.as_mut())
            .into_iter()
            .filter_map(|s| match s.action {
                StepAction::MarkSorted { index } => Some(index),
                _ => None,
            })
            .collect();
        marked.sort_unstable();
        assert_eq!(marked, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn first_partition_places_pivot() {
        let mut p = Algorithm::Quick.producer(&[4, 1, 3]);
        let steps = drain(p.as_mut());
        let first_mark = steps
            .iter()
            .find(|s| matches!(s.action, StepAction::MarkSorted { .. }))
            .unwrap();
        assert_eq!(first_mark.action, StepAction::MarkSorted { index: 1 });
        assert_eq!(first_mark.snapshot, vec![1, 3, 4]);
    }
}
