use std::cmp::Ordering;

use super::{Cursor, Tape};
use crate::algorithm::Algorithm;

/// Selection sort: scan for the minimum of the unsorted suffix, swap it in.
#[derive(Debug)]
pub(crate) struct SelectionCursor {
    i: usize,
    j: usize,
    min_idx: usize,
}

impl Default for SelectionCursor {
    fn default() -> Self {
        Self {
            i: 0,
            j: 1,
            min_idx: 0,
        }
    }
}

impl Cursor for SelectionCursor {
    const ALGORITHM: Algorithm = Algorithm::Selection;

    fn advance(&mut self, tape: &mut Tape) -> bool {
        let n = tape.len();
        if self.i + 1 >= n {
            // last element is in place by elimination
            if self.i < n {
                tape.mark_sorted(self.i);
                self.i += 1;
            }
            return false;
        }
        if self.j < n {
            if tape.compare(self.j, self.min_idx) == Ordering::Less {
                self.min_idx = self.j;
            }
            self.j += 1;
            return true;
        }
        if self.min_idx != self.i {
            tape.swap(self.i, self.min_idx);
        }
        tape.mark_sorted(self.i);
        self.i += 1;
        self.min_idx = self.i;
        self.j = self.i + 1;
        true
    }
}
