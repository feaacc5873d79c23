use std::cmp::Ordering;

use super::{Cursor, Tape};
use crate::algorithm::Algorithm;

/// Bubble sort with early exit after a pass without swaps.
#[derive(Debug, Default)]
pub(crate) struct BubbleCursor {
    pass: usize,
    j: usize,
    swapped: bool,
}

impl Cursor for BubbleCursor {
    const ALGORITHM: Algorithm = Algorithm::Bubble;

    fn advance(&mut self, tape: &mut Tape) -> bool {
        let n = tape.len();
        if n < 2 {
            return false;
        }
        let limit = n - 1 - self.pass;
        if self.j < limit {
            if tape.compare(self.j, self.j + 1) == Ordering::Greater {
                tape.swap(self.j, self.j + 1);
                self.swapped = true;
            }
            self.j += 1;
            return true;
        }
        // end of pass
        if !self.swapped || self.pass + 2 >= n {
            return false;
        }
        self.pass += 1;
        self.j = 0;
        self.swapped = false;
        true
    }
}
