use std::cmp::Ordering;

use super::{Cursor, Tape};
use crate::algorithm::Algorithm;

/// Insertion sort, moving the key left by adjacent swaps.
#[derive(Debug)]
pub(crate) struct InsertionCursor {
    /// Next key to insert.
    i: usize,
    /// Current position of the key being inserted.
    j: usize,
}

impl Default for InsertionCursor {
    fn default() -> Self {
        Self { i: 1, j: 1 }
    }
}

impl Cursor for InsertionCursor {
    const ALGORITHM: Algorithm = Algorithm::Insertion;

    fn advance(&mut self, tape: &mut Tape) -> bool {
        if self.i >= tape.len() {
            return false;
        }
        if self.j > 0 && tape.compare(self.j - 1, self.j) == Ordering::Greater {
            tape.swap(self.j - 1, self.j);
            self.j -= 1;
            return true;
        }
        self.i += 1;
        self.j = self.i;
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::producer::drain;
    use crate::step::StepAction;
    use crate::Algorithm;

    #[test]
    fn sorted_input_only_compares() {
        let mut p = Algorithm::Insertion.producer(&[1, 2, 3, 4, 5]);
        let steps = drain(p.as_mut());
        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|s| !s.action.is_mutation()));
    }

    #[test]
    fn key_walks_left() {
        let mut p = Algorithm::Insertion.producer(&[2, 3, 1]);
        let actions: Vec<StepAction> = drain(p.as_mut()).into_iter().map(|s| s.action).collect();
        assert_eq!(
            actions,
            vec![
                StepAction::Compare { i: 0, j: 1 },
                StepAction::Compare { i: 1, j: 2 },
                StepAction::Swap { i: 1, j: 2 },
                StepAction::Compare { i: 0, j: 1 },
                StepAction::Swap { i: 0, j: 1 },
            ]
        );
    }
}
