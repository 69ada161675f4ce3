//! The extrema ledger of a [`MinMaxStack`].
//!
//! The ledger is a deque of `(value, multiplicity)` entries sorted strictly
//! ascending by value. Its first entry is the minimum of the stack and its
//! last entry the maximum. A value is only ever recorded when it becomes a new
//! extreme at push time; values that land strictly between the current
//! extremes are not recorded at all. Because elements leave the stack in
//! reverse order, every entry between the two ends is an older extreme that
//! becomes current again once the newer extremes have been popped.
//!
//! Only the two ends of the deque are ever read or written, which keeps every
//! update O(1).
//!
//! [`MinMaxStack`]: crate::MinMaxStack

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// A recorded extreme value and the number of stack elements tied at it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Extreme<T> {
    value: T,
    count: NonZeroUsize,
}

impl<T> Extreme<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            count: NonZeroUsize::MIN,
        }
    }

    fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Compare `value` against this extreme, counting it in when tied.
    fn tally(&mut self, value: &T) -> Ordering
    where
        T: Ord,
    {
        let ord = value.cmp(&self.value);
        if ord.is_eq() {
            self.increment();
        }
        ord
    }

    /// Decrement the multiplicity, returning `false` if it dropped to zero.
    fn decrement(&mut self) -> bool {
        match NonZeroUsize::new(self.count.get() - 1) {
            Some(count) => {
                self.count = count;
                true
            }
            None => false,
        }
    }
}

/// Running record of the minimum and maximum of a stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtremaLedger<T> {
    entries: VecDeque<Extreme<T>>,
}

impl<T> Default for ExtremaLedger<T> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

impl<T> ExtremaLedger<T> {
    /// The current minimum, if any.
    pub fn first(&self) -> Option<&T> {
        self.entries.front().map(|e| &e.value)
    }

    /// The current maximum, if any.
    pub fn last(&self) -> Option<&T> {
        self.entries.back().map(|e| &e.value)
    }

    /// Number of recorded extremes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no extreme is recorded, i.e. the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the recorded `(value, multiplicity)` entries, smallest
    /// first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&T, usize)> + '_ {
        self.entries.iter().map(|e| (&e.value, e.count.get()))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Ord + Clone> ExtremaLedger<T> {
    /// Account for `value` having been pushed onto the stack.
    ///
    /// The minimum and the maximum sides are evaluated independently against
    /// the entries as they were before the call. With a single entry both
    /// sides refer to the same extreme, which is then incremented once.
    pub(crate) fn record(&mut self, value: &T) {
        if self.entries.is_empty() {
            self.entries.push_back(Extreme::new(value.clone()));
            return;
        }
        let shared = self.entries.len() == 1;
        let vs_min = match self.entries.front_mut() {
            Some(min) => min.tally(value),
            None => Ordering::Equal,
        };
        let vs_max = match self.entries.back_mut() {
            Some(_) if shared && vs_min.is_eq() => Ordering::Equal,
            Some(max) => max.tally(value),
            None => Ordering::Equal,
        };

        if vs_min.is_lt() {
            self.entries.push_front(Extreme::new(value.clone()));
        }
        if vs_max.is_gt() {
            self.entries.push_back(Extreme::new(value.clone()));
        }
    }

    /// Account for `value` having been popped from the stack.
    ///
    /// With a single entry, the entry is decremented at most once.
    pub(crate) fn release(&mut self, value: &T) {
        let shared = self.entries.len() == 1;

        if let Some(min) = self.entries.front_mut() {
            if &min.value == value && !min.decrement() {
                self.entries.pop_front();
            }
        }
        if shared {
            return;
        }
        // The front removal above may have emptied the deque.
        if let Some(max) = self.entries.back_mut() {
            if &max.value == value && !max.decrement() {
                self.entries.pop_back();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::rstest;

    fn ledger_after(pushes: &[i32]) -> ExtremaLedger<i32> {
        let mut ledger = ExtremaLedger::default();
        for v in pushes {
            ledger.record(v);
        }
        ledger
    }

    fn entries(ledger: &ExtremaLedger<i32>) -> Vec<(i32, usize)> {
        ledger.iter().map(|(&v, c)| (v, c)).collect_vec()
    }

    #[rstest]
    #[case(&[4], vec![(4, 1)])]
    #[case(&[4, 4], vec![(4, 2)])]
    #[case(&[4, 4, 4], vec![(4, 3)])]
    #[case(&[4, 1], vec![(1, 1), (4, 1)])]
    #[case(&[4, 9], vec![(4, 1), (9, 1)])]
    #[case(&[1, 9, 5, 7], vec![(1, 1), (9, 1)])]
    #[case(&[1, 9, 1, 9], vec![(1, 2), (9, 2)])]
    #[case(&[5, 2, 7, 2, 9], vec![(2, 2), (5, 1), (7, 1), (9, 1)])]
    fn record_tracks_only_extremes(#[case] pushes: &[i32], #[case] expected: Vec<(i32, usize)>) {
        assert_eq!(entries(&ledger_after(pushes)), expected);
    }

    #[test]
    fn single_entry_released_once() {
        let mut ledger = ledger_after(&[3, 3]);
        ledger.release(&3);
        assert_eq!(entries(&ledger), vec![(3, 1)]);
        ledger.release(&3);
        assert!(ledger.is_empty());
    }

    #[test]
    fn release_promotes_older_extremes() {
        let mut ledger = ledger_after(&[5, 2, 7, 2, 9]);
        ledger.release(&9);
        assert_eq!((ledger.first(), ledger.last()), (Some(&2), Some(&7)));
        ledger.release(&2);
        assert_eq!(entries(&ledger), vec![(2, 1), (5, 1), (7, 1)]);
        ledger.release(&7);
        ledger.release(&2);
        assert_eq!(entries(&ledger), vec![(5, 1)]);
        ledger.release(&5);
        assert!(ledger.is_empty());
        assert_eq!(ledger.first(), None);
    }

    #[test]
    fn release_of_untracked_value_is_noop() {
        let mut ledger = ledger_after(&[1, 10, 5]);
        ledger.release(&5);
        assert_eq!(entries(&ledger), vec![(1, 1), (10, 1)]);
    }
}
