//! Proptest strategies for push/pop scripts.

use std::fmt::Debug;

use itertools::Itertools;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::{EmptyStackError, ExtremaStack, MinMaxStack};

/// Values are drawn from a narrow range, so that ties between elements and
/// the current extremes are frequent.
const VALUE_RANGE: std::ops::Range<i64> = -8..8;

/// One step of a stack script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackStep<T> {
    /// Push a value.
    Push(T),
    /// Pop the top value.
    Pop,
}

impl<T> StackStep<T> {
    /// Apply the step to `stack`.
    ///
    /// Returns the outcome of a pop, or `None` for a push.
    pub fn apply<S>(self, stack: &mut S) -> Option<Result<T, EmptyStackError>>
    where
        S: ExtremaStack<T> + ?Sized,
    {
        match self {
            StackStep::Push(value) => {
                stack.push(value);
                None
            }
            StackStep::Pop => Some(stack.pop()),
        }
    }
}

/// A single step, pushing three times as often as popping.
pub fn arb_step() -> impl Strategy<Value = StackStep<i64>> {
    prop_oneof![
        3 => VALUE_RANGE.prop_map(StackStep::Push),
        1 => Just(StackStep::Pop),
    ]
}

prop_compose! {
    /// A script of up to `max_len` steps.
    pub fn arb_script(max_len: usize)(
        steps in prop::collection::vec(arb_step(), 0..max_len)
    ) -> Vec<StackStep<i64>> {
        steps
    }
}

impl Arbitrary for StackStep<i64> {
    type Parameters = ();
    type Strategy = BoxedStrategy<StackStep<i64>>;

    fn arbitrary_with(_: ()) -> Self::Strategy {
        arb_step().boxed()
    }
}

/// Check that the ledger of `stack` is consistent with its elements.
pub fn check_invariants<T: Ord + Clone + Debug>(
    stack: &MinMaxStack<T>,
) -> Result<(), TestCaseError> {
    let ledger = stack.ledger();
    prop_assert_eq!(stack.is_empty(), ledger.is_empty());
    prop_assert!(ledger.iter().all(|(_, count)| count >= 1));
    prop_assert!(ledger.iter().tuple_windows().all(|((a, _), (b, _))| a < b));
    prop_assert_eq!(ledger.first(), stack.iter().min());
    prop_assert_eq!(ledger.last(), stack.iter().max());
    if stack.len() == 1 {
        prop_assert_eq!(ledger.iter().map(|(_, c)| c).collect_vec(), vec![1]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NaiveMinMaxStack;

    proptest! {
        #[test]
        fn proptest_agrees_with_naive(script in arb_script(200)) {
            let mut stack = MinMaxStack::<i64>::new();
            let mut naive = NaiveMinMaxStack::<i64>::new();
            for step in script {
                prop_assert_eq!(step.apply(&mut stack), step.apply(&mut naive));
                prop_assert_eq!(stack.len(), naive.len());
                prop_assert_eq!(stack.top(), naive.top());
                prop_assert_eq!(stack.min(), naive.min());
                prop_assert_eq!(stack.max(), naive.max());
                check_invariants(&stack)?;
            }
        }

        #[test]
        fn proptest_pushes_only(values in prop::collection::vec(any::<i64>(), 1..100)) {
            let stack: MinMaxStack<i64> = values.iter().copied().collect();
            prop_assert_eq!(stack.min().ok(), values.iter().min());
            prop_assert_eq!(stack.max().ok(), values.iter().max());
            prop_assert_eq!(stack.top().ok(), values.last());
            check_invariants(&stack)?;
        }

        #[test]
        fn proptest_pop_all_is_lifo(values in prop::collection::vec(VALUE_RANGE, 0..100)) {
            let mut stack: MinMaxStack<i64> = values.iter().copied().collect();
            let mut popped = Vec::new();
            while let Ok(v) = stack.pop() {
                popped.push(v);
                check_invariants(&stack)?;
            }
            popped.reverse();
            prop_assert_eq!(popped, values);
            prop_assert!(stack.top().is_err());
            prop_assert!(stack.min().is_err());
            prop_assert!(stack.max().is_err());
        }

        #[test]
        fn proptest_clear_resets(steps in prop::collection::vec(any::<StackStep<i64>>(), 0..100)) {
            let mut stack = MinMaxStack::<i64>::with_capacity(steps.len());
            let mut naive = NaiveMinMaxStack::<i64>::new();
            for step in steps {
                prop_assert_eq!(step.apply(&mut stack), step.apply(&mut naive));
            }
            prop_assert_eq!(stack.min(), naive.min());
            prop_assert_eq!(stack.max(), naive.max());

            stack.clear();
            check_invariants(&stack)?;
            prop_assert!(stack.ledger().is_empty());
            stack.push(3);
            prop_assert_eq!((stack.min(), stack.max()), (Ok(&3), Ok(&3)));
            check_invariants(&stack)?;
        }
    }
}
