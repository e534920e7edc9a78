//! Wrapped state transition functions.
//!
//! A reducer maps the current state and an action to the next state. It must
//! be pure, and it must hand back the very same `Arc` when an action has no
//! effect: the enhancer compares snapshots with `Arc::ptr_eq`, never by
//! value.

use std::convert::Infallible;
use std::sync::Arc;

/// Pure, infallible state transition function.
///
/// # Example
///
/// ```rust
/// use hindsight::core::Reducer;
/// use std::sync::Arc;
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = i64;
///     type Action = &'static str;
///
///     fn initial(&self) -> Arc<i64> {
///         Arc::new(0)
///     }
///
///     fn reduce(&self, state: &Arc<i64>, action: &&'static str) -> Arc<i64> {
///         match *action {
///             "INCREMENT" => Arc::new(**state + 1),
///             _ => Arc::clone(state),
///         }
///     }
/// }
///
/// let start = Counter.initial();
/// let same = Counter.reduce(&start, &"NOTHING");
/// assert!(Arc::ptr_eq(&start, &same));
/// ```
pub trait Reducer {
    type State;
    type Action;

    /// The state produced before any action has been seen.
    fn initial(&self) -> Arc<Self::State>;

    /// Compute the next state.
    ///
    /// Return `Arc::clone(state)` when the action does not affect it.
    fn reduce(&self, state: &Arc<Self::State>, action: &Self::Action) -> Arc<Self::State>;
}

/// Fallible state transition function.
///
/// Errors propagate out of the enhancer unchanged. Every [`Reducer`] is a
/// `TryReducer` that never fails.
pub trait TryReducer {
    type State;
    type Action;
    type Error;

    /// The state produced before any action has been seen.
    fn seed(&self) -> Arc<Self::State>;

    /// Compute the next state, or fail without producing one.
    fn try_reduce(
        &self,
        state: &Arc<Self::State>,
        action: &Self::Action,
    ) -> Result<Arc<Self::State>, Self::Error>;
}

impl<R: Reducer> TryReducer for R {
    type State = R::State;
    type Action = R::Action;
    type Error = Infallible;

    fn seed(&self) -> Arc<Self::State> {
        self.initial()
    }

    fn try_reduce(
        &self,
        state: &Arc<Self::State>,
        action: &Self::Action,
    ) -> Result<Arc<Self::State>, Infallible> {
        Ok(self.reduce(state, action))
    }
}

type InitialFn<S> = Box<dyn Fn() -> Arc<S> + Send + Sync>;
type ReduceFn<S, A> = Box<dyn Fn(&Arc<S>, &A) -> Arc<S> + Send + Sync>;

/// Reducer built from a pair of closures.
///
/// # Example
///
/// ```rust
/// use hindsight::core::{FnReducer, Reducer};
/// use std::sync::Arc;
///
/// let toggle = FnReducer::new(
///     || Arc::new(false),
///     |state: &Arc<bool>, action: &&'static str| match *action {
///         "TOGGLE" => Arc::new(!**state),
///         _ => Arc::clone(state),
///     },
/// );
///
/// let on = toggle.reduce(&toggle.initial(), &"TOGGLE");
/// assert!(*on);
/// ```
pub struct FnReducer<S, A> {
    initial: InitialFn<S>,
    reduce: ReduceFn<S, A>,
}

impl<S, A> FnReducer<S, A> {
    /// Create a reducer from an initial-state factory and a transition.
    ///
    /// Both closures must be pure and thread-safe (Send + Sync).
    pub fn new<I, F>(initial: I, reduce: F) -> Self
    where
        I: Fn() -> Arc<S> + Send + Sync + 'static,
        F: Fn(&Arc<S>, &A) -> Arc<S> + Send + Sync + 'static,
    {
        FnReducer {
            initial: Box::new(initial),
            reduce: Box::new(reduce),
        }
    }
}

impl<S, A> Reducer for FnReducer<S, A> {
    type State = S;
    type Action = A;

    fn initial(&self) -> Arc<S> {
        (self.initial)()
    }

    fn reduce(&self, state: &Arc<S>, action: &A) -> Arc<S> {
        (self.reduce)(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter;

    impl Reducer for Counter {
        type State = i32;
        type Action = &'static str;

        fn initial(&self) -> Arc<i32> {
            Arc::new(0)
        }

        fn reduce(&self, state: &Arc<i32>, action: &&'static str) -> Arc<i32> {
            match *action {
                "INCREMENT" => Arc::new(**state + 1),
                _ => Arc::clone(state),
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Overflow;

    struct Bounded {
        max: u8,
    }

    impl TryReducer for Bounded {
        type State = u8;
        type Action = ();
        type Error = Overflow;

        fn seed(&self) -> Arc<u8> {
            Arc::new(0)
        }

        fn try_reduce(&self, state: &Arc<u8>, _action: &()) -> Result<Arc<u8>, Overflow> {
            if **state >= self.max {
                return Err(Overflow);
            }
            Ok(Arc::new(**state + 1))
        }
    }

    #[test]
    fn reducer_returns_same_arc_when_unaffected() {
        let state = Counter.initial();
        let next = Counter.reduce(&state, &"SOMETHING_ELSE");
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_produces_new_arc_on_change() {
        let state = Counter.initial();
        let next = Counter.reduce(&state, &"INCREMENT");
        assert_eq!(*next, 1);
        assert!(!Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn every_reducer_is_an_infallible_try_reducer() {
        let state = Counter.seed();
        let next = Counter.try_reduce(&state, &"INCREMENT");
        assert_eq!(next.map(|s| *s), Ok(1));
    }

    #[test]
    fn try_reducer_reports_errors() {
        let bounded = Bounded { max: 1 };
        let state = bounded.seed();
        let state = bounded.try_reduce(&state, &()).unwrap();
        assert_eq!(*state, 1);
        assert_eq!(bounded.try_reduce(&state, &()), Err(Overflow));
    }

    #[test]
    fn fn_reducer_delegates_to_closures() {
        let reducer = FnReducer::new(
            || Arc::new(String::new()),
            |state: &Arc<String>, action: &char| {
                let mut next = String::clone(state);
                next.push(*action);
                Arc::new(next)
            },
        );

        let state = reducer.initial();
        let state = reducer.reduce(&state, &'h');
        let state = reducer.reduce(&state, &'i');
        assert_eq!(state.as_str(), "hi");
    }

    #[test]
    fn fn_reducer_is_deterministic() {
        let reducer = FnReducer::new(
            || Arc::new(1),
            |state: &Arc<i32>, n: &i32| Arc::new(**state * n),
        );

        let state = reducer.initial();
        let first = reducer.reduce(&state, &3);
        let second = reducer.reduce(&state, &3);
        assert_eq!(first, second);
    }
}
