//! Reducer enhancer that records undo history.

use crate::core::{Action, HistoryAction, HistoryState, TryReducer};
use crate::enhancer::config::HistoryConfig;
use im::Vector;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, trace};

/// History value produced by a [`WithHistory`] around reducer `R`.
pub type HistoryOf<R> = HistoryState<<R as TryReducer>::State, <R as TryReducer>::Action>;

/// Wrap `reducer` with default configuration.
///
/// # Example
///
/// ```rust
/// use hindsight::{with_history, FnReducer, HistoryAction};
/// use std::sync::Arc;
///
/// let counter = with_history(FnReducer::new(
///     || Arc::new(0),
///     |state: &Arc<i32>, action: &&'static str| match *action {
///         "INCREMENT" => Arc::new(**state + 1),
///         _ => Arc::clone(state),
///     },
/// ));
///
/// let state = counter.reduce(None, "INCREMENT");
/// assert_eq!(state.past(), vec![&0]);
/// assert_eq!(*state.present(), 1);
///
/// let state = counter.reduce(Some(&state), HistoryAction::Undo);
/// let state = counter.reduce(Some(&state), HistoryAction::Redo);
/// assert_eq!(*state.present(), 1);
/// ```
pub fn with_history<R>(reducer: R) -> WithHistory<R>
where
    R: TryReducer,
    R::Action: Action,
{
    WithHistory::new(reducer, HistoryConfig::default())
}

/// A reducer that produces [`HistoryState`] values instead of bare states.
///
/// The wrapped reducer never sees control actions. It is only called for
/// [`HistoryAction::Apply`], and its result decides whether a new undo
/// level is recorded.
pub struct WithHistory<R>
where
    R: TryReducer,
    R::Action: Action,
{
    reducer: R,
    config: HistoryConfig<R::Action>,
}

impl<R> WithHistory<R>
where
    R: TryReducer,
    R::Action: Action,
{
    pub fn new(reducer: R, config: HistoryConfig<R::Action>) -> Self {
        Self { reducer, config }
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    pub fn config(&self) -> &HistoryConfig<R::Action> {
        &self.config
    }

    /// Empty past and future around the wrapped reducer's seed state.
    pub fn initial_state(&self) -> HistoryOf<R> {
        HistoryState::new(self.reducer.seed())
    }

    /// Dispatch one action.
    ///
    /// `None` stands for a history that has not been initialized yet; it is
    /// seeded first and the action is applied to the result. An error from
    /// the wrapped reducer is returned unchanged and no history is produced.
    ///
    /// When nothing changes (undo with no past, redo with no future, or the
    /// wrapped reducer returning its input) the result is
    /// [`ptr_eq`](HistoryState::ptr_eq) to `state`.
    pub fn try_reduce(
        &self,
        state: Option<&HistoryOf<R>>,
        action: impl Into<HistoryAction<R::Action>>,
    ) -> Result<HistoryOf<R>, R::Error> {
        let seeded;
        let state = match state {
            Some(state) => state,
            None => {
                seeded = self.initial_state();
                &seeded
            }
        };
        let action = Arc::new(action.into());

        match &*action {
            HistoryAction::Undo => Ok(self.undo(state, Arc::clone(&action))),
            HistoryAction::Redo => Ok(self.redo(state, Arc::clone(&action))),
            HistoryAction::CreateUndoLevel => {
                let mut past = state.past_snapshots().clone();
                past.push_back(Arc::clone(state.present_arc()));
                trace!(
                    past = past.len(),
                    revision = state.revision() + 1,
                    "created undo level"
                );
                Ok(state.advance(
                    past,
                    Arc::clone(state.present_arc()),
                    Vector::new(),
                    Arc::clone(&action),
                ))
            }
            HistoryAction::Apply(inner) => self.apply(state, inner, Arc::clone(&action)),
        }
    }

    fn undo(&self, state: &HistoryOf<R>, action: Arc<HistoryAction<R::Action>>) -> HistoryOf<R> {
        let mut past = state.past_snapshots().clone();
        let Some(present) = past.pop_back() else {
            trace!(revision = state.revision(), "nothing to undo");
            return state.record(action);
        };

        let mut future = state.future_snapshots().clone();
        future.push_front(Arc::clone(state.present_arc()));
        trace!(
            past = past.len(),
            future = future.len(),
            revision = state.revision() + 1,
            "undo"
        );
        state.advance(past, present, future, action)
    }

    fn redo(&self, state: &HistoryOf<R>, action: Arc<HistoryAction<R::Action>>) -> HistoryOf<R> {
        let mut future = state.future_snapshots().clone();
        let Some(present) = future.pop_front() else {
            trace!(revision = state.revision(), "nothing to redo");
            return state.record(action);
        };

        let mut past = state.past_snapshots().clone();
        past.push_back(Arc::clone(state.present_arc()));
        trace!(
            past = past.len(),
            future = future.len(),
            revision = state.revision() + 1,
            "redo"
        );
        state.advance(past, present, future, action)
    }

    fn apply(
        &self,
        state: &HistoryOf<R>,
        inner: &R::Action,
        action: Arc<HistoryAction<R::Action>>,
    ) -> Result<HistoryOf<R>, R::Error> {
        let next_present = self.reducer.try_reduce(state.present_arc(), inner)?;
        let revision = state.revision() + 1;

        if self.config.is_reset(inner) {
            debug!(
                action = ?inner.action_type(),
                discarded_past = state.past_len(),
                discarded_future = state.future_len(),
                revision,
                "history reset"
            );
            return Ok(state.advance(Vector::new(), next_present, Vector::new(), action));
        }

        if Arc::ptr_eq(&next_present, state.present_arc()) {
            trace!(revision = state.revision(), "unchanged");
            return Ok(state.record(action));
        }

        let mut past = state.past_snapshots().clone();
        if self.config.should_replace_present(inner, state.previous_action()) {
            trace!(past = past.len(), revision, "merged into present");
        } else {
            past.push_back(Arc::clone(state.present_arc()));
            trace!(past = past.len(), revision, "pushed undo level");
        }

        Ok(state.advance(past, next_present, Vector::new(), action))
    }
}

impl<R> WithHistory<R>
where
    R: TryReducer<Error = Infallible>,
    R::Action: Action,
{
    /// Dispatch one action through an infallible reducer.
    ///
    /// See [`try_reduce`](Self::try_reduce).
    pub fn reduce(
        &self,
        state: Option<&HistoryOf<R>>,
        action: impl Into<HistoryAction<R::Action>>,
    ) -> HistoryOf<R> {
        match self.try_reduce(state, action) {
            Ok(next) => next,
            Err(never) => match never {},
        }
    }
}
