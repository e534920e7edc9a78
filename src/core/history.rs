//! The value tracked across history-enhanced dispatches.
//!
//! A [`HistoryState`] is never mutated: every dispatch that changes history
//! builds a new one that shares all untouched snapshots with its
//! predecessor.

use super::action::HistoryAction;
use im::Vector;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::sync::Arc;

/// Snapshot sequences shared by a history value and every no-op dispatch
/// result derived from it.
struct Timeline<S> {
    past: Vector<Arc<S>>,
    present: Arc<S>,
    future: Vector<Arc<S>>,
    revision: u64,
}

/// Past, present and future snapshots of a wrapped state.
///
/// `past` is ordered oldest first and `future` nearest first. The state also
/// remembers the previously dispatched action, which the replace-present
/// predicate consults, so the enhanced reducer stays a pure function of its
/// arguments.
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
/// let state = counter.initial_state();
/// let state = counter.reduce(Some(&state), "INCREMENT");
/// let state = counter.reduce(Some(&state), HistoryAction::Undo);
///
/// assert_eq!(*state.present(), 0);
/// assert!(state.past().is_empty());
/// assert_eq!(state.future(), vec![&1]);
/// ```
pub struct HistoryState<S, A> {
    timeline: Arc<Timeline<S>>,
    last_action: Option<Arc<HistoryAction<A>>>,
}

impl<S, A> HistoryState<S, A> {
    /// Create a history with only a present value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hindsight::HistoryState;
    /// use std::sync::Arc;
    ///
    /// let state: HistoryState<i32, ()> = HistoryState::new(Arc::new(5));
    /// assert_eq!(*state.present(), 5);
    /// assert!(!state.can_undo());
    /// assert!(!state.can_redo());
    /// ```
    pub fn new(present: Arc<S>) -> Self {
        Self {
            timeline: Arc::new(Timeline {
                past: Vector::new(),
                present,
                future: Vector::new(),
                revision: 0,
            }),
            last_action: None,
        }
    }

    /// Build the history that follows this one, one revision on.
    pub(crate) fn advance(
        &self,
        past: Vector<Arc<S>>,
        present: Arc<S>,
        future: Vector<Arc<S>>,
        action: Arc<HistoryAction<A>>,
    ) -> Self {
        Self {
            timeline: Arc::new(Timeline {
                past,
                present,
                future,
                revision: self.timeline.revision + 1,
            }),
            last_action: Some(action),
        }
    }

    /// Remember `action` without touching any snapshot.
    pub(crate) fn record(&self, action: Arc<HistoryAction<A>>) -> Self {
        Self {
            timeline: Arc::clone(&self.timeline),
            last_action: Some(action),
        }
    }

    /// The current wrapped state.
    pub fn present(&self) -> &S {
        &self.timeline.present
    }

    /// The current wrapped state as the shared handle the reducer produced.
    pub fn present_arc(&self) -> &Arc<S> {
        &self.timeline.present
    }

    /// Previously committed snapshots, oldest first.
    pub fn past(&self) -> Vec<&S> {
        self.timeline.past.iter().map(|s| s.as_ref()).collect()
    }

    /// Undone snapshots that can be redone, nearest first.
    pub fn future(&self) -> Vec<&S> {
        self.timeline.future.iter().map(|s| s.as_ref()).collect()
    }

    /// The past as shared snapshot handles, oldest first.
    pub fn past_snapshots(&self) -> &Vector<Arc<S>> {
        &self.timeline.past
    }

    /// The future as shared snapshot handles, nearest first.
    pub fn future_snapshots(&self) -> &Vector<Arc<S>> {
        &self.timeline.future
    }

    pub fn past_len(&self) -> usize {
        self.timeline.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.timeline.future.len()
    }

    /// Whether an undo would change anything.
    pub fn can_undo(&self) -> bool {
        !self.timeline.past.is_empty()
    }

    /// Whether a redo would change anything.
    pub fn can_redo(&self) -> bool {
        !self.timeline.future.is_empty()
    }

    /// Number of dispatches that produced a new history since initialization.
    ///
    /// No-op dispatches leave it unchanged.
    pub fn revision(&self) -> u64 {
        self.timeline.revision
    }

    /// The action dispatched on the previous call, if any.
    pub(crate) fn previous_action(&self) -> Option<&HistoryAction<A>> {
        self.last_action.as_deref()
    }

    /// Whether `other` is this very history value.
    ///
    /// Holds for a value and any no-op dispatch result derived from it,
    /// which share one set of snapshots. Snapshot contents are never
    /// compared.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.timeline, &other.timeline)
    }
}

impl<S, A> Clone for HistoryState<S, A> {
    fn clone(&self) -> Self {
        Self {
            timeline: Arc::clone(&self.timeline),
            last_action: self.last_action.clone(),
        }
    }
}

/// Compares past, present and future by value. Bookkeeping is ignored.
impl<S: PartialEq, A> PartialEq for HistoryState<S, A> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.timeline, &other.timeline);
        a.present == b.present && a.past == b.past && a.future == b.future
    }
}

impl<S: fmt::Debug, A> fmt::Debug for HistoryState<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryState")
            .field("past", &self.past())
            .field("present", self.present())
            .field("future", &self.future())
            .field("revision", &self.revision())
            .finish_non_exhaustive()
    }
}

impl<S: Serialize, A> Serialize for HistoryState<S, A> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut out = serializer.serialize_struct("HistoryState", 3)?;
        out.serialize_field("past", &self.past())?;
        out.serialize_field("present", self.present())?;
        out.serialize_field("future", &self.future())?;
        out.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshots(values: &[i32]) -> Vector<Arc<i32>> {
        values.iter().map(|v| Arc::new(*v)).collect()
    }

    fn state(past: &[i32], present: i32, future: &[i32]) -> HistoryState<i32, &'static str> {
        HistoryState::new(Arc::new(0)).advance(
            snapshots(past),
            Arc::new(present),
            snapshots(future),
            Arc::new(HistoryAction::Apply("EDIT")),
        )
    }

    #[test]
    fn new_history_has_no_past_or_future() {
        let history: HistoryState<i32, ()> = HistoryState::new(Arc::new(0));
        assert_eq!(*history.present(), 0);
        assert!(history.past().is_empty());
        assert!(history.future().is_empty());
        assert_eq!(history.revision(), 0);
        assert!(history.previous_action().is_none());
    }

    #[test]
    fn past_is_oldest_first_and_future_nearest_first() {
        let history = state(&[1, 2, 3], 4, &[5, 6]);
        assert_eq!(history.past(), vec![&1, &2, &3]);
        assert_eq!(history.future(), vec![&5, &6]);
        assert_eq!(history.past_snapshots().back().map(|v| **v), Some(3));
        assert_eq!(history.future_snapshots().front().map(|v| **v), Some(5));
    }

    #[test]
    fn lengths_and_availability() {
        let history = state(&[1, 2], 3, &[]);
        assert_eq!(history.past_len(), 2);
        assert_eq!(history.future_len(), 0);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn advance_bumps_revision_and_records_action() {
        let history = state(&[], 1, &[]);
        assert_eq!(history.revision(), 1);
        assert_eq!(history.previous_action(), Some(&HistoryAction::Apply("EDIT")));
    }

    #[test]
    fn clone_is_identical() {
        let history = state(&[1], 2, &[3]);
        assert!(history.ptr_eq(&history.clone()));
    }

    #[test]
    fn recording_an_action_keeps_identity() {
        let history = state(&[1], 2, &[]);
        let recorded = history.record(Arc::new(HistoryAction::Undo));

        assert!(recorded.ptr_eq(&history));
        assert_eq!(recorded.revision(), history.revision());
        assert_eq!(recorded.previous_action(), Some(&HistoryAction::Undo));
    }

    #[test]
    fn equal_values_are_not_identical() {
        let a = state(&[1], 2, &[3]);
        let b = state(&[1], 2, &[3]);
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn equality_ignores_bookkeeping() {
        let a = state(&[1], 2, &[]);
        let b = a
            .advance(
                a.past_snapshots().clone(),
                Arc::clone(a.present_arc()),
                Vector::new(),
                Arc::new(HistoryAction::CreateUndoLevel),
            )
            .record(Arc::new(HistoryAction::Redo));
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn advancing_shares_untouched_snapshots() {
        let before = state(&[1, 2], 3, &[]);
        let mut past = before.past_snapshots().clone();
        past.push_back(Arc::clone(before.present_arc()));
        let after = before.advance(
            past,
            Arc::new(4),
            Vector::new(),
            Arc::new(HistoryAction::Apply("EDIT")),
        );

        assert_eq!(before.past(), vec![&1, &2]);
        assert_eq!(after.past(), vec![&1, &2, &3]);
        for (old, new) in before.past_snapshots().iter().zip(after.past_snapshots()) {
            assert!(Arc::ptr_eq(old, new));
        }
        assert!(Arc::ptr_eq(&after.past_snapshots()[2], before.present_arc()));
    }

    #[test]
    fn dropping_a_deep_history_does_not_overflow() {
        let past: Vector<Arc<i32>> = (0..200_000).map(Arc::new).collect();
        let history: HistoryState<i32, ()> = HistoryState::new(Arc::new(0)).advance(
            past,
            Arc::new(1),
            Vector::new(),
            Arc::new(HistoryAction::Undo),
        );

        assert_eq!(history.past_len(), 200_000);
        drop(history);
    }

    #[test]
    fn history_serializes_as_triple() {
        let history = state(&[0, 1], 2, &[3]);
        let value = serde_json::to_value(&history).unwrap();
        assert_eq!(value, json!({ "past": [0, 1], "present": 2, "future": [3] }));
    }

    #[test]
    fn debug_shows_the_triple() {
        let history = state(&[0], 1, &[2]);
        let debug = format!("{:?}", history);
        assert!(debug.contains("past: [0]"));
        assert!(debug.contains("present: 1"));
        assert!(debug.contains("future: [2]"));
    }
}
