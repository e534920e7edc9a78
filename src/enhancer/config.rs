//! Configuration consulted on every forwarded action.

use crate::builder::HistoryConfigBuilder;
use crate::core::{Action, HistoryAction};
use std::collections::HashSet;
use std::fmt;

/// Predicate deciding whether an edit merges into the current undo level.
///
/// Receives the incoming forwarded action and the previously dispatched
/// action, if any.
pub type ReplacePredicate<A> = Box<dyn Fn(&A, Option<&HistoryAction<A>>) -> bool + Send + Sync>;

/// How the enhancer records forwarded actions.
///
/// The default has no reset types and never replaces the present.
pub struct HistoryConfig<A: Action> {
    pub(crate) reset_types: HashSet<A::Type>,
    pub(crate) should_replace_present: Option<ReplacePredicate<A>>,
}

impl<A: Action> HistoryConfig<A> {
    /// Start building a configuration.
    pub fn builder() -> HistoryConfigBuilder<A> {
        HistoryConfigBuilder::new()
    }

    /// Whether dispatching `action` discards all past and future.
    pub fn is_reset(&self, action: &A) -> bool {
        !self.reset_types.is_empty() && self.reset_types.contains(&action.action_type())
    }

    /// Whether `action` merges into the current undo level instead of
    /// starting a new one.
    pub fn should_replace_present(&self, action: &A, previous: Option<&HistoryAction<A>>) -> bool {
        self.should_replace_present
            .as_ref()
            .is_some_and(|predicate| predicate(action, previous))
    }

    pub fn reset_types(&self) -> &HashSet<A::Type> {
        &self.reset_types
    }
}

impl<A: Action> Default for HistoryConfig<A> {
    fn default() -> Self {
        Self {
            reset_types: HashSet::new(),
            should_replace_present: None,
        }
    }
}

impl<A: Action> fmt::Debug for HistoryConfig<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryConfig")
            .field("reset_types", &self.reset_types)
            .field("should_replace_present", &self.should_replace_present.is_some())
            .finish()
    }
}
