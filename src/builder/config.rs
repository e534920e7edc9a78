//! Builder for history configuration.

use crate::builder::error::ConfigError;
use crate::builder::options::HistoryOptions;
use crate::core::{Action, HistoryAction};
use crate::enhancer::{HistoryConfig, ReplacePredicate};
use std::collections::HashSet;
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for [`HistoryConfig`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use hindsight::{HistoryAction, HistoryConfig};
///
/// let config = HistoryConfig::<&'static str>::builder()
///     .reset_type("RESET_HISTORY")
///     .replace_present_when(|action, previous| {
///         *action == "TYPE" && previous == Some(&HistoryAction::Apply("TYPE"))
///     })
///     .build();
///
/// assert!(config.is_reset(&"RESET_HISTORY"));
/// assert!(config.should_replace_present(&"TYPE", Some(&HistoryAction::Apply("TYPE"))));
/// ```
pub struct HistoryConfigBuilder<A: Action> {
    reset_types: HashSet<A::Type>,
    should_replace_present: Option<ReplacePredicate<A>>,
}

impl<A: Action> HistoryConfigBuilder<A> {
    pub fn new() -> Self {
        Self {
            reset_types: HashSet::new(),
            should_replace_present: None,
        }
    }

    /// Add an action type that clears past and future.
    pub fn reset_type(mut self, action_type: A::Type) -> Self {
        self.reset_types.insert(action_type);
        self
    }

    /// Add several reset types at once.
    pub fn reset_types<I>(mut self, action_types: I) -> Self
    where
        I: IntoIterator<Item = A::Type>,
    {
        self.reset_types.extend(action_types);
        self
    }

    /// Set the predicate that merges an edit into the current undo level.
    ///
    /// Replaces any predicate set earlier.
    pub fn replace_present_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&A, Option<&HistoryAction<A>>) -> bool + Send + Sync + 'static,
    {
        self.should_replace_present = Some(Box::new(predicate));
        self
    }

    /// Apply declarative options, resolving reset type names against the
    /// action type.
    ///
    /// Fails with every problem found if any name does not resolve.
    pub fn options(self, options: &HistoryOptions) -> Validation<Self, NonEmptyVec<ConfigError>>
    where
        A::Type: FromStr,
    {
        match options.resolve_reset_types::<A::Type>() {
            Validation::Success(types) => Validation::success(self.reset_types(types)),
            Validation::Failure(errors) => Validation::Failure(errors),
        }
    }

    pub fn build(self) -> HistoryConfig<A> {
        HistoryConfig {
            reset_types: self.reset_types,
            should_replace_present: self.should_replace_present,
        }
    }
}

impl<A: Action> Default for HistoryConfigBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}
