//! Builder API for history configuration.
//!
//! This module provides a fluent builder for [`HistoryConfig`], declarative
//! [`HistoryOptions`] that can be loaded from settings files, and ready-made
//! replace-present predicates.
//!
//! [`HistoryConfig`]: crate::enhancer::HistoryConfig

pub mod config;
pub mod error;
pub mod options;

pub use config::HistoryConfigBuilder;
pub use error::ConfigError;
pub use options::HistoryOptions;

use crate::core::HistoryAction;

/// Merge consecutive edits that share a key into one undo level.
///
/// The returned predicate replaces the present when the previous dispatch
/// was a forwarded action and both actions produce the same `Some` key.
/// Actions keyed `None` always start a new undo level, as does anything
/// following an undo, redo or explicit undo level.
///
/// # Example
///
/// ```rust
/// use hindsight::builder::merge_by_key;
/// use hindsight::{HistoryAction, HistoryConfig};
///
/// #[derive(Debug)]
/// struct SetAttribute {
///     block: u32,
///     value: String,
/// }
///
/// impl hindsight::Action for SetAttribute {
///     type Type = &'static str;
///     fn action_type(&self) -> &'static str {
///         "SET_ATTRIBUTE"
///     }
/// }
///
/// let config = HistoryConfig::builder()
///     .replace_present_when(merge_by_key(|action: &SetAttribute| Some(action.block)))
///     .build();
///
/// let first = HistoryAction::Apply(SetAttribute { block: 1, value: "a".into() });
/// let second = SetAttribute { block: 1, value: "ab".into() };
/// let other = SetAttribute { block: 2, value: "x".into() };
///
/// assert!(config.should_replace_present(&second, Some(&first)));
/// assert!(!config.should_replace_present(&other, Some(&first)));
/// ```
pub fn merge_by_key<A, K, F>(
    key: F,
) -> impl Fn(&A, Option<&HistoryAction<A>>) -> bool + Send + Sync + 'static
where
    A: 'static,
    K: PartialEq + 'static,
    F: Fn(&A) -> Option<K> + Send + Sync + 'static,
{
    move |action: &A, previous: Option<&HistoryAction<A>>| {
        let Some(current) = key(action) else {
            return false;
        };

        previous
            .and_then(HistoryAction::applied)
            .and_then(|prev| key(prev))
            .is_some_and(|prev| prev == current)
    }
}
