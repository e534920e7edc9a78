//! Actions understood by the history enhancer.
//!
//! Callers dispatch [`HistoryAction`] values: three control variants that
//! move snapshots around, and [`HistoryAction::Apply`] which forwards the
//! caller's own action to the wrapped reducer.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Literal type names of the control actions.
///
/// These are intercepted by the enhancer before any reset check, so they can
/// never act as reset types.
pub const CONTROL_ACTION_TYPES: [&str; 3] = ["UNDO", "REDO", "CREATE_UNDO_LEVEL"];

/// Trait for caller actions forwarded to the wrapped reducer.
///
/// The action type identifies an action for reset matching. It is usually a
/// fieldless enum or a string.
///
/// # Example
///
/// ```rust
/// use hindsight::core::Action;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum EditType {
///     Insert,
///     Load,
/// }
///
/// #[derive(Debug)]
/// enum Edit {
///     Insert(char),
///     Load(String),
/// }
///
/// impl Action for Edit {
///     type Type = EditType;
///
///     fn action_type(&self) -> EditType {
///         match self {
///             Self::Insert(_) => EditType::Insert,
///             Self::Load(_) => EditType::Load,
///         }
///     }
/// }
///
/// assert_eq!(Edit::Insert('a').action_type(), EditType::Insert);
/// ```
pub trait Action {
    /// Identifier compared against configured reset types.
    type Type: Eq + Hash + Clone + Debug;

    fn action_type(&self) -> Self::Type;
}

impl Action for &'static str {
    type Type = &'static str;

    fn action_type(&self) -> &'static str {
        *self
    }
}

impl Action for String {
    type Type = String;

    fn action_type(&self) -> String {
        self.clone()
    }
}

/// An action dispatched to a history-enhanced reducer.
///
/// # Example
///
/// ```rust
/// use hindsight::core::HistoryAction;
///
/// let undo: HistoryAction<&str> = HistoryAction::Undo;
/// assert!(undo.is_control());
///
/// let edit = HistoryAction::from("INCREMENT");
/// assert_eq!(edit.applied(), Some(&"INCREMENT"));
/// assert_eq!(edit.name(), "APPLY");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction<A> {
    /// Step back to the most recent past snapshot
    Undo,
    /// Step forward to the nearest future snapshot
    Redo,
    /// Close the current undo level without changing the present
    CreateUndoLevel,
    /// Forward an action to the wrapped reducer
    Apply(A),
}

impl<A> HistoryAction<A> {
    /// Literal type name used in logs and serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undo => "UNDO",
            Self::Redo => "REDO",
            Self::CreateUndoLevel => "CREATE_UNDO_LEVEL",
            Self::Apply(_) => "APPLY",
        }
    }

    /// Whether this action is handled by the enhancer alone.
    pub fn is_control(&self) -> bool {
        !matches!(self, Self::Apply(_))
    }

    /// The forwarded caller action, if this is `Apply`.
    pub fn applied(&self) -> Option<&A> {
        match self {
            Self::Apply(action) => Some(action),
            _ => None,
        }
    }
}

impl<A> From<A> for HistoryAction<A> {
    fn from(action: A) -> Self {
        Self::Apply(action)
    }
}
