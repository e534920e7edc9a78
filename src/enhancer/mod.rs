//! The history enhancer.
//!
//! [`WithHistory`] wraps any [`TryReducer`](crate::core::TryReducer) and
//! turns it into a reducer over [`HistoryState`](crate::core::HistoryState)
//! values:
//!
//! - `Undo` and `Redo` move snapshots between past, present and future
//! - `CreateUndoLevel` closes the current undo level
//! - `Apply` runs the wrapped reducer and records the result as a new undo
//!   level, merges it into the present, or resets history, as configured
//!
//! Dispatch is synchronous, allocation-light and free of hidden state: the
//! previously dispatched action travels inside the history value itself.

mod config;
mod with_history;

pub use config::{HistoryConfig, ReplacePredicate};
pub use with_history::{with_history, HistoryOf, WithHistory};
