//! Hindsight: undo/redo history for pure reducers
//!
//! Hindsight wraps a deterministic state transition function (a reducer) so
//! that it produces a history of past, present and future snapshots. The
//! wrapped reducer needs no knowledge of history at all.
//!
//! # Core Concepts
//!
//! - **Reducer**: a pure `(state, action) -> state` function via the `Reducer` trait
//! - **History**: immutable `HistoryState` values built on persistent vectors
//! - **Undo levels**: discrete history entries; edits can be merged into the
//!   current level or reset history entirely through `HistoryConfig`
//!
//! Snapshots are compared by identity (`Arc::ptr_eq`), so a reducer must
//! return the same `Arc` it was given when an action changes nothing.
//!
//! # Example
//!
//! ```rust
//! use hindsight::{with_history, HistoryAction, Reducer};
//! use std::sync::Arc;
//!
//! struct Counter;
//!
//! impl Reducer for Counter {
//!     type State = i32;
//!     type Action = &'static str;
//!
//!     fn initial(&self) -> Arc<i32> {
//!         Arc::new(0)
//!     }
//!
//!     fn reduce(&self, state: &Arc<i32>, action: &&'static str) -> Arc<i32> {
//!         match *action {
//!             "INCREMENT" => Arc::new(**state + 1),
//!             _ => Arc::clone(state),
//!         }
//!     }
//! }
//!
//! let counter = with_history(Counter);
//!
//! let state = counter.initial_state();
//! let state = counter.reduce(Some(&state), "INCREMENT");
//! assert_eq!(state.past(), vec![&0]);
//! assert_eq!(*state.present(), 1);
//!
//! let state = counter.reduce(Some(&state), HistoryAction::Undo);
//! assert_eq!(*state.present(), 0);
//! assert_eq!(state.future(), vec![&1]);
//!
//! // Nothing left to undo: the same history comes back
//! let again = counter.reduce(Some(&state), HistoryAction::Undo);
//! assert!(again.ptr_eq(&state));
//! ```

pub mod builder;
pub mod core;
pub mod enhancer;

// Re-export commonly used types
pub use crate::builder::{ConfigError, HistoryConfigBuilder, HistoryOptions};
pub use crate::core::{
    Action, FnReducer, HistoryAction, HistoryState, Reducer, TryReducer, CONTROL_ACTION_TYPES,
};
pub use crate::enhancer::{with_history, HistoryConfig, HistoryOf, WithHistory};
