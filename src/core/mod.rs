//! Core history types.
//!
//! This module contains the pure data side of the history enhancer:
//! - Caller actions and the control actions wrapped around them
//! - The wrapped reducer contract
//! - The `HistoryState` value, built on persistent `im` vectors
//!
//! Nothing here performs I/O or holds hidden state.

mod action;
mod history;
mod reducer;

pub use action::{Action, HistoryAction, CONTROL_ACTION_TYPES};
pub use history::HistoryState;
pub use reducer::{FnReducer, Reducer, TryReducer};
