//! Configuration errors for history options.

use thiserror::Error;

/// Problems found while resolving declarative history options.
///
/// Resolution reports every problem at once, so these usually arrive
/// together in a `NonEmptyVec`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Reset type at index {index} is empty")]
    EmptyResetType { index: usize },

    #[error("Reset type '{name}' is reserved for history control actions")]
    ReservedResetType { name: String },

    #[error("Reset type '{name}' is listed more than once")]
    DuplicateResetType { name: String },

    #[error("Reset type '{name}' does not name a known action type")]
    UnknownResetType { name: String },
}
