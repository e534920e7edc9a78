//! Declarative history options.
//!
//! Applications that keep settings in files can describe reset types by
//! name and resolve them against their own action type. Resolution uses
//! `Validation` so every bad entry is reported in one pass.

use crate::builder::error::ConfigError;
use crate::core::CONTROL_ACTION_TYPES;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Serializable history options.
///
/// # Example
///
/// ```rust
/// use hindsight::HistoryOptions;
///
/// let options: HistoryOptions =
///     serde_json::from_str(r#"{ "resetTypes": ["RESET_HISTORY"] }"#).unwrap();
///
/// let resolved = options.resolve_reset_types::<String>();
/// assert!(resolved.is_success());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryOptions {
    /// Names of action types that clear past and future
    pub reset_types: Vec<String>,
}

impl HistoryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reset type by name.
    pub fn reset_type(mut self, name: impl Into<String>) -> Self {
        self.reset_types.push(name.into());
        self
    }

    /// Parse every reset type name, accumulating ALL problems.
    ///
    /// Names are trimmed before checking. Returns the parsed types in the
    /// order they were listed.
    pub fn resolve_reset_types<T: FromStr>(&self) -> Validation<Vec<T>, NonEmptyVec<ConfigError>> {
        let mut seen = HashSet::new();

        let checks: Vec<Validation<T, NonEmptyVec<ConfigError>>> = self
            .reset_types
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let name = raw.trim();

                if name.is_empty() {
                    return Validation::fail(ConfigError::EmptyResetType { index });
                }

                if CONTROL_ACTION_TYPES.contains(&name) {
                    return Validation::fail(ConfigError::ReservedResetType {
                        name: name.to_string(),
                    });
                }

                if !seen.insert(name) {
                    return Validation::fail(ConfigError::DuplicateResetType {
                        name: name.to_string(),
                    });
                }

                match name.parse::<T>() {
                    Ok(action_type) => Validation::success(action_type),
                    Err(_) => Validation::fail(ConfigError::UnknownResetType {
                        name: name.to_string(),
                    }),
                }
            })
            .collect();

        Validation::all_vec(checks)
    }
}
