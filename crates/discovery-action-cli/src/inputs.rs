// crates/discovery-action-cli/src/inputs.rs
// ============================================================================
// Module: Action Inputs
// Description: Reader over the CI-provided `INPUT_*` environment.
// Purpose: Expose typed, lenient access to raw action parameters.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The CI runner passes each action input `foo_bar` as the environment
//! variable `INPUT_FOO_BAR`. This reader normalizes that convention and
//! applies the action's lenient decoding rules: empty values count as
//! absent, unparsable numerics fall back to their defaults, and malformed
//! JSON for list-typed inputs is treated as absent rather than as an
//! error. A deterministic override map backs the reader in tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::outputs;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error raised when a required input is missing or empty.
///
/// # Invariants
/// - The Display string matches the CI runner's own phrasing for missing
///   required inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Input required and not supplied: {name}")]
pub struct MissingInputError {
    /// Name of the missing input.
    pub name: String,
}

// ============================================================================
// SECTION: Input Reader
// ============================================================================

/// Reader over the action's input environment.
///
/// # Invariants
/// - `overrides` takes precedence over process environment reads.
/// - Values are trimmed; an empty value is treated as absent.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    /// Optional override map used for deterministic lookups.
    overrides: Option<BTreeMap<String, String>>,
}

impl ActionInputs {
    /// Creates a reader backed by the process environment.
    #[must_use]
    pub const fn from_env() -> Self {
        Self {
            overrides: None,
        }
    }

    /// Creates a reader backed by a deterministic override map keyed by
    /// input name.
    #[must_use]
    pub const fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self {
            overrides: Some(overrides),
        }
    }

    /// Reads the raw value of an input, if set and non-empty.
    fn raw(&self, name: &str) -> Option<String> {
        let value = match &self.overrides {
            Some(overrides) => overrides.get(name).cloned(),
            None => std::env::var(format!("INPUT_{}", name.to_uppercase())).ok(),
        }?;
        let trimmed = value.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
    }

    /// Returns an optional string input.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.raw(name)
    }

    /// Returns whether the input is set and non-empty.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.raw(name).is_some()
    }

    /// Returns a required string input.
    ///
    /// # Errors
    ///
    /// Returns [`MissingInputError`] when the input is missing or empty.
    pub fn get_required(&self, name: &str) -> Result<String, MissingInputError> {
        self.raw(name).ok_or_else(|| MissingInputError {
            name: name.to_string(),
        })
    }

    /// Returns a boolean input, falling back to the default when absent
    /// or unrecognized.
    #[must_use]
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.raw(name) {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            None => default,
        }
    }

    /// Returns a numeric input, falling back to the default when absent
    /// or unparsable.
    #[must_use]
    pub fn get_u32(&self, name: &str, default: u32) -> u32 {
        self.raw(name).and_then(|value| value.parse().ok()).unwrap_or(default)
    }

    /// Returns a JSON-encoded string-array input.
    ///
    /// Malformed JSON and non-array values are treated as absent.
    #[must_use]
    pub fn get_array(&self, name: &str) -> Option<Vec<String>> {
        self.get_json_array(name)
    }

    /// Returns a JSON-encoded array input with typed elements.
    ///
    /// Malformed JSON, non-array values, and elements of the wrong shape
    /// are all treated as absent (debug-logged, never an error).
    #[must_use]
    pub fn get_json_array<T: DeserializeOwned>(&self, name: &str) -> Option<Vec<T>> {
        let raw = self.raw(name)?;
        let decoded = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(elements)) => elements
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<T>, _>>()
                .ok(),
            Ok(_) | Err(_) => None,
        };
        if decoded.is_none() {
            let _ = outputs::debug(&format!("ignoring malformed list input {name}: {raw}"));
        }
        decoded
    }
}
