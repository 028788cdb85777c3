// crates/discovery-action-core/src/discovery.rs
// ============================================================================
// Module: Discovery Strategies
// Description: Closed strategy enumeration and discovery-set validation.
// Purpose: Enforce well-formedness, uniqueness, and combination rules over
//          requested discovery strategies.
// Dependencies: serde, thiserror (via crate::error)
// ============================================================================

//! ## Overview
//! A discovery is seeded by one or more strategies: replaying recorded
//! traffic (`archive`), live crawling (`crawler`), or walking an OpenAPI
//! specification (`oas`). The strategy set supplied by the caller is
//! validated in three ordered steps: membership in the closed enumeration,
//! uniqueness, and the disallowed-combination table. The first violated
//! rule fails the whole set.
//! Invariants:
//! - [`DISALLOWED_COMBINATIONS`] is statically initialized and never
//!   mutated.
//! - Validation is pure; the only effect is the returned error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

// ============================================================================
// SECTION: Strategy Enumeration
// ============================================================================

/// Strategy used to seed a discovery.
///
/// # Invariants
/// - The enumeration is closed: wire values outside `archive`, `crawler`,
///   and `oas` are rejected at parse time. The remote API additionally
///   accepts a GraphQL-driven strategy; it is deliberately not modeled
///   here and no validation branch references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discovery {
    /// Replay of a recorded traffic archive.
    Archive,
    /// Live crawl from seed URLs.
    Crawler,
    /// OpenAPI-specification-driven enumeration.
    Oas,
}

impl Discovery {
    /// Returns the stable wire form of the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::Crawler => "crawler",
            Self::Oas => "oas",
        }
    }
}

impl fmt::Display for Discovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discovery {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "archive" => Ok(Self::Archive),
            "crawler" => Ok(Self::Crawler),
            "oas" => Ok(Self::Oas),
            _ => Err(ConfigError::UnknownDiscoveryType),
        }
    }
}

// ============================================================================
// SECTION: Combination Rules
// ============================================================================

/// Strategies that consume an uploaded file reference.
pub const FILE_CONSUMING_TYPES: &[Discovery] = &[Discovery::Oas, Discovery::Archive];

/// Disallowed strategy combinations: each anchor strategy may not co-occur
/// with the listed conflicting strategies.
///
/// # Invariants
/// - Read-only after initialization; rules are checked in table order.
/// - A rule fires on the presence of its anchor alone in a multi-strategy
///   set. The conflicting set is reported in full and is not intersected
///   with the caller's input, so the anchor is rejected even when no
///   listed conflict accompanies it.
pub const DISALLOWED_COMBINATIONS: &[(Discovery, &[Discovery])] =
    &[(Discovery::Oas, &[Discovery::Crawler, Discovery::Archive])];

// ============================================================================
// SECTION: Set Validation
// ============================================================================

/// Parses raw strategy names into [`Discovery`] values.
///
/// The order of the caller's sequence is preserved. This is the membership
/// step of discovery-set validation: the first unrecognized entry fails
/// the whole sequence.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownDiscoveryType`] when any entry is outside
/// the closed enumeration.
pub fn parse_discovery_types<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Discovery>, ConfigError> {
    raw.iter().map(|entry| entry.as_ref().parse()).collect()
}

/// Validates a requested strategy set for uniqueness and allowed
/// combinations.
///
/// Checks run in order and fail fast: duplicates first, then the
/// disallowed-combination table. The combination step is skipped when the
/// set holds exactly one distinct strategy.
///
/// # Errors
///
/// Returns [`ConfigError::DuplicateDiscoveryType`] when a strategy repeats
/// and [`ConfigError::DisallowedCombination`] when a table rule matches.
pub fn validate_discovery_types(types: &[Discovery]) -> Result<(), ConfigError> {
    let unique: BTreeSet<Discovery> = types.iter().copied().collect();
    if unique.len() != types.len() {
        return Err(ConfigError::DuplicateDiscoveryType);
    }
    if unique.len() != 1 {
        for (anchor, conflicts) in DISALLOWED_COMBINATIONS {
            if unique.contains(anchor) {
                return Err(ConfigError::DisallowedCombination {
                    anchor: *anchor,
                    conflicts: conflicts.to_vec(),
                });
            }
        }
    }
    Ok(())
}

/// Formats a strategy list as its comma-separated wire form.
#[must_use]
pub fn format_discovery_list(types: &[Discovery]) -> String {
    types.iter().map(|item| item.as_str()).collect::<Vec<_>>().join(", ")
}
