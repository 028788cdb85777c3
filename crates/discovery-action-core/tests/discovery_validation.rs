// crates/discovery-action-core/tests/discovery_validation.rs
// ============================================================================
// Module: Discovery Set Validation Tests
// Description: Regression coverage for strategy membership, uniqueness, and
//              combination rules.
// Purpose: Ensure the discovery-set validator fails fast with the documented
//          error for each rule violation.
// Dependencies: discovery_action_core
// ============================================================================
//! ## Overview
//! Integration tests for the discovery-set validator. Each documented rule
//! (membership, uniqueness, disallowed combinations) is exercised through
//! the public parse and validate entry points.

// ============================================================================
// SECTION: Test Support
// ============================================================================

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use discovery_action_core::ConfigError;
use discovery_action_core::Discovery;
use discovery_action_core::format_discovery_list;
use discovery_action_core::parse_discovery_types;
use discovery_action_core::validate_discovery_types;
use support::TestResult;
use support::ensure;

/// Tests that recognized names parse in caller order.
#[test]
fn test_parse_preserves_order() -> TestResult {
    let parsed = parse_discovery_types(&["crawler", "archive"])?;
    ensure(
        parsed == vec![Discovery::Crawler, Discovery::Archive],
        "Expected parse to preserve the caller's sequence order",
    )
}

/// Tests that any unrecognized name fails membership.
#[test]
fn test_unknown_type_rejected() -> TestResult {
    let result = parse_discovery_types(&["archive", "graphql"]);
    ensure(
        result == Err(ConfigError::UnknownDiscoveryType),
        "Expected UnknownDiscoveryType for a name outside the enumeration",
    )?;
    let message = ConfigError::UnknownDiscoveryType.to_string();
    ensure(
        message == "Unknown discovery type supplied.",
        "Expected the documented membership failure message",
    )
}

/// Tests that duplicates fail even when the repeated entry is valid alone.
#[test]
fn test_duplicate_type_rejected() -> TestResult {
    let result = validate_discovery_types(&[Discovery::Archive, Discovery::Archive]);
    ensure(
        result == Err(ConfigError::DuplicateDiscoveryType),
        "Expected DuplicateDiscoveryType for a repeated entry",
    )?;
    let message = ConfigError::DuplicateDiscoveryType.to_string();
    ensure(
        message == "Discovery contains duplicate values.",
        "Expected the documented duplicate failure message",
    )
}

/// Tests that a single-strategy set bypasses the combination check.
#[test]
fn test_single_oas_passes() -> TestResult {
    ensure(
        validate_discovery_types(&[Discovery::Oas]).is_ok(),
        "Expected [oas] alone to pass: cardinality 1 skips combination rules",
    )
}

/// Tests that the oas anchor is rejected in any multi-strategy set.
#[test]
fn test_oas_combination_rejected() -> TestResult {
    let result = validate_discovery_types(&[Discovery::Oas, Discovery::Crawler]);
    let Err(ConfigError::DisallowedCombination {
        anchor,
        conflicts,
    }) = result
    else {
        return ensure(false, "Expected DisallowedCombination for [oas, crawler]");
    };
    ensure(anchor == Discovery::Oas, "Expected oas as the reported anchor")?;
    ensure(
        conflicts == vec![Discovery::Crawler, Discovery::Archive],
        "Expected the full conflicting set from the rule table, not the overlap",
    )
}

/// Tests the combination error message names the anchor and full set.
#[test]
fn test_combination_message_names_full_set() -> TestResult {
    let error = ConfigError::DisallowedCombination {
        anchor: Discovery::Oas,
        conflicts: vec![Discovery::Crawler, Discovery::Archive],
    };
    ensure(
        error.to_string()
            == "The discovery list cannot include both oas and any of crawler, archive \
                simultaneously.",
        "Expected the combination message to name oas and [crawler, archive]",
    )
}

/// Tests that non-anchor pairs pass the combination check.
#[test]
fn test_crawler_archive_pair_passes() -> TestResult {
    ensure(
        validate_discovery_types(&[Discovery::Crawler, Discovery::Archive]).is_ok(),
        "Expected [crawler, archive] to pass: neither anchors a rule",
    )
}

/// Tests that an empty sequence passes set validation.
#[test]
fn test_empty_sequence_passes_set_checks() -> TestResult {
    ensure(
        validate_discovery_types(&[]).is_ok(),
        "Expected the empty set to pass: no duplicates, no anchor present",
    )
}

/// Tests the wire form helper used in diagnostics.
#[test]
fn test_format_discovery_list() -> TestResult {
    let formatted = format_discovery_list(&[Discovery::Oas, Discovery::Archive]);
    ensure(formatted == "oas, archive", "Expected comma-separated wire names")
}
