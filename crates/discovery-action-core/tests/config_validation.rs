// crates/discovery-action-core/tests/config_validation.rs
// ============================================================================
// Module: Configuration Validation Tests
// Description: Regression coverage for cross-field configuration rules.
// Purpose: Ensure the file-reference and crawler-URL rules fail fast with
//          diagnostics that echo the requested strategy list.
// Dependencies: discovery_action_core, serde_json
// ============================================================================
//! ## Overview
//! Integration tests for [`validate_config`]: the cross-field dependencies
//! between strategies and the optional file reference / crawler seed URL
//! fields, plus the wire form of the configuration record.

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
use discovery_action_core::DiscoveryConfig;
use discovery_action_core::is_valid_url;
use discovery_action_core::validate_config;
use support::TestResult;
use support::ensure;

/// Builds a minimal configuration with the given strategies.
fn base_config(discovery_types: Vec<Discovery>) -> DiscoveryConfig {
    DiscoveryConfig {
        name: "nightly surface scan".to_string(),
        discovery_types,
        file_id: None,
        crawler_urls: None,
        auth_object_id: None,
        pool_size: 10,
        hosts_filter: None,
        optimized_crawler: true,
        max_interactions_chain_length: 3,
        subdomains_crawl: false,
        exclusions: None,
        repeaters: None,
    }
}

/// Tests that a file reference requires a file-consuming strategy.
#[test]
fn test_file_id_requires_compatible_strategy() -> TestResult {
    let mut config = base_config(vec![Discovery::Crawler]);
    config.file_id = Some("f-123".to_string());
    config.crawler_urls = Some(vec!["https://example.com".to_string()]);
    let result = validate_config(&config);
    ensure(
        result
            == Err(ConfigError::FileIdWithoutCompatibleDiscovery {
                types: vec![Discovery::Crawler],
            }),
        "Expected FileIdWithoutCompatibleDiscovery for file_id with [crawler]",
    )?;
    let message = result.err().map(|err| err.to_string()).unwrap_or_default();
    ensure(
        message.ends_with("The current discovery types are: crawler"),
        "Expected the message to echo the full requested strategy list",
    )
}

/// Tests that a file-consuming strategy requires a file reference.
#[test]
fn test_archive_requires_file_id() -> TestResult {
    let config = base_config(vec![Discovery::Archive]);
    let result = validate_config(&config);
    ensure(
        result
            == Err(ConfigError::MissingFileId {
                types: vec![Discovery::Archive],
            }),
        "Expected MissingFileId for [archive] without file_id",
    )
}

/// Tests that oas alone also requires a file reference.
#[test]
fn test_oas_requires_file_id() -> TestResult {
    let config = base_config(vec![Discovery::Oas]);
    let result = validate_config(&config);
    ensure(
        result
            == Err(ConfigError::MissingFileId {
                types: vec![Discovery::Oas],
            }),
        "Expected MissingFileId for [oas] without file_id",
    )
}

/// Tests that a valid oas configuration passes end to end.
#[test]
fn test_oas_with_file_id_passes() -> TestResult {
    let mut config = base_config(vec![Discovery::Oas]);
    config.file_id = Some("f-123".to_string());
    ensure(validate_config(&config).is_ok(), "Expected [oas] with file_id to pass")
}

/// Tests that crawler URLs require the crawler strategy.
#[test]
fn test_crawler_urls_require_crawler_strategy() -> TestResult {
    let mut config = base_config(vec![Discovery::Archive]);
    config.file_id = Some("f-123".to_string());
    config.crawler_urls = Some(vec!["http://x".to_string()]);
    let result = validate_config(&config);
    ensure(
        result
            == Err(ConfigError::CrawlerUrlsWithoutCrawlerDiscovery {
                types: vec![Discovery::Archive],
            }),
        "Expected CrawlerUrlsWithoutCrawlerDiscovery for URLs with [archive]",
    )
}

/// Tests that a present-but-empty seed list is rejected.
#[test]
fn test_empty_crawler_urls_rejected() -> TestResult {
    let mut config = base_config(vec![Discovery::Crawler]);
    config.crawler_urls = Some(Vec::new());
    let result = validate_config(&config);
    ensure(
        result
            == Err(ConfigError::EmptyCrawlerUrls {
                types: vec![Discovery::Crawler],
            }),
        "Expected EmptyCrawlerUrls for an empty seed list",
    )
}

/// Tests that the crawler strategy requires seed URLs.
#[test]
fn test_crawler_requires_urls() -> TestResult {
    let config = base_config(vec![Discovery::Crawler]);
    let result = validate_config(&config);
    ensure(
        result
            == Err(ConfigError::MissingCrawlerUrls {
                types: vec![Discovery::Crawler],
            }),
        "Expected MissingCrawlerUrls for [crawler] without seeds",
    )
}

/// Tests that a valid crawler configuration passes end to end.
#[test]
fn test_crawler_with_urls_passes() -> TestResult {
    let mut config = base_config(vec![Discovery::Crawler]);
    config.crawler_urls = Some(vec!["https://example.com".to_string()]);
    ensure(validate_config(&config).is_ok(), "Expected [crawler] with seeds to pass")
}

/// Tests that set-level failures precede cross-field checks.
#[test]
fn test_set_checks_run_first() -> TestResult {
    let mut config = base_config(vec![Discovery::Crawler, Discovery::Crawler]);
    config.crawler_urls = Some(Vec::new());
    let result = validate_config(&config);
    ensure(
        result == Err(ConfigError::DuplicateDiscoveryType),
        "Expected the duplicate failure before any cross-field rule",
    )
}

/// Tests that validation is idempotent over the same record.
#[test]
fn test_validation_is_idempotent() -> TestResult {
    let mut config = base_config(vec![Discovery::Crawler]);
    config.crawler_urls = Some(vec!["https://example.com".to_string()]);
    let first = validate_config(&config);
    let second = validate_config(&config);
    ensure(first == second, "Expected identical results across repeated validation")?;

    let failing = base_config(vec![Discovery::Archive]);
    let first = validate_config(&failing);
    let second = validate_config(&failing);
    ensure(first == second, "Expected identical failures across repeated validation")
}

/// Tests the wire form of the configuration record.
#[test]
fn test_wire_form_is_camel_case_and_sparse() -> TestResult {
    let mut config = base_config(vec![Discovery::Oas]);
    config.file_id = Some("f-123".to_string());
    let wire = serde_json::to_value(&config)?;
    ensure(
        wire.get("discoveryTypes") == Some(&serde_json::json!(["oas"])),
        "Expected camelCase strategy list with lowercase wire names",
    )?;
    ensure(wire.get("fileId") == Some(&serde_json::json!("f-123")), "Expected fileId on the wire")?;
    ensure(
        wire.get("crawlerUrls").is_none(),
        "Expected absent optional fields to be omitted from the wire form",
    )?;
    ensure(
        wire.get("maxInteractionsChainLength") == Some(&serde_json::json!(3)),
        "Expected pass-through fields in camelCase",
    )
}

/// Tests the crawler seed URL scheme policy.
#[test]
fn test_seed_url_scheme_policy() -> TestResult {
    ensure(is_valid_url("https://example.com/app"), "Expected https seeds to be accepted")?;
    ensure(is_valid_url("http://10.0.0.5:8080"), "Expected http seeds to be accepted")?;
    for rejected in [
        "javascript:alert(1)",
        "file:///etc/passwd",
        "data:text/html,hi",
        "mailto:a@b.c",
        "ftp://example.com",
        "ws://example.com/socket",
        "not a url",
    ] {
        ensure(!is_valid_url(rejected), format!("Expected rejection of {rejected}"))?;
    }
    Ok(())
}
