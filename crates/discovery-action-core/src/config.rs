// crates/discovery-action-core/src/config.rs
// ============================================================================
// Module: Discovery Configuration
// Description: Configuration record and cross-field validation pass.
// Purpose: Enforce consistency between strategies and dependent inputs
//          before submission.
// Dependencies: serde, url, crate::discovery, crate::error
// ============================================================================

//! ## Overview
//! [`DiscoveryConfig`] is the record submitted to the scanning service. It
//! is constructed once per invocation, validated once by
//! [`validate_config`], and never mutated afterwards. Validation delegates
//! to the discovery-set checks first, then enforces the two cross-field
//! rules: a file reference requires a file-consuming strategy, and crawler
//! seed URLs require (and are required by) the crawler strategy.
//! Fields outside those three are passed through to the service unchecked.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::discovery::Discovery;
use crate::discovery::FILE_CONSUMING_TYPES;
use crate::discovery::validate_discovery_types;
use crate::error::ConfigError;

// ============================================================================
// SECTION: Configuration Records
// ============================================================================

/// Exclusion of matched requests or parameters from scan scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestExclusion {
    /// URL patterns to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    /// HTTP methods to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
}

/// Scope exclusions applied to the discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusions {
    /// Parameter names removed from scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<String>>,
    /// Request exclusion rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<Vec<RequestExclusion>>,
}

/// Discovery job definition submitted to the scanning service.
///
/// # Invariants
/// - Constructed once per invocation and never mutated after validation.
/// - `discovery_types` is required; callers default it to `[archive]` when
///   no strategies are supplied.
/// - Optional fields are omitted from the wire form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryConfig {
    /// Human-readable discovery name.
    pub name: String,
    /// Requested discovery strategies.
    pub discovery_types: Vec<Discovery>,
    /// Identifier of an uploaded file consumed by `oas`/`archive` runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    /// Seed URLs for crawler runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawler_urls: Option<Vec<String>>,
    /// Identifier of a stored authentication object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_object_id: Option<String>,
    /// Concurrency pool size for the scan.
    pub pool_size: u32,
    /// Hostname filter restricting scan scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts_filter: Option<Vec<String>>,
    /// Enables the optimized ("smart") crawler.
    pub optimized_crawler: bool,
    /// Maximum interaction chain depth followed by the crawler.
    pub max_interactions_chain_length: u32,
    /// Whether sub-domains are crawled.
    pub subdomains_crawl: bool,
    /// Scope exclusions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Exclusions>,
    /// Repeater identifiers routing scan traffic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeaters: Option<Vec<String>>,
}

// ============================================================================
// SECTION: URL Policy
// ============================================================================

/// Schemes that can never serve as crawler seeds.
const INVALID_URL_SCHEMES: &[&str] = &[
    "javascript",
    "file",
    "data",
    "mailto",
    "ftp",
    "blob",
    "about",
    "ssh",
    "tel",
    "view-source",
    "ws",
    "wss",
];

/// Returns whether a URL is acceptable as a crawler seed.
///
/// Unparsable input and URLs using a non-scannable scheme are rejected.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| !INVALID_URL_SCHEMES.contains(&parsed.scheme()))
}

// ============================================================================
// SECTION: Configuration Validation
// ============================================================================

/// Validates a discovery configuration before submission.
///
/// Checks run in order and fail fast: the discovery-set checks, the
/// file-reference rule, then the crawler-URL rule. The pass is pure and
/// idempotent.
///
/// # Errors
///
/// Returns the [`ConfigError`] of the first violated rule.
pub fn validate_config(config: &DiscoveryConfig) -> Result<(), ConfigError> {
    validate_discovery_types(&config.discovery_types)?;
    validate_file_id(config.file_id.as_deref(), &config.discovery_types)?;
    validate_crawler_urls(config.crawler_urls.as_deref(), &config.discovery_types)
}

/// Enforces the file-reference rule against the requested strategies.
fn validate_file_id(file_id: Option<&str>, types: &[Discovery]) -> Result<(), ConfigError> {
    let file_consuming = types.iter().any(|item| FILE_CONSUMING_TYPES.contains(item));
    if file_id.is_some() {
        if !file_consuming {
            return Err(ConfigError::FileIdWithoutCompatibleDiscovery {
                types: types.to_vec(),
            });
        }
    } else if file_consuming {
        return Err(ConfigError::MissingFileId {
            types: types.to_vec(),
        });
    }
    Ok(())
}

/// Enforces the crawler-URL rule against the requested strategies.
fn validate_crawler_urls(
    crawler_urls: Option<&[String]>,
    types: &[Discovery],
) -> Result<(), ConfigError> {
    let crawling = types.contains(&Discovery::Crawler);
    match crawler_urls {
        Some(urls) => {
            if !crawling {
                return Err(ConfigError::CrawlerUrlsWithoutCrawlerDiscovery {
                    types: types.to_vec(),
                });
            }
            if urls.is_empty() {
                return Err(ConfigError::EmptyCrawlerUrls {
                    types: types.to_vec(),
                });
            }
            Ok(())
        }
        None => {
            if crawling {
                return Err(ConfigError::MissingCrawlerUrls {
                    types: types.to_vec(),
                });
            }
            Ok(())
        }
    }
}
