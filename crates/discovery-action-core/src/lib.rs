// crates/discovery-action-core/src/lib.rs
// ============================================================================
// Module: Discovery Action Core Library
// Description: Discovery strategy model and configuration validation.
// Purpose: Validate discovery configurations before submission to the
//          scanning service.
// Dependencies: serde, thiserror, url
// ============================================================================

//! ## Overview
//! Discovery Action Core defines the closed [`Discovery`] strategy
//! enumeration, the [`DiscoveryConfig`] record submitted to the scanning
//! service, and the validation pass that enforces cross-field consistency
//! between strategies and their dependent inputs (file reference, crawler
//! seed URLs).
//! Invariants:
//! - Validation is a pure, single pass with no retries; the first violated
//!   rule is terminal for the invocation.
//! - The disallowed-combination table is static and read-only.
//!
//! Security posture: all configuration values arrive from untrusted CI
//! inputs and must be validated before any network submission.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod discovery;
pub mod error;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::DiscoveryConfig;
pub use config::Exclusions;
pub use config::RequestExclusion;
pub use config::is_valid_url;
pub use config::validate_config;
pub use discovery::DISALLOWED_COMBINATIONS;
pub use discovery::Discovery;
pub use discovery::FILE_CONSUMING_TYPES;
pub use discovery::format_discovery_list;
pub use discovery::parse_discovery_types;
pub use discovery::validate_discovery_types;
pub use error::ConfigError;
