// crates/discovery-action-core/src/error.rs
// ============================================================================
// Module: Configuration Errors
// Description: Error taxonomy for discovery configuration validation.
// Purpose: Surface the first violated rule with a stable, user-facing
//          message.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every variant is a user/configuration error; none are transient or
//! retriable at this layer. Cross-field variants echo the caller's full
//! requested strategy list for diagnostic clarity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::discovery::Discovery;
use crate::discovery::format_discovery_list;

// ============================================================================
// SECTION: Error Taxonomy
// ============================================================================

/// Discovery configuration validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Display strings are part of the action's user-facing contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A requested strategy is outside the closed enumeration.
    #[error("Unknown discovery type supplied.")]
    UnknownDiscoveryType,
    /// The requested strategy sequence repeats an entry.
    #[error("Discovery contains duplicate values.")]
    DuplicateDiscoveryType,
    /// The requested set matched a disallowed-combination rule.
    #[error(
        "The discovery list cannot include both {anchor} and any of {} simultaneously.",
        format_discovery_list(.conflicts)
    )]
    DisallowedCombination {
        /// Anchor strategy whose presence triggered the rule.
        anchor: Discovery,
        /// Full conflicting set of the rule, as defined in the table.
        conflicts: Vec<Discovery>,
    },
    /// A file reference was supplied without a file-consuming strategy.
    #[error(
        "Invalid discovery. When specifying a file ID, the discovery type must be either \
         \"oas\" or \"archive\". The current discovery types are: {}",
        format_discovery_list(.types)
    )]
    FileIdWithoutCompatibleDiscovery {
        /// Full requested strategy list.
        types: Vec<Discovery>,
    },
    /// A file-consuming strategy was requested without a file reference.
    #[error(
        "Invalid discovery. When setting a discovery type to either \"oas\" or \"archive\", \
         the file ID must be provided. The current discovery types are: {}",
        format_discovery_list(.types)
    )]
    MissingFileId {
        /// Full requested strategy list.
        types: Vec<Discovery>,
    },
    /// Crawler seed URLs were supplied without the crawler strategy.
    #[error(
        "Invalid discovery. When specifying crawler URLs, the discovery type must be \
         \"crawler\". The current discovery types are: {}",
        format_discovery_list(.types)
    )]
    CrawlerUrlsWithoutCrawlerDiscovery {
        /// Full requested strategy list.
        types: Vec<Discovery>,
    },
    /// The crawler seed URL list is present but empty.
    #[error(
        "No crawler URLs configured. The current discovery types are: {}",
        format_discovery_list(.types)
    )]
    EmptyCrawlerUrls {
        /// Full requested strategy list.
        types: Vec<Discovery>,
    },
    /// The crawler strategy was requested without seed URLs.
    #[error(
        "Invalid discovery. When setting a discovery type to \"crawler\", the crawler URLs \
         must be provided. The current discovery types are: {}",
        format_discovery_list(.types)
    )]
    MissingCrawlerUrls {
        /// Full requested strategy list.
        types: Vec<Discovery>,
    },
}
