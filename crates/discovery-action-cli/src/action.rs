// crates/discovery-action-cli/src/action.rs
// ============================================================================
// Module: Action Flow
// Description: Input assembly, rerun gating, and the validate-then-submit
//              pass.
// Purpose: Turn raw CI inputs into exactly one service call or one failure
//          message.
// Dependencies: discovery-action-core, crate::client, crate::inputs,
//               crate::outputs
// ============================================================================

//! ## Overview
//! The action runs one of two paths. The rerun path resubmits an existing
//! discovery by identifier and accepts no scan-defining parameters; the
//! create path assembles a [`DiscoveryConfig`] from the inputs (applying
//! the action's defaults), validates it once, and submits it. Either way,
//! validation failures terminate the invocation before any network call
//! and the resulting `id`/`url` are reported as action outputs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use discovery_action_core::ConfigError;
use discovery_action_core::Discovery;
use discovery_action_core::DiscoveryConfig;
use discovery_action_core::Exclusions;
use discovery_action_core::RequestExclusion;
use discovery_action_core::is_valid_url;
use discovery_action_core::parse_discovery_types;
use discovery_action_core::validate_config;
use thiserror::Error;

use crate::client::ClientConfig;
use crate::client::ClientError;
use crate::client::DEFAULT_BASE_URL;
use crate::client::DiscoveryClient;
use crate::inputs::ActionInputs;
use crate::inputs::MissingInputError;
use crate::outputs;
use crate::outputs::OutputError;
use crate::outputs::OutputWriter;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default concurrency pool size.
const DEFAULT_POOL_SIZE: u32 = 10;
/// Default interaction chain depth.
const DEFAULT_INTERACTIONS_DEPTH: u32 = 3;

/// Inputs that define a new scan and therefore conflict with a rerun.
const SCAN_DEFINING_INPUTS: &[&str] = &[
    "file_id",
    "crawler_urls",
    "discovery_types",
    "hosts_filter",
    "auth_object_id",
    "repeaters",
    "exclude_entry_points",
];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Action-level errors surfaced as the invocation's failure message.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Configuration-shaped variants are raised before any network call.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The assembled configuration violated a validation rule.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A required input was missing.
    #[error(transparent)]
    MissingInput(#[from] MissingInputError),
    /// A rerun was requested alongside scan-defining parameters.
    #[error(
        "Invalid restart. When restarting a discovery, no scan-defining parameters may be \
         supplied. Conflicting inputs: {}",
        .inputs.join(", ")
    )]
    RerunParameterConflict {
        /// Names of the conflicting inputs.
        inputs: Vec<String>,
    },
    /// The submission collaborator failed.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// Reporting results back to the CI environment failed.
    #[error(transparent)]
    Output(#[from] OutputError),
}

// ============================================================================
// SECTION: Assembly
// ============================================================================

/// Lists the scan-defining inputs supplied alongside a rerun request.
#[must_use]
pub fn rerun_conflicts(inputs: &ActionInputs) -> Vec<String> {
    SCAN_DEFINING_INPUTS
        .iter()
        .filter(|name| inputs.is_set(name))
        .map(ToString::to_string)
        .collect()
}

/// Assembles a discovery configuration from the action inputs.
///
/// Defaults mirror the action contract: `[archive]` when no strategies are
/// supplied, pool size 10, interaction depth 3, optimized crawler on. An
/// empty hosts filter is treated as absent; exclusions are attached only
/// when at least one entry-point exclusion was decoded.
///
/// # Errors
///
/// Returns [`ActionError::Config`] when a supplied strategy name is
/// outside the enumeration.
pub fn assemble_config(inputs: &ActionInputs) -> Result<DiscoveryConfig, ActionError> {
    let discovery_types = match inputs.get_array("discovery_types") {
        Some(names) if !names.is_empty() => parse_discovery_types(&names)?,
        _ => vec![Discovery::Archive],
    };
    let excluded_entry_points = inputs
        .get_json_array::<RequestExclusion>("exclude_entry_points")
        .filter(|requests| !requests.is_empty());
    Ok(DiscoveryConfig {
        name: inputs.get("name").unwrap_or_default(),
        discovery_types,
        file_id: inputs.get("file_id"),
        crawler_urls: inputs.get_array("crawler_urls"),
        auth_object_id: inputs.get("auth_object_id"),
        pool_size: inputs.get_u32("concurrency", DEFAULT_POOL_SIZE),
        hosts_filter: inputs.get_array("hosts_filter").filter(|hosts| !hosts.is_empty()),
        optimized_crawler: inputs.get_bool("smart", true),
        max_interactions_chain_length: inputs
            .get_u32("interactions_depth", DEFAULT_INTERACTIONS_DEPTH),
        subdomains_crawl: inputs.get_bool("sub_domains_crawl", false),
        exclusions: excluded_entry_points.map(|requests| Exclusions {
            params: None,
            requests: Some(requests),
        }),
        repeaters: inputs.get_array("repeaters"),
    })
}

/// Derives the service base URL from the hostname input.
fn resolve_base_url(inputs: &ActionInputs) -> String {
    inputs
        .get("hostname")
        .map_or_else(|| DEFAULT_BASE_URL.to_string(), |hostname| format!("https://{hostname}"))
}

/// Warns about crawler seeds that use non-scannable schemes.
fn warn_on_rejected_seeds(config: &DiscoveryConfig) {
    let Some(urls) = &config.crawler_urls else {
        return;
    };
    for url in urls {
        if !is_valid_url(url) {
            let _ = outputs::warning(&format!("crawler URL {url} uses a non-scannable scheme"));
        }
    }
}

// ============================================================================
// SECTION: Execution
// ============================================================================

/// Executes the action: rerun or create, then report outputs.
///
/// # Errors
///
/// Returns [`ActionError`] for the first violated rule, failed submission,
/// or failed output write. Validation-shaped errors are returned before
/// any network call.
pub fn run(inputs: &ActionInputs, writer: &OutputWriter) -> Result<(), ActionError> {
    let api_token = inputs.get_required("api_token")?;
    let project_id = inputs.get_required("project_id")?;
    let name = inputs.get("name").unwrap_or_default();
    let client_config = ClientConfig {
        base_url: resolve_base_url(inputs),
        api_token,
        ..ClientConfig::default()
    };

    if let Some(discovery_id) = inputs.get("restart_discovery_id") {
        let conflicts = rerun_conflicts(inputs);
        if !conflicts.is_empty() {
            return Err(ActionError::RerunParameterConflict {
                inputs: conflicts,
            });
        }
        let client = DiscoveryClient::new(client_config)?;
        let rerun = client.rerun_discovery(&project_id, &discovery_id, &name)?;
        writer.set_output("url", &rerun.url)?;
        writer.set_output("id", &rerun.id)?;
        return Ok(());
    }

    let config = assemble_config(inputs)?;
    validate_config(&config)?;
    warn_on_rejected_seeds(&config);

    let client = DiscoveryClient::new(client_config)?;
    let created = client.create_discovery(&project_id, &config)?;
    writer.set_output("url", &created.url)?;
    writer.set_output("id", &created.id)?;
    Ok(())
}
