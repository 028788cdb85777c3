// crates/discovery-action-cli/src/client.rs
// ============================================================================
// Module: Submission Client
// Description: Blocking HTTP client for the scanning service API.
// Purpose: Create and rerun discoveries with bounded transient retries.
// Dependencies: discovery-action-core, reqwest, serde
// ============================================================================

//! ## Overview
//! The submission client posts validated configurations to the scanning
//! service. Success is any status below 300 carrying a JSON body with an
//! `id`; transient failures (transport errors, 429, 502, 503, 504) are
//! retried up to the configured budget with a fixed delay, and every other
//! status is terminal. The client never retries validation-level failures;
//! those are rejected before it is even constructed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use discovery_action_core::DiscoveryConfig;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Hosted service endpoint used when no hostname input is supplied.
pub const DEFAULT_BASE_URL: &str = "https://app.brightsec.com";

/// Configuration for the submission client.
///
/// # Invariants
/// - `max_retries` bounds re-sends of a single request; the first attempt
///   is not counted as a retry.
/// - `base_url` carries no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL.
    pub base_url: String,
    /// API token sent as the `Api-Key` authorization credential.
    pub api_token: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum automatic retries on transient failure.
    pub max_retries: u32,
    /// Fixed delay between retries, in milliseconds.
    pub retry_delay_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: String::new(),
            timeout_ms: 30_000,
            max_retries: 5,
            retry_delay_ms: 1_000,
            user_agent: "discovery-action/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// Service response body for created or rerun discoveries.
#[derive(Debug, Deserialize)]
struct DiscoveryId {
    /// Identifier assigned by the service.
    id: String,
}

/// Rerun request body.
#[derive(Debug, Serialize)]
struct RerunBody<'a> {
    /// Name carried over to the rerun.
    name: &'a str,
}

/// Identifier and dashboard URL of a created or rerun discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedDiscovery {
    /// Identifier assigned by the service.
    pub id: String,
    /// Resource URL of the discovery.
    pub url: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Submission client errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("failed to build the submission client: {0}")]
    Build(String),
    /// The request failed at the transport layer after all retries.
    #[error("failed to reach the scanning service: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service rejected the submission.
    #[error("Failed to create discovery. Status code: {status}")]
    Submission {
        /// Terminal HTTP status code.
        status: u16,
        /// Response body, when one was readable.
        body: String,
    },
    /// The service accepted the submission but returned an unusable body.
    #[error("the scanning service returned a malformed response: {0}")]
    MalformedResponse(String),
}

// ============================================================================
// SECTION: Client Implementation
// ============================================================================

/// Statuses retried as transient.
const TRANSIENT_STATUSES: &[u16] = &[429, 502, 503, 504];

/// Blocking submission client for the scanning service.
///
/// # Invariants
/// - Every request carries the `Api-Key` authorization header.
/// - Only transient failures are retried, within `max_retries`.
pub struct DiscoveryClient {
    /// Client configuration, including the retry budget.
    config: ClientConfig,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl DiscoveryClient {
    /// Creates a new submission client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] when the API token is not a valid
    /// header value or the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut auth = HeaderValue::from_str(&format!("Api-Key {}", config.api_token))
            .map_err(|err| ClientError::Build(err.to_string()))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Creates a new discovery from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the service rejects the submission or
    /// cannot be reached within the retry budget.
    pub fn create_discovery(
        &self,
        project_id: &str,
        config: &DiscoveryConfig,
    ) -> Result<CreatedDiscovery, ClientError> {
        let endpoint = self.discoveries_endpoint(project_id);
        let created = self.post_json(&endpoint, config)?;
        Ok(self.locate(project_id, created))
    }

    /// Reruns an existing discovery by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the service rejects the rerun or
    /// cannot be reached within the retry budget.
    pub fn rerun_discovery(
        &self,
        project_id: &str,
        discovery_id: &str,
        name: &str,
    ) -> Result<CreatedDiscovery, ClientError> {
        let endpoint = format!("{}/{discovery_id}/rerun", self.discoveries_endpoint(project_id));
        let rerun = self.post_json(&endpoint, &RerunBody {
            name,
        })?;
        Ok(self.locate(project_id, rerun))
    }

    /// Returns the discoveries collection endpoint for a project.
    fn discoveries_endpoint(&self, project_id: &str) -> String {
        format!("{}/api/v2/projects/{project_id}/discoveries", self.config.base_url)
    }

    /// Derives the resource URL for a discovery identifier.
    fn locate(&self, project_id: &str, discovery: DiscoveryId) -> CreatedDiscovery {
        let url = format!("{}/{}", self.discoveries_endpoint(project_id), discovery.id);
        CreatedDiscovery {
            id: discovery.id,
            url,
        }
    }

    /// Posts a JSON body, retrying transient failures.
    fn post_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<DiscoveryId, ClientError> {
        let mut attempt: u32 = 0;
        loop {
            let outcome = self.client.post(endpoint).json(body).send();
            match outcome {
                Ok(response) if response.status().as_u16() < 300 => {
                    return response
                        .json()
                        .map_err(|err| ClientError::MalformedResponse(err.to_string()));
                }
                Ok(response)
                    if is_transient(response.status()) && attempt < self.config.max_retries => {}
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response.text().unwrap_or_default();
                    return Err(ClientError::Submission {
                        status,
                        body,
                    });
                }
                Err(_) if attempt < self.config.max_retries => {}
                Err(err) => return Err(ClientError::Transport(err)),
            }
            attempt += 1;
            std::thread::sleep(Duration::from_millis(self.config.retry_delay_ms));
        }
    }
}

/// Returns whether a status code is worth retrying.
fn is_transient(status: StatusCode) -> bool {
    TRANSIENT_STATUSES.contains(&status.as_u16())
}
