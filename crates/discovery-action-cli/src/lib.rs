// crates/discovery-action-cli/src/lib.rs
// ============================================================================
// Module: Discovery Action CLI Library
// Description: CI glue around the discovery configuration core.
// Purpose: Read action inputs, submit validated discoveries, and write
//          action outputs.
// Dependencies: discovery-action-core, reqwest, serde, thiserror
// ============================================================================

//! ## Overview
//! This crate wires the validation core into a one-shot CI action: inputs
//! arrive through the `INPUT_*` environment, the assembled configuration is
//! validated exactly once, and the result is either submitted to the
//! scanning service or reported as a single failure message with a
//! non-zero exit.
//! Invariants:
//! - Validation failures (including the rerun mutual-exclusion gate)
//!   terminate the invocation before any network call.
//! - Submission failures are reported once; only transient transport
//!   failures are retried, inside the client's bounded retry budget.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod action;
pub mod client;
pub mod inputs;
pub mod outputs;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use action::ActionError;
pub use action::assemble_config;
pub use action::rerun_conflicts;
pub use action::run;
pub use client::ClientConfig;
pub use client::ClientError;
pub use client::CreatedDiscovery;
pub use client::DiscoveryClient;
pub use inputs::ActionInputs;
pub use inputs::MissingInputError;
pub use outputs::OutputError;
pub use outputs::OutputWriter;
