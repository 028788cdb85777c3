// crates/discovery-action-cli/src/main.rs
// ============================================================================
// Module: Discovery Action Entry Point
// Description: One-shot binary driving the validate-then-submit flow.
// Purpose: Translate the action outcome into CI annotations and an exit
//          code.
// Dependencies: discovery-action-cli
// ============================================================================

//! ## Overview
//! The binary reads every parameter from the CI-provided `INPUT_*`
//! environment (there is no argv surface), runs the action flow once, and
//! terminates with a zero exit on success or a single `::error::`
//! annotation and a non-zero exit on any failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::process::ExitCode;

use discovery_action_cli::ActionInputs;
use discovery_action_cli::OutputWriter;
use discovery_action_cli::outputs;
use discovery_action_cli::run;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Action entry point returning an exit code.
fn main() -> ExitCode {
    let inputs = ActionInputs::from_env();
    let writer = OutputWriter::from_env();
    match run(&inputs, &writer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => emit_failure(&err.to_string()),
    }
}

/// Emits a failure annotation and returns a failure exit code.
fn emit_failure(message: &str) -> ExitCode {
    let _ = outputs::error(message);
    ExitCode::FAILURE
}
