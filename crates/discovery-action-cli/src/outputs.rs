// crates/discovery-action-cli/src/outputs.rs
// ============================================================================
// Module: Action Outputs
// Description: CI output-file appends and workflow-command emitters.
// Purpose: Report results and diagnostics back to the CI environment.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Outputs flow back to the CI runner in two ways: named outputs are
//! appended to the file designated by `GITHUB_OUTPUT`, and diagnostics are
//! emitted on stdout as workflow commands (`::debug::`, `::warning::`,
//! `::error::`). All writes go through explicit [`std::io::Write`]
//! helpers. Command payloads are escaped so multi-line values cannot
//! smuggle additional commands.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Environment variable naming the CI output file.
const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Output-reporting errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum OutputError {
    /// No output file is configured in the environment.
    #[error("no CI output file is configured ({OUTPUT_FILE_ENV} is unset)")]
    Unconfigured,
    /// Appending to the output file failed.
    #[error("failed to write CI output file: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// SECTION: Output Writer
// ============================================================================

/// Appender for named action outputs.
///
/// # Invariants
/// - Writes are line-oriented `name=value` appends; values are escaped so
///   a single output occupies a single line.
/// - The default writer is unconfigured and rejects every write.
#[derive(Debug, Clone, Default)]
pub struct OutputWriter {
    /// Destination file, when configured.
    path: Option<PathBuf>,
}

impl OutputWriter {
    /// Creates a writer targeting the file named by `GITHUB_OUTPUT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os(OUTPUT_FILE_ENV).map(PathBuf::from),
        }
    }

    /// Creates a writer targeting an explicit file path.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
        }
    }

    /// Appends a named output value.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] when no output file is configured or the
    /// append fails.
    pub fn set_output(&self, name: &str, value: &str) -> Result<(), OutputError> {
        let path = self.path.as_ref().ok_or(OutputError::Unconfigured)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{name}={}", escape_data(value))?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Workflow Commands
// ============================================================================

/// Escapes a command payload for single-line transport.
fn escape_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Emits a workflow command on stdout.
fn emit_command(command: &str, message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "::{command}::{}", escape_data(message))
}

/// Emits a debug-level diagnostic.
///
/// # Errors
///
/// Returns the underlying I/O error when stdout is unavailable.
pub fn debug(message: &str) -> std::io::Result<()> {
    emit_command("debug", message)
}

/// Emits a warning annotation.
///
/// # Errors
///
/// Returns the underlying I/O error when stdout is unavailable.
pub fn warning(message: &str) -> std::io::Result<()> {
    emit_command("warning", message)
}

/// Emits an error annotation.
///
/// # Errors
///
/// Returns the underlying I/O error when stdout is unavailable.
pub fn error(message: &str) -> std::io::Result<()> {
    emit_command("error", message)
}
