//! Error types for a run.

use thiserror::Error;
use workflowengine_config::ConfigError;
use workflowengine_processor::ProcessError;

/// Errors that can occur during a run.
#[derive(Debug, Error)]
pub enum EngineError {
  /// Run configuration is invalid.
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Failed to read an input.
  #[error("failed to read input '{source_name}': {source}")]
  Input {
    source_name: String,
    #[source]
    source: std::io::Error,
  },

  /// An item could not be processed.
  #[error("processing failed for '{item}': {source}")]
  Process {
    item: String,
    #[source]
    source: ProcessError,
  },

  /// Failed to write results.
  #[error("failed to write output to '{target}': {source}")]
  Output {
    target: String,
    #[source]
    source: std::io::Error,
  },

  /// Failed to render results as JSON.
  #[error("failed to render results: {0}")]
  Render(#[from] serde_json::Error),

  /// Run was cancelled.
  #[error("run cancelled")]
  Cancelled,
}
