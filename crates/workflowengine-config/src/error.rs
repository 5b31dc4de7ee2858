use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Failed to read the config file.
  #[error("failed to read config file '{}': {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// Config file is not valid JSON or has unknown keys.
  #[error("failed to parse config file '{}': {source}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// Configuration values are out of range.
  #[error("invalid configuration: {message}")]
  Invalid { message: String },
}
