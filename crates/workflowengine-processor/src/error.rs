use thiserror::Error;

/// Errors that can occur while processing an item.
#[derive(Debug, Error)]
pub enum ProcessError {
  /// Item exceeds the configured size limit.
  #[error("input of {length} bytes exceeds limit of {limit} bytes")]
  InputTooLarge { length: usize, limit: usize },

  /// Failed to encode item metadata.
  #[error("failed to encode item metadata: {0}")]
  Serialize(#[from] serde_json::Error),
}
