//! Processing results.

use serde::{Deserialize, Serialize};

/// Result of processing one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
  pub success: bool,
  pub message: String,
  pub data: Option<serde_json::Value>,
}

impl ProcessResult {
  /// A result recording a failed item.
  pub fn failure(message: impl Into<String>) -> Self {
    Self {
      success: false,
      message: message.into(),
      data: None,
    }
  }
}

/// Metadata recorded for a successful item.
///
/// This is the shape of [`ProcessResult::data`] on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
  /// Byte length of the item.
  pub length: usize,
  /// RFC 3339 timestamp in UTC.
  pub processed_at: String,
  /// 1-based ordinal among successful items.
  pub item_number: usize,
}
