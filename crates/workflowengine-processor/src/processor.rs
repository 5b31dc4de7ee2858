use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ProcessError;
use crate::result::{ItemMetadata, ProcessResult};

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorStats {
  pub processed_count: usize,
  pub failed_count: usize,
  pub verbose: bool,
}

/// Assigns item numbers and builds a [`ProcessResult`] for each item.
#[derive(Debug)]
pub struct Processor {
  verbose: bool,
  processed_count: usize,
  failed_count: usize,
  max_input_bytes: Option<usize>,
}

impl Processor {
  pub fn new(verbose: bool) -> Self {
    Self {
      verbose,
      processed_count: 0,
      failed_count: 0,
      max_input_bytes: None,
    }
  }

  /// Reject items longer than `limit` bytes.
  pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
    self.max_input_bytes = Some(limit);
    self
  }

  /// Process one item.
  ///
  /// A rejected item counts as failed and does not consume an item number.
  pub fn process(&mut self, data: &str) -> Result<ProcessResult, ProcessError> {
    if self.verbose {
      debug!(length = data.len(), "processing item");
    }

    self.check_size(data.len())?;

    let item_number = self.processed_count + 1;
    let metadata = ItemMetadata {
      length: data.len(),
      processed_at: Utc::now().to_rfc3339(),
      item_number,
    };
    let data = serde_json::to_value(&metadata)?;

    self.processed_count = item_number;

    Ok(ProcessResult {
      success: true,
      message: format!("Successfully processed item #{}", item_number),
      data: Some(data),
    })
  }

  /// Reject an item of `length` bytes if it exceeds the size limit.
  ///
  /// Lets callers turn away oversized items without holding their content.
  /// A rejection counts as failed.
  pub fn check_size(&mut self, length: usize) -> Result<(), ProcessError> {
    match self.max_input_bytes {
      Some(limit) if length > limit => {
        self.failed_count += 1;
        warn!(length, limit, "item rejected");
        Err(ProcessError::InputTooLarge { length, limit })
      }
      _ => Ok(()),
    }
  }

  pub fn stats(&self) -> ProcessorStats {
    ProcessorStats {
      processed_count: self.processed_count,
      failed_count: self.failed_count,
      verbose: self.verbose,
    }
  }

  pub fn processed_count(&self) -> usize {
    self.processed_count
  }

  pub fn verbose(&self) -> bool {
    self.verbose
  }
}
