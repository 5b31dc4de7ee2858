//! Run results.

use serde::{Deserialize, Serialize};
use workflowengine_processor::{ProcessResult, ProcessorStats};

/// Result of a complete run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
  /// Unique execution ID.
  pub execution_id: String,
  /// One result per input, in input order.
  pub results: Vec<ProcessResult>,
  /// Processor counters at the end of the run.
  pub stats: ProcessorStats,
}
