//! Processing events and notifiers for observability.
//!
//! Events are emitted during a run to allow consumers to observe progress,
//! collect per-item outcomes, drive a progress display, etc.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Events emitted during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProcessingEvent {
  /// Run has started.
  RunStarted {
    execution_id: String,
    input_count: usize,
  },

  /// An input has been read.
  InputLoaded {
    execution_id: String,
    source: String,
    bytes: usize,
  },

  /// An item was processed successfully.
  ItemProcessed {
    execution_id: String,
    source: String,
    item_number: usize,
  },

  /// An item failed and the run continued.
  ItemFailed {
    execution_id: String,
    source: String,
    error: String,
  },

  /// Run has completed.
  RunCompleted {
    execution_id: String,
    processed_count: usize,
    failed_count: usize,
  },

  /// Run has failed.
  RunFailed { execution_id: String, error: String },
}

/// Trait for receiving processing events.
///
/// The engine calls `notify` for each event; implementations decide what to
/// do with them.
pub trait EventNotifier: Send + Sync {
  fn notify(&self, event: ProcessingEvent);
}

/// A notifier that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl EventNotifier for NoopNotifier {
  fn notify(&self, _event: ProcessingEvent) {}
}

/// A notifier that sends events to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  // Unbounded so a slow consumer never stalls the run. Volume is a few
  // events per input.
  sender: mpsc::UnboundedSender<ProcessingEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<ProcessingEvent>) -> Self {
    Self { sender }
  }

  /// Create a notifier together with the receiving end of its channel.
  pub fn channel() -> (Self, mpsc::UnboundedReceiver<ProcessingEvent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Self::new(sender), receiver)
  }
}

impl EventNotifier for ChannelNotifier {
  fn notify(&self, event: ProcessingEvent) {
    // Receiver may have been dropped
    let _ = self.sender.send(event);
  }
}
