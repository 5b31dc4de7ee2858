//! The run engine.

use std::sync::Arc;

use futures::{StreamExt, TryStreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};
use workflowengine_config::{InputSource, RunConfig};
use workflowengine_processor::{ProcessResult, Processor};

use crate::error::EngineError;
use crate::events::{EventNotifier, NoopNotifier, ProcessingEvent};
use crate::output::{render, write_output};
use crate::result::RunReport;
use crate::source::{FsInputReader, InputReader, LoadedInput};

/// Drives a run over the configured inputs.
pub struct WorkflowEngine {
  config: RunConfig,
  notifier: Arc<dyn EventNotifier>,
  reader: Arc<dyn InputReader>,
}

impl WorkflowEngine {
  /// Create a new engine. Fails if the configuration is invalid.
  pub fn new(config: RunConfig) -> Result<Self, EngineError> {
    config.validate()?;

    Ok(Self {
      config,
      notifier: Arc::new(NoopNotifier),
      reader: Arc::new(FsInputReader),
    })
  }

  /// Send processing events to `notifier`.
  pub fn with_notifier(mut self, notifier: Arc<dyn EventNotifier>) -> Self {
    self.notifier = notifier;
    self
  }

  /// Read inputs through `reader` instead of the filesystem and stdin.
  pub fn with_reader(mut self, reader: Arc<dyn InputReader>) -> Self {
    self.reader = reader;
    self
  }

  /// Process every input and return the report without writing output.
  #[instrument(name = "run_execute", skip(self, cancel))]
  pub async fn execute(&self, cancel: CancellationToken) -> Result<RunReport, EngineError> {
    let execution_id = uuid::Uuid::new_v4().to_string();
    let inputs = self.config.effective_inputs();

    info!(
      execution_id = %execution_id,
      input_count = inputs.len(),
      "run_started"
    );
    self.notifier.notify(ProcessingEvent::RunStarted {
      execution_id: execution_id.clone(),
      input_count: inputs.len(),
    });

    let result = self.execute_inner(&execution_id, &inputs, &cancel).await;

    match &result {
      Ok(report) => {
        info!(
          execution_id = %execution_id,
          processed_count = report.stats.processed_count,
          failed_count = report.stats.failed_count,
          "run_completed"
        );
        self.notifier.notify(ProcessingEvent::RunCompleted {
          execution_id: execution_id.clone(),
          processed_count: report.stats.processed_count,
          failed_count: report.stats.failed_count,
        });
      }
      Err(e) => {
        error!(
          execution_id = %execution_id,
          error = %e,
          "run_failed"
        );
        self.notifier.notify(ProcessingEvent::RunFailed {
          execution_id: execution_id.clone(),
          error: e.to_string(),
        });
      }
    }

    result
  }

  /// Process every input, then render and write the results.
  pub async fn run(&self, cancel: CancellationToken) -> Result<RunReport, EngineError> {
    let report = self.execute(cancel).await?;

    let rendered = render(&report.results, self.config.output_format)?;
    if let Some(path) = &self.config.output {
      info!(path = %path.display(), "writing results");
    }
    write_output(&rendered, self.config.output.as_deref()).await?;

    Ok(report)
  }

  async fn execute_inner(
    &self,
    execution_id: &str,
    inputs: &[InputSource],
    cancel: &CancellationToken,
  ) -> Result<RunReport, EngineError> {
    if cancel.is_cancelled() {
      warn!(execution_id = %execution_id, "run cancelled before start");
      return Err(EngineError::Cancelled);
    }

    let loaded = self.load_inputs(execution_id, inputs, cancel).await?;
    self.process_inputs(execution_id, loaded, cancel)
  }

  /// Read inputs with bounded concurrency, keeping input order.
  async fn load_inputs(
    &self,
    execution_id: &str,
    inputs: &[InputSource],
    cancel: &CancellationToken,
  ) -> Result<Vec<LoadedInput>, EngineError> {
    let limit = self.config.max_input_bytes;
    let loads = futures::stream::iter(inputs)
      .map(|source| self.reader.read(source, limit))
      .buffered(self.config.concurrency)
      .try_collect::<Vec<_>>();

    let loaded = tokio::select! {
      biased;
      _ = cancel.cancelled() => {
        warn!(execution_id = %execution_id, "run cancelled while loading inputs");
        return Err(EngineError::Cancelled);
      }
      loaded = loads => loaded?,
    };

    for input in &loaded {
      debug!(
        execution_id = %execution_id,
        source = %input.source,
        bytes = input.length,
        "input_loaded"
      );
      self.notifier.notify(ProcessingEvent::InputLoaded {
        execution_id: execution_id.to_string(),
        source: input.source.to_string(),
        bytes: input.length,
      });
    }

    Ok(loaded)
  }

  /// Feed loaded inputs through a fresh processor, in order.
  fn process_inputs(
    &self,
    execution_id: &str,
    loaded: Vec<LoadedInput>,
    cancel: &CancellationToken,
  ) -> Result<RunReport, EngineError> {
    let mut processor = Processor::new(self.config.verbose);
    if let Some(limit) = self.config.max_input_bytes {
      processor = processor.with_max_input_bytes(limit);
    }

    let mut results = Vec::with_capacity(loaded.len());

    for input in loaded {
      if cancel.is_cancelled() {
        warn!(execution_id = %execution_id, "run cancelled during processing");
        return Err(EngineError::Cancelled);
      }

      let source = input.source.to_string();
      let outcome = processor
        .check_size(input.length)
        .and_then(|()| processor.process(&input.content));
      match outcome {
        Ok(result) => {
          let item_number = processor.processed_count();
          if self.config.verbose {
            debug!(
              execution_id = %execution_id,
              source = %source,
              item_number,
              result = ?result,
              "item_processed"
            );
          }
          self.notifier.notify(ProcessingEvent::ItemProcessed {
            execution_id: execution_id.to_string(),
            source,
            item_number,
          });
          results.push(result);
        }
        Err(e) if self.config.continue_on_error => {
          error!(
            execution_id = %execution_id,
            source = %source,
            error = %e,
            "item_failed"
          );
          self.notifier.notify(ProcessingEvent::ItemFailed {
            execution_id: execution_id.to_string(),
            source,
            error: e.to_string(),
          });
          results.push(ProcessResult::failure(e.to_string()));
        }
        Err(e) => {
          return Err(EngineError::Process {
            item: source,
            source: e,
          });
        }
      }
    }

    Ok(RunReport {
      execution_id: execution_id.to_string(),
      results,
      stats: processor.stats(),
    })
  }
}

/// Run with `config` until completion, writing results to the configured output.
pub async fn run(config: RunConfig) -> Result<RunReport, EngineError> {
  let engine = WorkflowEngine::new(config)?;
  engine.run(CancellationToken::new()).await
}
