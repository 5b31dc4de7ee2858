//! WorkflowEngine run orchestration
//!
//! This crate drives a complete run: it loads the configured inputs, feeds
//! them through a [`Processor`](workflowengine_processor::Processor) and
//! renders the results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      WorkflowEngine                         │
//! │  - execute(cancel) → RunReport                              │
//! │  - run(cancel) → execute + render + write output            │
//! │  - emits ProcessingEvents to an EventNotifier               │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 load_inputs (InputReader)                   │
//! │  - files, stdin, built-in sample, bounded by size limit     │
//! │  - bounded concurrent reads, input order preserved          │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Processor                            │
//! │  - one item at a time, assigns item numbers                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use workflowengine_config::RunConfig;
//! use workflowengine_engine::WorkflowEngine;
//! use tokio_util::sync::CancellationToken;
//!
//! let engine = WorkflowEngine::new(RunConfig::default())?;
//! let report = engine.run(CancellationToken::new()).await?;
//! println!("processed {} items", report.stats.processed_count);
//! ```

mod engine;
mod error;
mod events;
mod output;
mod result;
mod source;

pub use engine::{WorkflowEngine, run};
pub use error::EngineError;
pub use events::{ChannelNotifier, EventNotifier, NoopNotifier, ProcessingEvent};
pub use output::{render, write_output};
pub use result::RunReport;
pub use source::{FsInputReader, InputReader, LoadedInput, read_limited, read_source};

pub use workflowengine_config::{InputSource, OutputFormat, RunConfig};
pub use workflowengine_processor::{ProcessResult, ProcessorStats};
