//! WorkflowEngine Config
//!
//! This crate contains the serializable run configuration for workflowengine.
//! A `RunConfig` describes which inputs to process, where results go and how
//! they are formatted.
//!
//! Configuration can be loaded from:
//! - JSON files (via CLI with `--config=config.json`, or `config.json` in the data dir)
//! - CLI flags, layered on top with [`ConfigOverrides`]
//!
//! The engine validates the final configuration before it starts a run.

mod error;
mod input;
mod output;
mod run;

pub use error::ConfigError;
pub use input::{InputSource, SAMPLE_INPUT, SAMPLE_TOKEN, STDIN_TOKEN};
pub use output::OutputFormat;
pub use run::{ConfigOverrides, DEFAULT_CONCURRENCY, RunConfig};
