use std::future::Future;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use workflowengine_config::{ConfigOverrides, InputSource, OutputFormat, RunConfig};
use workflowengine_engine::WorkflowEngine;

/// WorkflowEngine - process input documents into JSON processing records
#[derive(Parser)]
#[command(name = "workflowengine")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,

  /// Input file path, repeatable ("-" reads stdin, "<sample>" the built-in sample)
  #[arg(short, long)]
  input: Vec<String>,

  /// Output file path (default: stdout)
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Output format: pretty, compact or json-lines
  #[arg(short, long)]
  format: Option<OutputFormat>,

  /// Path to a JSON config file
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Path to the data directory (default: ~/.workflowengine)
  #[arg(long)]
  data_dir: Option<PathBuf>,

  /// Maximum number of inputs read at the same time
  #[arg(long)]
  concurrency: Option<usize>,

  /// Reject inputs larger than this many bytes
  #[arg(long)]
  max_input_bytes: Option<usize>,

  /// Record failed items and keep going
  #[arg(long)]
  continue_on_error: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let config = load_config(&cli)?;
  init_tracing(config.verbose);

  block_on_run(run(config))
}

/// Drive `task` to completion on a fresh runtime.
///
/// A cancelled stdin read stays parked on a blocking thread, so the runtime
/// is shut down without waiting for blocking tasks.
fn block_on_run<F>(task: F) -> Result<()>
where
  F: Future<Output = Result<()>>,
{
  let rt = tokio::runtime::Runtime::new()?;
  let result = rt.block_on(task);
  rt.shutdown_background();
  result
}

fn load_config(cli: &Cli) -> Result<RunConfig> {
  let file_config = match &cli.config {
    Some(path) => RunConfig::load(path)?,
    None => {
      let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => dirs::home_dir()
          .context("could not determine home directory")?
          .join(".workflowengine"),
      };
      RunConfig::load_optional(&data_dir.join("config.json"))?
    }
  };

  let overrides = ConfigOverrides {
    verbose: cli.verbose,
    inputs: cli.input.iter().map(|s| InputSource::parse(s)).collect(),
    output: cli.output.clone(),
    output_format: cli.format,
    concurrency: cli.concurrency,
    max_input_bytes: cli.max_input_bytes,
    continue_on_error: cli.continue_on_error,
  };

  Ok(file_config.apply(overrides))
}

fn init_tracing(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  // Results go to stdout, logs to stderr
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

async fn run(config: RunConfig) -> Result<()> {
  info!("starting workflowengine processing");

  let engine = WorkflowEngine::new(config).context("invalid configuration")?;

  let cancel = CancellationToken::new();
  let ctrl_c = cancel.clone();
  tokio::spawn(async move {
    if tokio::signal::ctrl_c().await.is_ok() {
      ctrl_c.cancel();
    }
  });

  let report = engine.run(cancel).await.context("processing failed")?;

  info!(
    execution_id = %report.execution_id,
    processed_count = report.stats.processed_count,
    failed_count = report.stats.failed_count,
    "processing complete"
  );

  Ok(())
}
