//! Rendering and writing results.

use std::path::Path;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use workflowengine_config::OutputFormat;
use workflowengine_processor::ProcessResult;

use crate::error::EngineError;

/// Render results in the given format.
///
/// A single result renders as a bare object for `pretty` and `compact`;
/// several results render as an array. `json-lines` always writes one
/// object per line.
pub fn render(results: &[ProcessResult], format: OutputFormat) -> Result<String, EngineError> {
  let rendered = match (format, results) {
    (OutputFormat::JsonLines, _) => {
      let mut out = String::new();
      for result in results {
        out.push_str(&serde_json::to_string(result)?);
        out.push('\n');
      }
      out
    }
    (OutputFormat::Pretty, [single]) => serde_json::to_string_pretty(single)?,
    (OutputFormat::Pretty, _) => serde_json::to_string_pretty(results)?,
    (OutputFormat::Compact, [single]) => serde_json::to_string(single)?,
    (OutputFormat::Compact, _) => serde_json::to_string(results)?,
  };

  Ok(rendered)
}

/// Write rendered results to a file, or to stdout when `output` is `None`.
pub async fn write_output(rendered: &str, output: Option<&Path>) -> Result<(), EngineError> {
  match output {
    Some(path) => tokio::fs::write(path, rendered)
      .await
      .map_err(|source| EngineError::Output {
        target: path.display().to_string(),
        source,
      }),
    None => write_stream(tokio::io::stdout(), rendered)
      .await
      .map_err(|source| EngineError::Output {
        target: "<stdout>".to_string(),
        source,
      }),
  }
}

/// Write rendered results to a stream, newline-terminated.
async fn write_stream<W>(mut writer: W, rendered: &str) -> std::io::Result<()>
where
  W: AsyncWrite + Unpin,
{
  writer.write_all(rendered.as_bytes()).await?;
  if !rendered.ends_with('\n') {
    writer.write_all(b"\n").await?;
  }
  writer.flush().await
}
