//! Reading input sources.
//!
//! Reads are bounded by the run's size limit: an input longer than the limit
//! is measured but its content is not kept, so the processor can reject it
//! without the whole input sitting in memory.

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};
use workflowengine_config::{InputSource, SAMPLE_INPUT};

use crate::error::EngineError;

/// An input read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedInput {
  pub source: InputSource,
  /// Full content, or empty when `length` exceeds the size limit.
  pub content: String,
  /// Byte length of the whole input.
  pub length: usize,
}

impl LoadedInput {
  fn complete(source: InputSource, content: String) -> Self {
    Self {
      length: content.len(),
      source,
      content,
    }
  }

  fn oversized(source: InputSource, length: usize) -> Self {
    Self {
      source,
      content: String::new(),
      length,
    }
  }
}

/// Reads input sources for the engine.
#[async_trait]
pub trait InputReader: Send + Sync {
  /// Read `source`, keeping at most `limit` bytes of content.
  async fn read(
    &self,
    source: &InputSource,
    limit: Option<usize>,
  ) -> Result<LoadedInput, EngineError>;
}

/// Reads the built-in sample, stdin and files from disk.
#[derive(Debug, Clone, Default)]
pub struct FsInputReader;

#[async_trait]
impl InputReader for FsInputReader {
  async fn read(
    &self,
    source: &InputSource,
    limit: Option<usize>,
  ) -> Result<LoadedInput, EngineError> {
    read_source(source, limit).await
  }
}

/// Read a single input source.
pub async fn read_source(
  source: &InputSource,
  limit: Option<usize>,
) -> Result<LoadedInput, EngineError> {
  let input_error = |e: io::Error| EngineError::Input {
    source_name: source.to_string(),
    source: e,
  };

  match source {
    InputSource::Sample => Ok(LoadedInput::complete(
      source.clone(),
      SAMPLE_INPUT.to_string(),
    )),
    InputSource::Stdin => read_limited(source.clone(), tokio::io::stdin(), limit)
      .await
      .map_err(input_error),
    InputSource::File(path) => {
      if let Some(limit) = limit {
        let size = tokio::fs::metadata(path).await.map_err(input_error)?.len();
        if size > limit as u64 {
          return Ok(LoadedInput::oversized(
            source.clone(),
            usize::try_from(size).unwrap_or(usize::MAX),
          ));
        }
      }

      let file = tokio::fs::File::open(path).await.map_err(input_error)?;
      read_limited(source.clone(), file, limit)
        .await
        .map_err(input_error)
    }
  }
}

/// Read `reader` to the end as UTF-8, holding at most `limit + 1` bytes.
///
/// Past the limit the rest of the stream is drained and counted only.
pub async fn read_limited<R>(
  source: InputSource,
  mut reader: R,
  limit: Option<usize>,
) -> io::Result<LoadedInput>
where
  R: AsyncRead + Unpin,
{
  let mut buf = Vec::new();

  match limit {
    Some(limit) => {
      (&mut reader)
        .take(limit as u64 + 1)
        .read_to_end(&mut buf)
        .await?;
      if buf.len() > limit {
        let rest = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await?;
        let length = buf.len().saturating_add(usize::try_from(rest).unwrap_or(usize::MAX));
        return Ok(LoadedInput::oversized(source, length));
      }
    }
    None => {
      reader.read_to_end(&mut buf).await?;
    }
  }

  let content =
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
  Ok(LoadedInput::complete(source, content))
}
