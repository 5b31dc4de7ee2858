//! Input sources for a run.
//!
//! Sources are written as plain strings in config files and on the command line:
//!
//! ```json
//! { "inputs": ["data/orders.txt", "-"] }
//! ```
//!
//! - `"-"` reads the whole of stdin
//! - `"<sample>"` is the built-in sample text
//! - anything else is a file path
//!
//! The built-in sample is also used when no inputs are configured.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text processed when a run has no configured inputs.
pub const SAMPLE_INPUT: &str = "Sample data for processing";

/// Reserved spelling of [`InputSource::Sample`].
pub const SAMPLE_TOKEN: &str = "<sample>";

/// Reserved spelling of [`InputSource::Stdin`].
pub const STDIN_TOKEN: &str = "-";

/// Where the data for one item comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
  /// The built-in sample text.
  Sample,
  /// Standard input, read to the end.
  Stdin,
  /// A file on disk, read as UTF-8.
  File(PathBuf),
}

impl InputSource {
  /// Parse a source from its command line form.
  pub fn parse(value: &str) -> Self {
    match value {
      STDIN_TOKEN => InputSource::Stdin,
      SAMPLE_TOKEN => InputSource::Sample,
      path => InputSource::File(PathBuf::from(path)),
    }
  }
}

impl fmt::Display for InputSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InputSource::Sample => f.write_str(SAMPLE_TOKEN),
      InputSource::Stdin => write!(f, "<stdin>"),
      InputSource::File(path) => write!(f, "{}", path.display()),
    }
  }
}

impl Serialize for InputSource {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      InputSource::Stdin => serializer.serialize_str(STDIN_TOKEN),
      other => serializer.collect_str(other),
    }
  }
}

impl<'de> Deserialize<'de> for InputSource {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(InputSource::parse(&value))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_dash_is_stdin() {
    assert_eq!(InputSource::parse("-"), InputSource::Stdin);
  }

  #[test]
  fn test_parse_path() {
    assert_eq!(
      InputSource::parse("data/in.txt"),
      InputSource::File(PathBuf::from("data/in.txt"))
    );
  }

  #[test]
  fn test_deserialize_list() {
    let sources: Vec<InputSource> = serde_json::from_str(r#"["a.txt", "-"]"#).unwrap();
    assert_eq!(
      sources,
      vec![InputSource::File(PathBuf::from("a.txt")), InputSource::Stdin]
    );
  }

  #[test]
  fn test_serialize_stdin_as_dash() {
    let json = serde_json::to_string(&InputSource::Stdin).unwrap();
    assert_eq!(json, r#""-""#);
  }

  #[test]
  fn test_parse_sample_token() {
    assert_eq!(InputSource::parse("<sample>"), InputSource::Sample);
  }

  #[test]
  fn test_every_source_survives_serde() {
    for source in [
      InputSource::Sample,
      InputSource::Stdin,
      InputSource::File(PathBuf::from("data/in.txt")),
    ] {
      let json = serde_json::to_string(&source).unwrap();
      let back: InputSource = serde_json::from_str(&json).unwrap();
      assert_eq!(back, source, "json was {}", json);
    }
  }

  #[test]
  fn test_display() {
    assert_eq!(InputSource::Sample.to_string(), "<sample>");
    assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
  }
}
