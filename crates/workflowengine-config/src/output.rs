use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How processing results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
  /// Pretty-printed JSON.
  #[default]
  Pretty,
  /// Single-line JSON.
  Compact,
  /// One compact JSON result per line.
  JsonLines,
}

impl OutputFormat {
  pub fn as_str(&self) -> &'static str {
    match self {
      OutputFormat::Pretty => "pretty",
      OutputFormat::Compact => "compact",
      OutputFormat::JsonLines => "json-lines",
    }
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OutputFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pretty" => Ok(OutputFormat::Pretty),
      "compact" => Ok(OutputFormat::Compact),
      "json-lines" => Ok(OutputFormat::JsonLines),
      other => Err(format!(
        "unknown output format '{}' (expected pretty, compact or json-lines)",
        other
      )),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_str() {
    assert_eq!("pretty".parse(), Ok(OutputFormat::Pretty));
    assert_eq!("compact".parse(), Ok(OutputFormat::Compact));
    assert_eq!("json-lines".parse(), Ok(OutputFormat::JsonLines));
    assert!("jsonl".parse::<OutputFormat>().is_err());
    assert!("yaml".parse::<OutputFormat>().is_err());
  }

  #[test]
  fn test_serde_names_match_display() {
    for format in [
      OutputFormat::Pretty,
      OutputFormat::Compact,
      OutputFormat::JsonLines,
    ] {
      let json = serde_json::to_string(&format).unwrap();
      assert_eq!(json, format!("\"{}\"", format));
    }
  }
}
