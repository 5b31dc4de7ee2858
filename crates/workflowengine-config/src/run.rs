use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::InputSource;
use crate::output::OutputFormat;

/// Default number of inputs read concurrently.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Configuration for a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
  /// Log per-item detail at debug level.
  pub verbose: bool,

  /// Inputs to process, in order. Empty means the built-in sample.
  pub inputs: Vec<InputSource>,

  /// File to write results to. Results go to stdout when unset.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub output: Option<PathBuf>,

  pub output_format: OutputFormat,

  /// Maximum number of inputs read at the same time.
  pub concurrency: usize,

  /// Items larger than this many bytes are rejected.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_input_bytes: Option<usize>,

  /// Record failed items and keep going instead of aborting the run.
  pub continue_on_error: bool,
}

impl Default for RunConfig {
  fn default() -> Self {
    Self {
      verbose: false,
      inputs: Vec::new(),
      output: None,
      output_format: OutputFormat::default(),
      concurrency: DEFAULT_CONCURRENCY,
      max_input_bytes: None,
      continue_on_error: false,
    }
  }
}

/// Values supplied on the command line.
///
/// Anything left unset keeps the value from the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
  pub verbose: bool,
  pub inputs: Vec<InputSource>,
  pub output: Option<PathBuf>,
  pub output_format: Option<OutputFormat>,
  pub concurrency: Option<usize>,
  pub max_input_bytes: Option<usize>,
  pub continue_on_error: bool,
}

impl RunConfig {
  /// Load a config file. The file must exist.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    Self::from_json(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Load a config file if it exists, otherwise return the defaults.
  pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
    if path.exists() {
      Self::load(path)
    } else {
      Ok(Self::default())
    }
  }

  pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(content)
  }

  /// Layer command line values over this config.
  pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
    self.verbose |= overrides.verbose;
    self.continue_on_error |= overrides.continue_on_error;

    if !overrides.inputs.is_empty() {
      self.inputs = overrides.inputs;
    }
    if let Some(output) = overrides.output {
      self.output = Some(output);
    }
    if let Some(format) = overrides.output_format {
      self.output_format = format;
    }
    if let Some(concurrency) = overrides.concurrency {
      self.concurrency = concurrency;
    }
    if let Some(limit) = overrides.max_input_bytes {
      self.max_input_bytes = Some(limit);
    }

    self
  }

  /// Check that values are usable for a run.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.concurrency == 0 {
      return Err(ConfigError::Invalid {
        message: "concurrency must be at least 1".to_string(),
      });
    }
    if self.max_input_bytes == Some(0) {
      return Err(ConfigError::Invalid {
        message: "max_input_bytes must be at least 1".to_string(),
      });
    }

    // Each stdin source would open its own handle and split the stream.
    let stdin_count = self
      .inputs
      .iter()
      .filter(|source| **source == InputSource::Stdin)
      .count();
    if stdin_count > 1 {
      return Err(ConfigError::Invalid {
        message: format!("stdin can be used as an input only once, got {}", stdin_count),
      });
    }
    Ok(())
  }

  /// The inputs a run actually processes.
  pub fn effective_inputs(&self) -> Vec<InputSource> {
    if self.inputs.is_empty() {
      vec![InputSource::Sample]
    } else {
      self.inputs.clone()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = RunConfig::default();
    assert!(!config.verbose);
    assert!(config.inputs.is_empty());
    assert_eq!(config.output, None);
    assert_eq!(config.output_format, OutputFormat::Pretty);
    assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_empty_json_uses_defaults() {
    let config = RunConfig::from_json("{}").unwrap();
    assert_eq!(config, RunConfig::default());
  }

  #[test]
  fn test_parse_full_config() {
    let json = r#"{
      "verbose": true,
      "inputs": ["a.txt", "-"],
      "output": "out.json",
      "output_format": "json-lines",
      "concurrency": 2,
      "max_input_bytes": 1024,
      "continue_on_error": true
    }"#;

    let config = RunConfig::from_json(json).unwrap();
    assert!(config.verbose);
    assert_eq!(config.inputs.len(), 2);
    assert_eq!(config.inputs[1], InputSource::Stdin);
    assert_eq!(config.output, Some(PathBuf::from("out.json")));
    assert_eq!(config.output_format, OutputFormat::JsonLines);
    assert_eq!(config.concurrency, 2);
    assert_eq!(config.max_input_bytes, Some(1024));
    assert!(config.continue_on_error);
  }

  #[test]
  fn test_unknown_key_rejected() {
    let result = RunConfig::from_json(r#"{"network_timeout": 5}"#);
    assert!(result.is_err());
  }

  #[test]
  fn test_overrides_win() {
    let file = RunConfig {
      inputs: vec![InputSource::parse("file.txt")],
      output_format: OutputFormat::Compact,
      concurrency: 8,
      ..Default::default()
    };

    let config = file.apply(ConfigOverrides {
      verbose: true,
      inputs: vec![InputSource::parse("cli.txt")],
      output_format: Some(OutputFormat::JsonLines),
      ..Default::default()
    });

    assert!(config.verbose);
    assert_eq!(config.inputs, vec![InputSource::parse("cli.txt")]);
    assert_eq!(config.output_format, OutputFormat::JsonLines);
    assert_eq!(config.concurrency, 8);
  }

  #[test]
  fn test_empty_overrides_keep_file_values() {
    let file = RunConfig {
      verbose: true,
      inputs: vec![InputSource::parse("file.txt")],
      output: Some(PathBuf::from("out.json")),
      continue_on_error: true,
      ..Default::default()
    };

    let config = file.clone().apply(ConfigOverrides::default());
    assert_eq!(config, file);
  }

  #[test]
  fn test_validate_rejects_zero_concurrency() {
    let config = RunConfig {
      concurrency: 0,
      ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
  }

  #[test]
  fn test_validate_rejects_zero_size_limit() {
    let config = RunConfig {
      max_input_bytes: Some(0),
      ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
  }

  #[test]
  fn test_validate_rejects_repeated_stdin() {
    let config = RunConfig {
      inputs: vec![
        InputSource::Stdin,
        InputSource::parse("a.txt"),
        InputSource::Stdin,
      ],
      ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
  }

  #[test]
  fn test_validate_accepts_single_stdin() {
    let config = RunConfig {
      inputs: vec![InputSource::Stdin, InputSource::parse("a.txt")],
      ..Default::default()
    };
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_config_survives_serde() {
    let config = RunConfig {
      verbose: true,
      inputs: vec![
        InputSource::Sample,
        InputSource::Stdin,
        InputSource::parse("a.txt"),
      ],
      output: Some(PathBuf::from("out.json")),
      output_format: OutputFormat::JsonLines,
      concurrency: 2,
      max_input_bytes: Some(64),
      continue_on_error: true,
    };

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(RunConfig::from_json(&json).unwrap(), config);
  }

  #[test]
  fn test_effective_inputs_falls_back_to_sample() {
    let config = RunConfig::default();
    assert_eq!(config.effective_inputs(), vec![InputSource::Sample]);
  }
}
