use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QualityValueError {
  #[error("invalid HTTP quality value: {0:?}")]
  MalformedEntry(String),
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SplitHostPortError {
  #[error("missing port in address")]
  MissingPort,
  #[error("too many colons in address")]
  TooManyColons,
  #[error("missing ']' in address")]
  MissingBracket,
  #[error("unexpected '[' or ']' in address")]
  UnexpectedBracket,
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Failed to read config file: {path}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error(transparent)]
  Parse(#[from] toml::de::Error),
}
