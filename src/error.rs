
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("config error: {0}")]
  Config(#[from] toml::de::Error),

  #[error("invalid config: {0}")]
  InvalidConfig(String),

  // Raised for any symbol the feature table (and therefore the distance matrix) does not know.
  #[error("phoneme {0:?} is not in the feature table")]
  MissingPhoneme(String),

  #[error("unknown dictionary symbol {0:?}")]
  UnknownSymbol(String),

  #[error("{}:{}: malformed line {:?}: {}", .path.display(), .line_number, .line, .reason)]
  MalformedLine {
    path: PathBuf,
    line_number: usize,
    line: String,
    reason: String
  },
}

pub type Result<T> = std::result::Result<T, Error>;
