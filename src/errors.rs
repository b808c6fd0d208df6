use std::path::PathBuf;

use foundry_compilers::error::SolcError;
use thiserror::Error;

/// Canonical error type for every adapter-level failure.
///
/// Solidity-level compile errors are not represented here: the compiler
/// reports them inside its output document and the adapter relays that
/// document unchanged as a successful run.
#[derive(Debug, Error)]
pub enum AdapterError {
  /// The source file could not be read.
  #[error("failed to read source file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  /// The compiler snapshot could not be loaded or is not a runnable solc build.
  #[error("failed to load compiler snapshot {path}: {source}")]
  CompilerLoad {
    path: PathBuf,
    #[source]
    source: SolcError,
  },
  /// An invocation argument failed to parse.
  #[error("invalid argument {name}: {message}")]
  Argument { name: &'static str, message: String },
  /// The compiler itself failed to run or produced unparseable output.
  #[error("compiler invocation failed: {0}")]
  CompilerInternal(String),
}

impl AdapterError {
  pub(crate) fn argument(name: &'static str, cause: impl std::fmt::Display) -> Self {
    AdapterError::Argument {
      name,
      message: cause.to_string(),
    }
  }
}

/// Result alias bound to [`AdapterError`].
pub type Result<T> = std::result::Result<T, AdapterError>;
