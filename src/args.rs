use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;

use crate::errors::{AdapterError, Result};

/// Literal sentinel that suppresses an optional settings field entirely.
pub const DEFAULT_SENTINEL: &str = "default";

/// Positional invocation arguments, in the order the calling application
/// supplies them. No flags, no defaults beyond the `default` sentinels; the
/// payload-bearing arguments stay raw strings so the exact-match and
/// fail-fast rules live here instead of inside a generic parser.
#[derive(Parser, Debug)]
#[command(name = "solc-adapter")]
#[command(about = "Compile one Solidity source with a pinned solc build and print the standard-JSON output", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct ProgramArgs {
  /// Path to the Solidity source file to compile
  #[arg(value_name = "sourceCodePath")]
  pub source_code_path: PathBuf,
  /// Path to the pinned solc build to compile with
  #[arg(value_name = "compilerSnapshotPath")]
  pub compiler_snapshot_path: PathBuf,
  /// "1" enables the optimizer; every other value disables it
  #[arg(value_name = "optimize")]
  pub optimize: String,
  /// Optimizer run count, base-10
  #[arg(value_name = "optimizationRuns")]
  pub optimization_runs: String,
  /// Source unit name the submitted code is registered under
  #[arg(value_name = "contractName")]
  pub contract_name: String,
  /// JSON object mapping external library names to deployed addresses
  #[arg(value_name = "externalLibrariesJSON")]
  pub external_libraries: String,
  /// EVM target version, or "default" to leave the compiler's own choice
  #[arg(value_name = "evmVersion")]
  pub evm_version: String,
  /// Metadata bytecode hash mode, or "default" to leave the compiler's own choice
  #[arg(value_name = "bytecodeHash")]
  pub bytecode_hash: String,
}

impl ProgramArgs {
  /// Exact string equality against `"1"`. `"0"`, `"true"`, the empty string
  /// and everything else disable the optimizer.
  pub fn optimizer_enabled(&self) -> bool {
    self.optimize == "1"
  }

  /// Base-10 optimizer run count. Fails fast on a non-numeric value instead
  /// of forwarding it to the compiler.
  pub fn runs(&self) -> Result<u32> {
    self
      .optimization_runs
      .parse::<u32>()
      .map_err(|err| AdapterError::argument("optimizationRuns", err))
  }

  /// Parsed external-library mapping (library name to deployed address).
  pub fn parsed_external_libraries(&self) -> Result<BTreeMap<String, String>> {
    serde_json::from_str(&self.external_libraries)
      .map_err(|err| AdapterError::argument("externalLibrariesJSON", err))
  }

  /// `None` when the argument is the literal `default` sentinel; otherwise
  /// the value verbatim, never validated against the compiler's enumeration.
  pub fn evm_version(&self) -> Option<&str> {
    non_sentinel(&self.evm_version)
  }

  /// `None` when the argument is the literal `default` sentinel.
  pub fn bytecode_hash(&self) -> Option<&str> {
    non_sentinel(&self.bytecode_hash)
  }
}

fn non_sentinel(value: &str) -> Option<&str> {
  if value == DEFAULT_SENTINEL {
    None
  } else {
    Some(value)
  }
}
