use std::fs;

use foundry_compilers::solc::Solc;
use serde_json::Value;

use crate::args::ProgramArgs;
use crate::errors::{AdapterError, Result};
use crate::input::StandardJsonInput;
use crate::settings::{CompilerSettings, OptimizerSettings};
use crate::solc;

/// Run the whole pipeline: parse the argument payloads, read the source,
/// bind the snapshot, build the input document, compile, and return the
/// parsed output document.
pub fn run(args: &ProgramArgs) -> Result<Value> {
  trace_arguments(args);

  let optimizer = OptimizerSettings {
    enabled: args.optimizer_enabled(),
    runs: args.runs()?,
  };
  let external_libraries = args.parsed_external_libraries()?;

  let source_code =
    fs::read_to_string(&args.source_code_path).map_err(|source| AdapterError::Io {
      path: args.source_code_path.clone(),
      source,
    })?;

  let bound = solc::load_snapshot(&args.compiler_snapshot_path)?;

  let settings = CompilerSettings::new(optimizer, &args.contract_name, external_libraries)
    .with_evm_version(args.evm_version())
    .with_bytecode_hash(args.bytecode_hash());
  let input = StandardJsonInput::single_source(&args.contract_name, source_code, settings);

  compile(&bound, &input)
}

/// Serialize the output document into the single machine-readable stdout line.
pub fn render_output(output: &Value) -> Result<String> {
  serde_json::to_string(output).map_err(|err| {
    AdapterError::CompilerInternal(format!("failed to serialize compiler output: {err}"))
  })
}

/// Invoke the bound compiler in standard-JSON mode and parse its raw output.
///
/// The document is relayed as-is: a Solidity-level `errors` array inside it
/// is a successful adapter run, never interpreted here.
fn compile(bound: &Solc, input: &StandardJsonInput) -> Result<Value> {
  let raw = bound
    .compile_output(input)
    .map_err(|err| AdapterError::CompilerInternal(err.to_string()))?;
  serde_json::from_slice(&raw).map_err(|err| {
    AdapterError::CompilerInternal(format!("unparseable compiler output: {err}"))
  })
}

/// Operational trace of each received argument, kept off stdout so the final
/// JSON line stays the only machine-readable output.
fn trace_arguments(args: &ProgramArgs) {
  log::info!("Source code path {}", args.source_code_path.display());
  log::info!(
    "Compiler snapshot path {}",
    args.compiler_snapshot_path.display()
  );
  log::info!("Optimize {}", args.optimize);
  log::info!("Optimization runs {}", args.optimization_runs);
  log::info!("Contract name {}", args.contract_name);
  log::info!("External libraries {}", args.external_libraries);
  log::info!("EVM version {}", args.evm_version);
  log::info!("Bytecode hash {}", args.bytecode_hash);
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use clap::Parser;
  use tempfile::NamedTempFile;

  use super::*;

  fn parse(args: [&str; 9]) -> ProgramArgs {
    ProgramArgs::try_parse_from(args).expect("parse")
  }

  #[test]
  fn malformed_libraries_fail_before_the_source_is_touched() {
    // The source path does not exist: reaching the Io variant would mean the
    // argument check ran too late.
    let args = parse([
      "solc-adapter",
      "/nonexistent/Contract.sol",
      "/nonexistent/solc",
      "1",
      "200",
      "Contract.sol",
      "{bad json",
      "default",
      "default",
    ]);
    let err = run(&args).map(|_| ()).expect_err("malformed libraries");
    assert!(matches!(err, AdapterError::Argument { .. }), "{err}");
  }

  #[test]
  fn non_numeric_runs_fail_before_the_source_is_touched() {
    let args = parse([
      "solc-adapter",
      "/nonexistent/Contract.sol",
      "/nonexistent/solc",
      "1",
      "many",
      "Contract.sol",
      "{}",
      "default",
      "default",
    ]);
    let err = run(&args).map(|_| ()).expect_err("non-numeric runs");
    assert!(matches!(err, AdapterError::Argument { .. }), "{err}");
  }

  #[test]
  fn missing_source_fails_before_the_snapshot_is_loaded() {
    let args = parse([
      "solc-adapter",
      "/nonexistent/Contract.sol",
      "/nonexistent/solc",
      "1",
      "200",
      "Contract.sol",
      "{}",
      "default",
      "default",
    ]);
    let err = run(&args).map(|_| ()).expect_err("missing source");
    assert!(matches!(err, AdapterError::Io { .. }), "{err}");
  }

  #[test]
  fn unreadable_snapshot_fails_after_the_source_is_read() {
    let mut source = NamedTempFile::new().expect("temp source");
    writeln!(source, "pragma solidity ^0.8.0; contract C {{}}").expect("write source");
    let source_path = source.path().to_string_lossy().into_owned();

    let args = parse([
      "solc-adapter",
      &source_path,
      "/nonexistent/solc",
      "0",
      "0",
      "C.sol",
      "{}",
      "default",
      "default",
    ]);
    let err = run(&args).map(|_| ()).expect_err("missing snapshot");
    assert!(matches!(err, AdapterError::CompilerLoad { .. }), "{err}");
  }

  #[test]
  fn render_output_round_trips_the_document() {
    let output = serde_json::json!({"contracts": {}, "errors": [{"severity": "error"}]});
    let line = render_output(&output).expect("render");
    let reparsed: Value = serde_json::from_str(&line).expect("reparse");
    assert_eq!(reparsed, output);
  }
}
