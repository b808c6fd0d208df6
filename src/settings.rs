use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wildcard key used by the output selection to request every output kind
/// for every file and contract.
pub const WILDCARD: &str = "*";

/// Settings block of the standard-JSON input document.
///
/// The optimizer, libraries and output selection are always serialized. The
/// optional fields follow omit-if-absent semantics: a `None` never reaches
/// the document, so the compiler falls back to its own defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
  pub optimizer: OptimizerSettings,
  pub libraries: BTreeMap<String, BTreeMap<String, String>>,
  pub output_selection: BTreeMap<String, BTreeMap<String, Vec<String>>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub evm_version: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub metadata: Option<SettingsMetadata>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizerSettings {
  pub enabled: bool,
  pub runs: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsMetadata {
  pub bytecode_hash: String,
}

impl CompilerSettings {
  /// Base settings: the external-library mapping is keyed by the unit name
  /// the source is registered under, and the output selection requests every
  /// artifact for every file and contract.
  pub fn new(
    optimizer: OptimizerSettings,
    unit_name: &str,
    external_libraries: BTreeMap<String, String>,
  ) -> Self {
    CompilerSettings {
      optimizer,
      libraries: BTreeMap::from([(unit_name.to_owned(), external_libraries)]),
      output_selection: wildcard_output_selection(),
      evm_version: None,
      metadata: None,
    }
  }

  /// Apply the EVM target version; `None` leaves the field out of the document.
  pub fn with_evm_version(mut self, version: Option<&str>) -> Self {
    self.evm_version = version.map(str::to_owned);
    self
  }

  /// Apply the metadata bytecode hash mode; `None` leaves the `metadata`
  /// block out of the document.
  pub fn with_bytecode_hash(mut self, mode: Option<&str>) -> Self {
    self.metadata = mode.map(|mode| SettingsMetadata {
      bytecode_hash: mode.to_owned(),
    });
    self
  }
}

/// `{"*": {"*": ["*"]}}`
pub fn wildcard_output_selection() -> BTreeMap<String, BTreeMap<String, Vec<String>>> {
  BTreeMap::from([(
    WILDCARD.to_owned(),
    BTreeMap::from([(WILDCARD.to_owned(), vec![WILDCARD.to_owned()])]),
  )])
}
