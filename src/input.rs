use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::settings::CompilerSettings;

pub const LANGUAGE_SOLIDITY: &str = "Solidity";

/// Standard-JSON input document handed to the bound compiler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardJsonInput {
  pub language: String,
  pub sources: BTreeMap<String, SourceEntry>,
  pub settings: CompilerSettings,
}

/// Inline source text registered under a unit name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceEntry {
  pub content: String,
}

impl StandardJsonInput {
  /// Document with a single source entry keyed by the unit name, carrying the
  /// full submitted source text.
  pub fn single_source(unit_name: &str, content: String, settings: CompilerSettings) -> Self {
    StandardJsonInput {
      language: LANGUAGE_SOLIDITY.to_owned(),
      sources: BTreeMap::from([(unit_name.to_owned(), SourceEntry { content })]),
      settings,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;

  use super::*;
  use crate::settings::{CompilerSettings, OptimizerSettings};

  #[test]
  fn single_source_registers_the_unit_name() {
    let settings = CompilerSettings::new(
      OptimizerSettings {
        enabled: false,
        runs: 0,
      },
      "Greeter.sol",
      BTreeMap::new(),
    );
    let input = StandardJsonInput::single_source(
      "Greeter.sol",
      "pragma solidity ^0.8.0; contract Greeter {}".to_owned(),
      settings,
    );

    let value = serde_json::to_value(input).expect("serialize");
    assert_eq!(value["language"], "Solidity");
    assert_eq!(
      value["sources"]["Greeter.sol"]["content"],
      "pragma solidity ^0.8.0; contract Greeter {}"
    );
  }
}
