use std::path::Path;

use foundry_compilers::solc::Solc;

use crate::errors::{AdapterError, Result};

/// Bind the pinned solc build at `path`, probing it for its version.
///
/// The returned value owns the snapshot binding; it is handed explicitly to
/// the compile step rather than stored globally, so a longer-lived host could
/// bind several snapshots within one process.
pub fn load_snapshot(path: &Path) -> Result<Solc> {
  let solc = Solc::new(path).map_err(|source| AdapterError::CompilerLoad {
    path: path.to_path_buf(),
    source,
  })?;
  log::info!(
    "Loaded compiler snapshot {} (solc {})",
    path.display(),
    solc.version
  );
  Ok(solc)
}
