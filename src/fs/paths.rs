//! Output directory checks and per-item paths.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default directory downloads are written into.
pub const DEFAULT_OUTPUT_DIR: &str = "download";

/// Check that the output directory already exists and is a directory.
///
/// The directory is never created here; a missing directory is an error.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingDirectory(path.to_path_buf()));
        }
        Err(e) => return Err(Error::Io(e)),
    };

    if !metadata.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }

    Ok(())
}

/// Path an item is saved to: the identifier, verbatim, inside `dir`.
///
/// Identifiers that would leave `dir` are rejected.
pub fn item_path(dir: &Path, id: &str) -> Result<PathBuf> {
    if id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\'])
        || id.contains('\0')
    {
        return Err(Error::InvalidFilename(id.to_string()));
    }

    Ok(dir.join(id))
}
