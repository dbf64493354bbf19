#![cfg_attr(not(feature = "cli"), allow(dead_code))]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Error if `path` exists and overwriting was not requested, or if it is a directory.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.is_dir() {
        anyhow::bail!("Output path is a directory: {}", path.display());
    }
    if path.exists() && !force {
        anyhow::bail!("Output file already exists (use --force to overwrite): {}", path.display());
    }
    Ok(())
}

/// Create the parent directory of `path` if it doesn't exist.
pub(crate) fn ensure_parent_dir_exists(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else { return Ok(()) };
    if parent.exists() {
        if !parent.is_dir() {
            anyhow::bail!("Path exists but is not a directory: {}", parent.display());
        }
    } else {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}
