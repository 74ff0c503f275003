// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::model::CatalogFile;
use crate::config::validate::validate_catalog;

/// Load a catalog file from a given path and return the raw [`CatalogFile`].
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (prerequisite references, acyclicity, limits). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CatalogFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading catalog file at {:?}", path))?;

    let catalog: CatalogFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML catalog from {:?}", path))?;

    Ok(catalog)
}

/// Load a catalog file from path and run semantic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - unknown or self-referencing `after` entries,
///   - prerequisite cycles,
///   - zero credits / zero limits.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<CatalogFile> {
    let catalog = load_from_path(&path)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Default catalog path: `Courseplan.toml` in the current working directory.
pub fn default_catalog_path() -> PathBuf {
    PathBuf::from("Courseplan.toml")
}
