// src/config/mod.rs

//! Catalog loading and validation for courseplan.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a catalog file from disk (`loader.rs`).
//! - Validate basic invariants like prerequisite acyclicity (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{CatalogFile, ConfigSection, CourseConfig};
pub use validate::validate_catalog;
