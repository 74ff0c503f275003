// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level catalog as read from a TOML file.
///
/// ```toml
/// [config]
/// max_credits = 24
/// semesters = 4
///
/// [course.CS101]
/// credits = 4
///
/// [course.CS201]
/// credits = 4
/// after = ["CS101"]
/// ```
///
/// The `[config]` section is optional and has defaults; courses are required
/// (an empty catalog is rejected by validation).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    /// Semester limits from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All courses from `[course.<CODE>]`.
    ///
    /// Keys are the course codes (e.g. `"CS101"`). A `BTreeMap` keeps
    /// iteration in code order, which fixes the tie-breaking rule for the
    /// scheduler: when several courses are simultaneously placeable, the
    /// lexicographically lowest code wins.
    #[serde(default)]
    pub course: BTreeMap<String, CourseConfig>,
}

/// `[config]` section: the shared semester limits.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Maximum credit load per semester.
    #[serde(default = "default_max_credits")]
    pub max_credits: u32,

    /// Number of semesters available for placement.
    #[serde(default = "default_semesters")]
    pub semesters: usize,
}

fn default_max_credits() -> u32 {
    24
}

fn default_semesters() -> usize {
    4
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            max_credits: default_max_credits(),
            semesters: default_semesters(),
        }
    }
}

/// `[course.<CODE>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    /// Credit weight of the course. Must be at least 1.
    pub credits: u32,

    /// Prerequisite list: this course may not be placed before (or in an
    /// earlier semester than) any course listed here.
    ///
    /// This is the TOML `after = ["CS101", "MATH101"]` field.
    #[serde(default)]
    pub after: Vec<String>,
}
