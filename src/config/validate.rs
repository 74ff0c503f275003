// src/config/validate.rs

use anyhow::{anyhow, Result};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::CatalogFile;

/// Run semantic validation against a loaded catalog.
///
/// This checks:
/// - there is at least one course
/// - `max_credits` and `semesters` are at least 1
/// - every course has at least 1 credit
/// - all `after` prerequisites refer to existing courses (and not the course
///   itself)
/// - the prerequisite graph has no cycles
///
/// The scheduler performs its own typed checks as well; validating here means
/// a bad catalog is reported with course codes before any planning starts.
pub fn validate_catalog(catalog: &CatalogFile) -> Result<()> {
    ensure_has_courses(catalog)?;
    validate_limits(catalog)?;
    validate_courses(catalog)?;
    validate_dag(catalog)?;
    Ok(())
}

fn ensure_has_courses(catalog: &CatalogFile) -> Result<()> {
    if catalog.course.is_empty() {
        return Err(anyhow!(
            "catalog must contain at least one [course.<CODE>] section"
        ));
    }
    Ok(())
}

fn validate_limits(catalog: &CatalogFile) -> Result<()> {
    if catalog.config.max_credits == 0 {
        return Err(anyhow!("[config].max_credits must be >= 1 (got 0)"));
    }
    if catalog.config.semesters == 0 {
        return Err(anyhow!("[config].semesters must be >= 1 (got 0)"));
    }
    Ok(())
}

fn validate_courses(catalog: &CatalogFile) -> Result<()> {
    for (code, course) in catalog.course.iter() {
        if course.credits == 0 {
            return Err(anyhow!("course '{}' must have at least 1 credit", code));
        }
        for prereq in course.after.iter() {
            if !catalog.course.contains_key(prereq) {
                return Err(anyhow!(
                    "course '{}' has unknown prerequisite '{}' in `after`",
                    code,
                    prereq
                ));
            }
            if prereq == code {
                return Err(anyhow!(
                    "course '{}' cannot be its own prerequisite in `after`",
                    code
                ));
            }
        }
    }
    Ok(())
}

fn validate_dag(catalog: &CatalogFile) -> Result<()> {
    // Build a petgraph graph from the courses and their prerequisites.
    //
    // Edge direction: prereq -> course
    // For:
    //   [course.CS201]
    //   after = ["CS101"]
    // we add edge CS101 -> CS201.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for code in catalog.course.keys() {
        graph.add_node(code.as_str());
    }

    for (code, course) in catalog.course.iter() {
        for prereq in course.after.iter() {
            graph.add_edge(prereq.as_str(), code.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(anyhow!(
                "cycle detected in prerequisite graph involving course '{}'",
                node
            ))
        }
    }
}
