// src/errors.rs

//! Crate-wide error types.
//!
//! [`PlanError`] covers every way the core computation can fail; the CLI
//! layer wraps it in `anyhow` for display.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// An edge endpoint is outside the graph's vertex range.
    #[error("invalid vertex {0} (graph has {1} vertices)")]
    InvalidVertex(usize, usize),

    /// The prerequisite relation is not acyclic. The payload is the code of
    /// one course known to lie on a cycle.
    #[error("cycle detected in prerequisite graph involving '{0}'")]
    CycleDetected(String),

    /// The course set is acyclic but cannot be packed into the configured
    /// semesters under the credit limit.
    #[error("no feasible plan: {0}")]
    CapacityInfeasible(String),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PlanError>;
