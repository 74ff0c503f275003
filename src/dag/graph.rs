// src/dag/graph.rs

use std::collections::BTreeSet;

use crate::errors::PlanError;

/// Witness of a cycle: one vertex known to lie on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle(usize);

impl Cycle {
    pub fn vertex(&self) -> usize {
        self.0
    }
}

/// Directed prerequisite graph over a fixed vertex set.
///
/// Vertices are indices `0..vertices`; the mapping from index to course code
/// is owned by the caller (the scheduler keeps courses in a table whose order
/// matches). Edges run `prerequisite -> dependent`; both directions are kept
/// so the scheduler can look up a course's prerequisites directly.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: usize,
    /// Out-edges: `dependents[v]` are the vertices that require `v`.
    dependents: Vec<Vec<usize>>,
    /// In-edges: `prereqs[v]` are the vertices `v` requires.
    prereqs: Vec<Vec<usize>>,
    /// Incoming edge count per vertex, maintained by [`add_prerequisite`].
    ///
    /// [`add_prerequisite`]: Graph::add_prerequisite
    in_degree: Vec<usize>,
}

impl Graph {
    /// Build a graph with `vertices` isolated vertices.
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            dependents: vec![Vec::new(); vertices],
            prereqs: vec![Vec::new(); vertices],
            in_degree: vec![0; vertices],
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices == 0
    }

    /// Record that `prereq` must be placed no later than `course`.
    ///
    /// Adds the directed edge `prereq -> course` and bumps `course`'s
    /// in-degree. Out-of-range indices are rejected rather than left as
    /// undefined behaviour.
    pub fn add_prerequisite(&mut self, course: usize, prereq: usize) -> Result<(), PlanError> {
        for v in [course, prereq] {
            if v >= self.vertices {
                return Err(PlanError::InvalidVertex(v, self.vertices));
            }
        }

        self.dependents[prereq].push(course);
        self.prereqs[course].push(prereq);
        self.in_degree[course] += 1;
        Ok(())
    }

    /// Direct prerequisites of a vertex (its in-neighbours).
    pub fn prerequisites_of(&self, vertex: usize) -> &[usize] {
        self.prereqs
            .get(vertex)
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }

    /// Direct dependents of a vertex (its out-neighbours).
    pub fn dependents_of(&self, vertex: usize) -> &[usize] {
        self.dependents
            .get(vertex)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// Produce a topological ordering of all vertices, or a [`Cycle`] witness
    /// if none exists.
    ///
    /// Kahn's algorithm over the maintained in-degrees. The ready frontier is
    /// a `BTreeSet`, so among simultaneously-ready vertices the lowest index
    /// is emitted first; with vertices assigned in catalog order this makes
    /// the ordering fully deterministic. If the sort consumes fewer than all
    /// vertices, the remaining ones all sit on or behind a cycle, and the
    /// lowest such index is returned as the witness.
    pub fn topological_sort(&self) -> Result<Vec<usize>, Cycle> {
        let mut in_degree = self.in_degree.clone();

        let mut ready: BTreeSet<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == 0)
            .map(|(v, _)| v)
            .collect();

        let mut order = Vec::with_capacity(self.vertices);

        while let Some(v) = ready.pop_first() {
            order.push(v);

            for &dep in &self.dependents[v] {
                in_degree[dep] -= 1;
                if in_degree[dep] == 0 {
                    ready.insert(dep);
                }
            }
        }

        if order.len() < self.vertices {
            return Err(self.find_cycle_witness(&in_degree));
        }

        Ok(order)
    }

    /// Pick a vertex that actually lies on a cycle.
    ///
    /// `residual` is the in-degree left over after the sort: exactly the
    /// unconsumed vertices carry a positive count, and each of them has at
    /// least one unconsumed prerequisite. Walking those prerequisite edges
    /// from the lowest unconsumed vertex must therefore revisit some vertex,
    /// and the revisited one is on a cycle (a vertex that is merely blocked
    /// *behind* a cycle is never re-entered by the walk).
    fn find_cycle_witness(&self, residual: &[usize]) -> Cycle {
        let start = residual.iter().position(|&d| d > 0).unwrap_or(0);
        let mut seen = vec![false; self.vertices];

        let mut v = start;
        loop {
            if seen[v] {
                return Cycle(v);
            }
            seen[v] = true;

            match self.prereqs[v].iter().copied().find(|&p| residual[p] > 0) {
                Some(p) => v = p,
                None => return Cycle(v),
            }
        }
    }
}
