// src/dag/scheduler.rs

use std::collections::{HashMap, VecDeque};

use tracing::{debug, info, warn};

use crate::config::model::CatalogFile;
use crate::dag::graph::Graph;
use crate::errors::PlanError;

/// A course as the scheduler sees it: a stable code plus its credit weight.
///
/// Prerequisites are not stored here; they live in the [`Graph`] as edges
/// between vertex indices, and the course table is the single owner of the
/// course data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: String,
    pub credits: u32,
}

/// Shared semester limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum credit load per semester.
    pub max_credits: u32,
    /// Number of semesters available for placement.
    pub semesters: usize,
}

/// One committed entry of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub course: String,
    pub credits: u32,
    /// Semester index, `0..semesters`.
    pub semester: usize,
}

/// A feasible ordering: placements in commit order plus per-semester credit
/// totals.
///
/// Immutable once returned. For every placement, all prerequisites appear
/// earlier in the sequence and in an earlier-or-equal semester, and no
/// semester total exceeds the credit limit. An empty plan only ever means an
/// empty course set; infeasibility is a [`PlanError`], never an empty result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub placements: Vec<Placement>,
    pub semester_credits: Vec<u32>,
}

impl Plan {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Course codes in commit order.
    pub fn sequence(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(|p| p.course.as_str())
    }

    /// Placements grouped by semester index.
    pub fn by_semester(&self) -> Vec<Vec<&Placement>> {
        let mut semesters = vec![Vec::new(); self.semester_credits.len()];
        for placement in &self.placements {
            semesters[placement.semester].push(placement);
        }
        semesters
    }
}

/// Scheduler holds the immutable course table, its prerequisite graph and the
/// semester limits.
///
/// It is responsible for:
/// - ordering the courses so every prerequisite precedes its dependents
/// - packing that order into semesters without exceeding the credit limit
/// - reporting cycles and capacity infeasibility as typed errors
pub struct Scheduler {
    graph: Graph,
    courses: Vec<Course>,
    limits: Limits,
}

impl Scheduler {
    /// Construct a scheduler from a course table, its graph and limits.
    ///
    /// Vertex `v` of the graph corresponds to `courses[v]`; a graph of any
    /// other size references vertices outside the table.
    pub fn new(graph: Graph, courses: Vec<Course>, limits: Limits) -> Result<Self, PlanError> {
        if graph.len() != courses.len() {
            return Err(PlanError::InvalidVertex(graph.len(), courses.len()));
        }

        Ok(Self {
            graph,
            courses,
            limits,
        })
    }

    /// Construct a scheduler from a loaded [`CatalogFile`].
    ///
    /// Vertex indices are assigned in catalog (code) order, so the plan is
    /// deterministic for a given catalog. Prefer running
    /// [`validate_catalog`] first for code-level error messages; unknown
    /// `after` references surface here as [`PlanError::InvalidVertex`].
    ///
    /// [`validate_catalog`]: crate::config::validate_catalog
    pub fn from_catalog(catalog: &CatalogFile) -> Result<Self, PlanError> {
        let courses: Vec<Course> = catalog
            .course
            .iter()
            .map(|(code, cc)| Course {
                code: code.clone(),
                credits: cc.credits,
            })
            .collect();

        let index: HashMap<&str, usize> = courses
            .iter()
            .enumerate()
            .map(|(v, c)| (c.code.as_str(), v))
            .collect();

        let mut graph = Graph::new(courses.len());
        for (v, cc) in catalog.course.values().enumerate() {
            for prereq in cc.after.iter() {
                match index.get(prereq.as_str()) {
                    Some(&p) => graph.add_prerequisite(v, p)?,
                    None => {
                        return Err(PlanError::InvalidVertex(courses.len(), courses.len()));
                    }
                }
            }
        }

        let limits = Limits {
            max_credits: catalog.config.max_credits,
            semesters: catalog.config.semesters,
        };

        Self::new(graph, courses, limits)
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Compute a feasible ordering of all courses, or report why none exists.
    ///
    /// The topological order seeds a FIFO work queue. Each course is placed
    /// into the earliest semester that (a) is not earlier than any of its
    /// prerequisites' semesters and (b) has room for its credits; a course
    /// whose prerequisites are not all placed yet, or that fits nowhere right
    /// now, is requeued. The queue is processed in passes: a full pass that
    /// commits nothing can never make progress later (semester capacity only
    /// shrinks), so it fails with [`PlanError::CapacityInfeasible`].
    pub fn compute_feasible_ordering(&self) -> Result<Plan, PlanError> {
        if self.courses.is_empty() {
            debug!("empty course set; returning the empty plan");
            return Ok(Plan::default());
        }

        // A course over the per-semester limit can never be placed.
        for course in &self.courses {
            if course.credits > self.limits.max_credits {
                return Err(PlanError::CapacityInfeasible(format!(
                    "course '{}' needs {} credits but a semester holds at most {}",
                    course.code, course.credits, self.limits.max_credits
                )));
            }
        }

        let order = self
            .graph
            .topological_sort()
            .map_err(|cycle| PlanError::CycleDetected(self.courses[cycle.vertex()].code.clone()))?;

        debug!(courses = order.len(), "topological order computed");

        let mut queue: VecDeque<usize> = order.into();
        let mut semester_credits = vec![0u32; self.limits.semesters];
        let mut placed: Vec<Option<usize>> = vec![None; self.courses.len()];
        let mut placements = Vec::with_capacity(self.courses.len());

        while !queue.is_empty() {
            let pass_len = queue.len();
            let mut committed = 0usize;

            for _ in 0..pass_len {
                let Some(u) = queue.pop_front() else { break };
                let course = &self.courses[u];

                // A course may share a semester with a prerequisite but never
                // precede one, so placement starts at the latest prerequisite
                // semester.
                let mut earliest = 0usize;
                let mut waiting = false;
                for &p in self.graph.prerequisites_of(u) {
                    match placed[p] {
                        Some(s) => earliest = earliest.max(s),
                        None => {
                            waiting = true;
                            break;
                        }
                    }
                }

                if waiting {
                    debug!(course = %course.code, "prerequisite not placed yet; requeueing");
                    queue.push_back(u);
                    continue;
                }

                let slot = (earliest..self.limits.semesters)
                    .find(|&s| semester_credits[s] + course.credits <= self.limits.max_credits);

                match slot {
                    Some(s) => {
                        semester_credits[s] += course.credits;
                        placed[u] = Some(s);
                        placements.push(Placement {
                            course: course.code.clone(),
                            credits: course.credits,
                            semester: s,
                        });
                        committed += 1;
                        debug!(
                            course = %course.code,
                            semester = s,
                            load = semester_credits[s],
                            "course committed"
                        );
                    }
                    None => {
                        debug!(
                            course = %course.code,
                            earliest,
                            "no semester has room; requeueing"
                        );
                        queue.push_back(u);
                    }
                }
            }

            if committed == 0 && !queue.is_empty() {
                let stuck: Vec<&str> = queue.iter().map(|&v| self.courses[v].code.as_str()).collect();
                warn!(?stuck, "no course committed in a full pass over the queue");
                return Err(PlanError::CapacityInfeasible(format!(
                    "cannot place {} within {} semesters of at most {} credits",
                    stuck.join(", "),
                    self.limits.semesters,
                    self.limits.max_credits
                )));
            }
        }

        info!(placed = placements.len(), "feasible ordering computed");

        Ok(Plan {
            placements,
            semester_credits,
        })
    }
}
