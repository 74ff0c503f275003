//! Boundary behaviour: cycles, oversized courses, exhausted capacity and the
//! empty course set.

use std::error::Error;

use courseplan::dag::{Course, Graph, Limits, Scheduler};
use courseplan::errors::PlanError;

type TestResult = Result<(), Box<dyn Error>>;

fn courses(specs: &[(&str, u32)]) -> Vec<Course> {
    specs
        .iter()
        .map(|(code, credits)| Course {
            code: code.to_string(),
            credits: *credits,
        })
        .collect()
}

#[test]
fn out_of_range_edge_is_rejected() {
    let mut graph = Graph::new(2);
    let err = graph.add_prerequisite(0, 5).unwrap_err();
    assert_eq!(err, PlanError::InvalidVertex(5, 2));
}

#[test]
fn graph_tracks_both_edge_directions() {
    let mut graph = Graph::new(3);
    graph.add_prerequisite(1, 0).unwrap();
    graph.add_prerequisite(2, 0).unwrap();

    assert_eq!(graph.prerequisites_of(1), &[0]);
    assert_eq!(graph.dependents_of(0), &[1, 2]);

    let order = graph.topological_sort().unwrap();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn cycle_is_witnessed_by_the_sort() {
    let mut graph = Graph::new(3);
    graph.add_prerequisite(1, 0).unwrap();
    graph.add_prerequisite(2, 1).unwrap();
    graph.add_prerequisite(0, 2).unwrap();

    let cycle = graph.topological_sort().unwrap_err();
    assert_eq!(cycle.vertex(), 0);
}

#[test]
fn witness_lies_on_the_cycle_not_merely_behind_it() {
    // Vertex 0 is blocked by the 1 <-> 2 cycle but is not part of it.
    let mut graph = Graph::new(3);
    graph.add_prerequisite(0, 1).unwrap();
    graph.add_prerequisite(1, 2).unwrap();
    graph.add_prerequisite(2, 1).unwrap();

    let cycle = graph.topological_sort().unwrap_err();
    assert_eq!(cycle.vertex(), 1);
}

#[test]
fn cyclic_prerequisites_are_reported_by_code() -> TestResult {
    let mut graph = Graph::new(2);
    graph.add_prerequisite(0, 1)?;
    graph.add_prerequisite(1, 0)?;

    let limits = Limits {
        max_credits: 10,
        semesters: 2,
    };
    let scheduler = Scheduler::new(graph, courses(&[("A", 3), ("B", 3)]), limits)?;

    let err = scheduler.compute_feasible_ordering().unwrap_err();
    assert_eq!(err, PlanError::CycleDetected("A".to_string()));

    Ok(())
}

#[test]
fn oversized_course_fails_instead_of_looping() -> TestResult {
    let limits = Limits {
        max_credits: 4,
        semesters: 4,
    };
    let scheduler = Scheduler::new(Graph::new(1), courses(&[("HEAVY", 5)]), limits)?;

    match scheduler.compute_feasible_ordering() {
        Err(PlanError::CapacityInfeasible(detail)) => {
            assert!(detail.contains("HEAVY"), "detail was: {detail}");
        }
        other => panic!("expected CapacityInfeasible, got {other:?}"),
    }

    Ok(())
}

#[test]
fn exhausted_semesters_fail_with_the_stuck_courses() -> TestResult {
    // Three courses of 10 credits, two semesters of 10: the third never fits.
    let limits = Limits {
        max_credits: 10,
        semesters: 2,
    };
    let scheduler = Scheduler::new(
        Graph::new(3),
        courses(&[("A", 10), ("B", 10), ("C", 10)]),
        limits,
    )?;

    match scheduler.compute_feasible_ordering() {
        Err(PlanError::CapacityInfeasible(detail)) => {
            assert!(detail.contains('C'), "detail was: {detail}");
        }
        other => panic!("expected CapacityInfeasible, got {other:?}"),
    }

    Ok(())
}

#[test]
fn empty_course_set_is_a_successful_empty_plan() -> TestResult {
    let limits = Limits {
        max_credits: 10,
        semesters: 2,
    };
    let scheduler = Scheduler::new(Graph::new(0), Vec::new(), limits)?;

    let plan = scheduler.compute_feasible_ordering()?;
    assert!(plan.is_empty());
    assert_eq!(plan.len(), 0);

    Ok(())
}

#[test]
fn graph_and_course_table_sizes_must_match() {
    let limits = Limits {
        max_credits: 10,
        semesters: 2,
    };
    let result = Scheduler::new(Graph::new(3), courses(&[("A", 3)]), limits);
    assert!(matches!(result, Err(PlanError::InvalidVertex(3, 1))));
}
