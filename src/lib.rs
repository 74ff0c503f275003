// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::CatalogFile;
use crate::dag::{Plan, Scheduler};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - catalog loading + validation
/// - the scheduler
/// - plan rendering
pub fn run(args: CliArgs) -> Result<()> {
    let catalog_path = PathBuf::from(&args.config);
    let catalog = load_and_validate(&catalog_path)?;

    if args.check {
        print_catalog(&catalog);
        return Ok(());
    }

    let scheduler = Scheduler::from_catalog(&catalog)?;
    let plan = scheduler.compute_feasible_ordering()?;

    print_plan(&plan);
    Ok(())
}

/// Catalog summary for `--check`: limits, courses, prerequisites.
fn print_catalog(catalog: &CatalogFile) {
    println!("courseplan check");
    println!("  config.max_credits = {}", catalog.config.max_credits);
    println!("  config.semesters = {}", catalog.config.semesters);
    println!();

    println!("courses ({}):", catalog.course.len());
    for (code, course) in catalog.course.iter() {
        println!("  - {code}");
        println!("      credits: {}", course.credits);
        if !course.after.is_empty() {
            println!("      after: {:?}", course.after);
        }
    }

    debug!("check complete (no plan computed)");
}

/// Render a plan: one course per line, grouped per semester.
fn print_plan(plan: &Plan) {
    if plan.is_empty() {
        println!("nothing to plan: the catalog has no courses");
        return;
    }

    println!("feasible plan ({} courses):", plan.len());

    for (semester, placements) in plan.by_semester().iter().enumerate() {
        if placements.is_empty() {
            continue;
        }
        println!();
        println!(
            "semester {} ({} credits):",
            semester + 1,
            plan.semester_credits[semester]
        );
        for placement in placements {
            println!("  {}", placement.course);
        }
    }
}
