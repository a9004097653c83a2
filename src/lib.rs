// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod report;
pub mod types;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ProjectFile;
use crate::config::sample::sample_project;
use crate::engine::PertEngine;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - project loading (file or built-in sample) and validation
/// - graph construction
/// - the four-phase PERT analysis
/// - report output
pub fn run(args: CliArgs) -> Result<()> {
    let project = if args.sample {
        sample_project()?
    } else {
        let path = PathBuf::from(&args.project);
        load_and_validate(&path)
            .with_context(|| format!("failed to load project file {}", path.display()))?
    };

    if args.dry_run {
        print_dry_run(&project);
        return Ok(());
    }

    let engine = PertEngine::new(args.order.unwrap_or(project.analysis.order));
    info!(order = ?engine.order(), tasks = project.task.len(), "running PERT analysis");

    let mut graph = project.build_graph()?;
    let analysis = engine.analyze(&mut graph);

    println!("{}", report::render_table(&graph));
    println!();
    println!("critical path: {}", report::render_critical_path(&graph));
    println!("project duration: {:.1}", analysis.project_duration);

    if args.diagram {
        println!();
        println!("{}", report::render_diagram(&graph));
    }

    Ok(())
}

/// Simple dry-run output: print tasks, estimates and dependencies.
fn print_dry_run(project: &ProjectFile) {
    println!("pertdag dry-run");
    println!("  analysis.order = {:?}", project.analysis.order);
    println!();

    println!("tasks ({}):", project.task.len());
    for task in project.task.iter() {
        println!("  - {}", task.id);
        if !task.description.is_empty() {
            println!("      description: {}", task.description);
        }
        println!(
            "      estimates: O={} M={} P={}",
            task.optimistic, task.most_likely, task.pessimistic
        );
        if !task.after.is_empty() {
            println!("      after: {:?}", task.after);
        }
    }

    debug!("dry-run complete (no calculation)");
}
