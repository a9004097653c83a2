// src/config/validate.rs

//! Input validation.
//!
//! The graph and the engine trust their callers; everything a user can get
//! wrong (blank or duplicate ids, inconsistent estimates, dangling or cyclic
//! dependencies) is rejected here before a graph is built.

use std::collections::{HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{ProjectFile, RawProjectFile};
use crate::errors::{PertError, Result};
use crate::graph::task::id_key;
use crate::graph::{Estimates, TaskGraph, TaskId};
use crate::types::PassOrder;

impl TryFrom<RawProjectFile> for ProjectFile {
    type Error = PertError;

    fn try_from(raw: RawProjectFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_project(&raw)?;
        Ok(ProjectFile::new_unchecked(raw.analysis, raw.task))
    }
}

fn validate_raw_project(cfg: &RawProjectFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_tasks(cfg)?;
    validate_task_dependencies(cfg)?;
    validate_dag(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &RawProjectFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(PertError::ConfigError(
            "project must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_tasks(cfg: &RawProjectFile) -> Result<()> {
    let mut seen: HashSet<String> = HashSet::new();

    for task in &cfg.task {
        validate_id(&task.id)?;
        if !seen.insert(id_key(task.id.trim())) {
            return Err(PertError::DuplicateId(task.id.trim().to_string()));
        }
        validate_estimates(task.id.trim(), &task.estimates())?;
    }
    Ok(())
}

fn validate_task_dependencies(cfg: &RawProjectFile) -> Result<()> {
    let positions: HashMap<String, usize> = cfg
        .task
        .iter()
        .enumerate()
        .map(|(idx, t)| (id_key(t.id.trim()), idx))
        .collect();

    for (idx, task) in cfg.task.iter().enumerate() {
        let name = task.id.trim();
        for dep in task.after.iter().map(|d| d.trim()) {
            let dep_idx = positions.get(&id_key(dep)).copied().ok_or_else(|| {
                PertError::ConfigError(format!(
                    "task '{name}' has unknown dependency '{dep}' in `after`"
                ))
            })?;

            if dep_idx == idx {
                return Err(PertError::ConfigError(format!(
                    "task '{name}' cannot depend on itself in `after`"
                )));
            }

            if cfg.analysis.order == PassOrder::Insertion && dep_idx > idx {
                return Err(PertError::ConfigError(format!(
                    "task '{name}' depends on '{dep}', which is declared later; \
                     insertion order requires predecessors to be declared first"
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(cfg: &RawProjectFile) -> Result<()> {
    // Edge direction: dependency -> task.
    let positions: HashMap<String, usize> = cfg
        .task
        .iter()
        .enumerate()
        .map(|(idx, t)| (id_key(t.id.trim()), idx))
        .collect();

    let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();
    for idx in 0..cfg.task.len() {
        graph.add_node(idx);
    }

    for (idx, task) in cfg.task.iter().enumerate() {
        for dep in task.after.iter() {
            if let Some(&dep_idx) = positions.get(&id_key(dep.trim())) {
                graph.add_edge(dep_idx, idx, ());
            }
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let name = cfg.task[cycle.node_id()].id.trim();
            Err(PertError::DagCycle(format!(
                "cycle detected in task graph involving task '{name}'"
            )))
        }
    }
}

/// Reject blank identifiers.
pub fn validate_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(PertError::ConfigError(
            "task id must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Check that `id` is usable for a new task in `graph`: non-blank and not
/// already taken (ignoring case).
pub fn validate_new_id(id: &str, graph: &TaskGraph) -> Result<()> {
    validate_id(id)?;
    if graph.contains(id.trim()) {
        return Err(PertError::DuplicateId(id.trim().to_string()));
    }
    Ok(())
}

/// Estimates must be finite, non-negative and ordered O <= M <= P.
pub fn validate_estimates(id: &str, est: &Estimates) -> Result<()> {
    let invalid = |reason: String| PertError::InvalidEstimates {
        id: id.to_string(),
        reason,
    };

    for (label, value) in [
        ("optimistic", est.optimistic),
        ("most_likely", est.most_likely),
        ("pessimistic", est.pessimistic),
    ] {
        if !value.is_finite() {
            return Err(invalid(format!("{label} must be a finite number (got {value})")));
        }
        if value < 0.0 {
            return Err(invalid(format!("{label} must be >= 0 (got {value})")));
        }
    }

    if est.optimistic > est.most_likely || est.most_likely > est.pessimistic {
        return Err(invalid(format!(
            "expected optimistic <= most_likely <= pessimistic (got {} / {} / {})",
            est.optimistic, est.most_likely, est.pessimistic
        )));
    }
    Ok(())
}

/// Parse a comma-separated predecessor list such as `"A, B, C"`.
///
/// A blank input means "no predecessors". Every entry must name a task that
/// already exists in `graph`; ids are returned as stored in the graph.
pub fn parse_predecessor_list(input: &str, graph: &TaskGraph) -> Result<Vec<TaskId>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(str::trim)
        .map(|id| {
            if id.is_empty() {
                return Err(PertError::ConfigError(
                    "empty entry in predecessor list".to_string(),
                ));
            }
            graph
                .find(id)
                .map(|t| t.id.clone())
                .ok_or_else(|| PertError::TaskNotFound(id.to_string()))
        })
        .collect()
}
