// src/graph/task.rs

//! Task value type: input estimates, derived schedule, edge lists.

/// Identifier of a task. Compared case-insensitively within a graph.
pub type TaskId = String;

/// Three-point duration estimate.
///
/// `optimistic <= most_likely <= pessimistic` is a caller precondition; the
/// graph and the engine accept any values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Estimates {
    pub optimistic: f64,
    pub most_likely: f64,
    pub pessimistic: f64,
}

impl Estimates {
    pub fn new(optimistic: f64, most_likely: f64, pessimistic: f64) -> Self {
        Self {
            optimistic,
            most_likely,
            pessimistic,
        }
    }
}

/// Fields derived by the calculation phases.
///
/// Everything starts at zero / `false`. Values are not invalidated when the
/// graph is mutated afterwards; re-run the analysis to refresh them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Schedule {
    /// Expected duration (Te).
    pub expected: f64,
    pub variance: f64,
    pub early_start: f64,
    pub early_finish: f64,
    pub late_start: f64,
    pub late_finish: f64,
    /// `late_finish - early_finish`, rounded to 5 decimal places.
    pub slack: f64,
    pub critical: bool,
}

/// One task of the project.
///
/// Edge lists hold identifiers, not references, and may contain duplicates.
/// They are only mutated through [`TaskGraph`](crate::graph::TaskGraph) so
/// that predecessor/successor symmetry holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub estimates: Estimates,
    pub schedule: Schedule,
    pub(crate) successors: Vec<TaskId>,
    pub(crate) predecessors: Vec<TaskId>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, description: impl Into<String>, estimates: Estimates) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            estimates,
            schedule: Schedule::default(),
            successors: Vec::new(),
            predecessors: Vec::new(),
        }
    }

    /// Tasks that depend on this one.
    pub fn successors(&self) -> &[TaskId] {
        &self.successors
    }

    /// Tasks this one waits for.
    pub fn predecessors(&self) -> &[TaskId] {
        &self.predecessors
    }
}

/// Lookup key for an identifier (lowercased).
pub(crate) fn id_key(id: &str) -> String {
    id.to_lowercase()
}

pub(crate) fn same_id(a: &str, b: &str) -> bool {
    id_key(a) == id_key(b)
}
