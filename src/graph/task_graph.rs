// src/graph/task_graph.rs

use std::collections::HashMap;

use tracing::debug;

use crate::errors::{PertError, Result};
use crate::graph::task::{id_key, same_id, Estimates, Task, TaskId};

/// Ordered collection of tasks plus the dependency edges between them.
///
/// Tasks live in a `Vec` in insertion order; a lowercase id → position map
/// gives O(1) case-insensitive lookup. Each task carries its own successor
/// and predecessor id lists, and every mutation keeps them symmetric:
/// `b` is in `a.successors` iff `a` is in `b.predecessors`.
///
/// Acyclicity is assumed, never checked.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph in one go: tasks in the given order, then edges as
    /// `(predecessor, successor)` pairs.
    pub fn from_parts<I, E>(tasks: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = Task>,
        E: IntoIterator<Item = (TaskId, TaskId)>,
    {
        let mut graph = TaskGraph::new();
        for task in tasks {
            graph.add_task(task)?;
        }
        for (pred, succ) in edges {
            graph.add_dependency(&pred, &succ)?;
        }
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Task ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|t| t.id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Position of a task in the stored order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(&id_key(id)).copied()
    }

    /// Case-insensitive lookup; `None` when absent.
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.position(id).map(|idx| &self.tasks[idx])
    }

    /// Like [`find`](Self::find) but reports absence as `TaskNotFound`.
    pub fn get(&self, id: &str) -> Result<&Task> {
        self.find(id)
            .ok_or_else(|| PertError::TaskNotFound(id.to_string()))
    }

    /// Append a task to the end of the stored order.
    ///
    /// Fails with `DuplicateId` if a task with the same id (ignoring case)
    /// already exists.
    pub fn add_task(&mut self, mut task: Task) -> Result<()> {
        let key = id_key(&task.id);
        if self.index.contains_key(&key) {
            return Err(PertError::DuplicateId(task.id));
        }

        // A task joins the graph without any edges.
        task.successors.clear();
        task.predecessors.clear();

        debug!(task = %task.id, position = self.tasks.len(), "added task");
        self.index.insert(key, self.tasks.len());
        self.tasks.push(task);
        Ok(())
    }

    /// Record that `succ_id` depends on `pred_id`.
    ///
    /// Both ends are checked before anything is touched. Repeating the call
    /// records the edge again; duplicate entries do not change max/min based
    /// results.
    pub fn add_dependency(&mut self, pred_id: &str, succ_id: &str) -> Result<()> {
        let (pred_idx, succ_idx) = self.endpoints(pred_id, succ_id)?;

        let pred_name = self.tasks[pred_idx].id.clone();
        let succ_name = self.tasks[succ_idx].id.clone();

        self.tasks[pred_idx].successors.push(succ_name.clone());
        self.tasks[succ_idx].predecessors.push(pred_name.clone());

        debug!(pred = %pred_name, succ = %succ_name, "added dependency");
        Ok(())
    }

    /// Remove every `pred_id -> succ_id` edge. Returns how many were removed
    /// (0 if the tasks exist but were not linked).
    pub fn remove_dependency(&mut self, pred_id: &str, succ_id: &str) -> Result<usize> {
        let (pred_idx, succ_idx) = self.endpoints(pred_id, succ_id)?;

        let before = self.tasks[pred_idx].successors.len();
        self.tasks[pred_idx]
            .successors
            .retain(|s| !same_id(s, succ_id));
        let removed = before - self.tasks[pred_idx].successors.len();

        self.tasks[succ_idx]
            .predecessors
            .retain(|p| !same_id(p, pred_id));

        debug!(pred = %pred_id, succ = %succ_id, removed, "removed dependency");
        Ok(removed)
    }

    /// Replace a task's description and estimates.
    ///
    /// Derived schedule fields are left as they are until the next analysis.
    pub fn update_task(
        &mut self,
        id: &str,
        description: impl Into<String>,
        estimates: Estimates,
    ) -> Result<()> {
        let idx = self
            .position(id)
            .ok_or_else(|| PertError::TaskNotFound(id.to_string()))?;

        let task = &mut self.tasks[idx];
        task.description = description.into();
        task.estimates = estimates;

        debug!(task = %task.id, ?estimates, "updated task");
        Ok(())
    }

    /// Remove a task that nothing depends on.
    ///
    /// Fails with `TaskNotFound` if absent, or `HasDependents` (graph left
    /// untouched) if its successor list is non-empty. On success the id is
    /// pruned from the successor list of each of its predecessors.
    pub fn remove_task(&mut self, id: &str) -> Result<Task> {
        let idx = self
            .position(id)
            .ok_or_else(|| PertError::TaskNotFound(id.to_string()))?;

        let task = &self.tasks[idx];
        if !task.successors.is_empty() {
            return Err(PertError::HasDependents {
                id: task.id.clone(),
                dependents: task.successors.clone(),
            });
        }

        let removed_id = task.id.clone();
        let preds = task.predecessors.clone();
        for pred in &preds {
            if let Some(pred_idx) = self.position(pred) {
                self.tasks[pred_idx]
                    .successors
                    .retain(|s| !same_id(s, &removed_id));
            }
        }

        let removed = self.tasks.remove(idx);
        self.reindex();

        debug!(task = %removed.id, predecessors = preds.len(), "removed task");
        Ok(removed)
    }

    pub(crate) fn task_mut(&mut self, idx: usize) -> &mut Task {
        &mut self.tasks[idx]
    }

    /// Resolve both dependency endpoints, reporting the first missing one.
    fn endpoints(&self, pred_id: &str, succ_id: &str) -> Result<(usize, usize)> {
        let missing = |which: &str| PertError::InvalidDependencyEndpoint {
            predecessor: pred_id.to_string(),
            successor: succ_id.to_string(),
            missing: which.to_string(),
        };

        let pred_idx = self.position(pred_id).ok_or_else(|| missing(pred_id))?;
        let succ_idx = self.position(succ_id).ok_or_else(|| missing(succ_id))?;
        Ok((pred_idx, succ_idx))
    }

    fn reindex(&mut self) {
        self.index = self
            .tasks
            .iter()
            .enumerate()
            .map(|(idx, t)| (id_key(&t.id), idx))
            .collect();
    }
}

impl<'a> IntoIterator for &'a TaskGraph {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
