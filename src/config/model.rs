// src/config/model.rs

use serde::Deserialize;
use tracing::debug;

use crate::errors::Result;
use crate::graph::{Estimates, Task, TaskGraph};
use crate::types::PassOrder;

/// Project definition as read from a TOML file, before validation.
///
/// ```toml
/// [analysis]
/// order = "topological"
///
/// [[task]]
/// id = "A"
/// description = "Define concept"
/// optimistic = 2
/// most_likely = 3
/// pessimistic = 4
///
/// [[task]]
/// id = "B"
/// optimistic = 3
/// most_likely = 4
/// pessimistic = 5
/// after = ["A"]
/// ```
///
/// Tasks are an array of tables so that declaration order is preserved; it
/// becomes the graph's insertion order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProjectFile {
    #[serde(default)]
    pub analysis: AnalysisSection,

    #[serde(default)]
    pub task: Vec<TaskConfig>,
}

/// A validated project definition.
///
/// Only obtainable through `TryFrom<RawProjectFile>` (see `config::validate`)
/// or the loader, so every instance satisfies the input rules.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    pub analysis: AnalysisSection,
    pub task: Vec<TaskConfig>,
}

/// `[analysis]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AnalysisSection {
    /// `"topological"` (default) or `"insertion"`.
    #[serde(default)]
    pub order: PassOrder,
}

/// One `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub id: String,

    #[serde(default)]
    pub description: String,

    pub optimistic: f64,
    pub most_likely: f64,
    pub pessimistic: f64,

    /// Ids of the tasks this one waits for.
    #[serde(default)]
    pub after: Vec<String>,
}

impl TaskConfig {
    pub fn estimates(&self) -> Estimates {
        Estimates::new(self.optimistic, self.most_likely, self.pessimistic)
    }
}

impl ProjectFile {
    pub(crate) fn new_unchecked(analysis: AnalysisSection, task: Vec<TaskConfig>) -> Self {
        Self { analysis, task }
    }

    /// Build the task graph: every task in declaration order, then one
    /// dependency per `after` entry.
    pub fn build_graph(&self) -> Result<TaskGraph> {
        let mut graph = TaskGraph::new();

        for tc in &self.task {
            graph.add_task(Task::new(tc.id.trim(), tc.description.clone(), tc.estimates()))?;
        }

        for tc in &self.task {
            for pred in &tc.after {
                graph.add_dependency(pred.trim(), tc.id.trim())?;
            }
        }

        debug!(tasks = graph.len(), "built task graph from project file");
        Ok(graph)
    }
}
