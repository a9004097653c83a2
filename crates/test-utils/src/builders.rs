#![allow(dead_code)]

use pertdag::config::{AnalysisSection, ProjectFile, RawProjectFile, TaskConfig};
use pertdag::graph::{Estimates, Task, TaskGraph};
use pertdag::types::PassOrder;

/// Builder for `TaskGraph` to simplify test setup.
///
/// Tasks are added in call order; dependencies are added after all tasks,
/// in call order.
pub struct GraphBuilder {
    tasks: Vec<Task>,
    edges: Vec<(String, String)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn task(mut self, id: &str, o: f64, m: f64, p: f64) -> Self {
        self.tasks
            .push(Task::new(id, format!("task {id}"), Estimates::new(o, m, p)));
        self
    }

    pub fn dep(mut self, pred: &str, succ: &str) -> Self {
        self.edges.push((pred.to_string(), succ.to_string()));
        self
    }

    pub fn build(self) -> TaskGraph {
        TaskGraph::from_parts(self.tasks, self.edges)
            .expect("Failed to build valid graph from builder")
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ProjectFile`.
pub struct ProjectFileBuilder {
    project: RawProjectFile,
}

impl ProjectFileBuilder {
    pub fn new() -> Self {
        Self {
            project: RawProjectFile {
                analysis: AnalysisSection::default(),
                task: Vec::new(),
            },
        }
    }

    pub fn order(mut self, order: PassOrder) -> Self {
        self.project.analysis.order = order;
        self
    }

    pub fn with_task(mut self, task: TaskConfig) -> Self {
        self.project.task.push(task);
        self
    }

    pub fn raw(self) -> RawProjectFile {
        self.project
    }

    pub fn build(self) -> ProjectFile {
        ProjectFile::try_from(self.project).expect("Failed to build valid project from builder")
    }
}

impl Default for ProjectFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new(id: &str, o: f64, m: f64, p: f64) -> Self {
        Self {
            task: TaskConfig {
                id: id.to_string(),
                description: String::new(),
                optimistic: o,
                most_likely: m,
                pessimistic: p,
                after: vec![],
            },
        }
    }

    pub fn description(mut self, text: &str) -> Self {
        self.task.description = text.to_string();
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.after.push(dep.to_string());
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}
