// src/graph/mod.rs

//! Task dependency graph.
//!
//! - [`task`] holds the per-task value type (estimates + derived schedule).
//! - [`task_graph`] owns the ordered task sequence and the edge lists, and
//!   provides lookup and mutation.

pub mod task;
pub mod task_graph;

pub use task::{Estimates, Schedule, Task, TaskId};
pub use task_graph::TaskGraph;
