// src/engine/pert.rs

use tracing::{debug, info, warn};

use crate::engine::order::{forward_order, is_insertion_topological};
use crate::graph::{Estimates, TaskGraph, TaskId};
use crate::types::PassOrder;

/// Decimal places kept when rounding slack.
pub const SLACK_DECIMALS: i32 = 5;

/// Expected duration: `(O + 4M + P) / 6`.
pub fn expected_time(est: &Estimates) -> f64 {
    (est.optimistic + 4.0 * est.most_likely + est.pessimistic) / 6.0
}

/// Variance: `((P - O) / 6)^2`.
pub fn variance(est: &Estimates) -> f64 {
    ((est.pessimistic - est.optimistic) / 6.0).powi(2)
}

/// Round to [`SLACK_DECIMALS`] places, ties to even.
pub fn round_slack(value: f64) -> f64 {
    let scale = 10f64.powi(SLACK_DECIMALS);
    (value * scale).round_ties_even() / scale
}

/// Result summary of a full analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub project_duration: f64,
    /// Critical task ids in stored order.
    pub critical_path: Vec<TaskId>,
}

/// PERT/CPM calculator.
///
/// Holds no per-graph state: every phase reads and writes the schedule
/// fields of the graph it is given. The phases must run in order
/// (expected times, forward pass, backward pass, slack) on a graph that is
/// not mutated in between; nothing checks this, and out-of-order calls just
/// compute from whatever values are currently stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PertEngine {
    order: PassOrder,
}

impl PertEngine {
    pub fn new(order: PassOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> PassOrder {
        self.order
    }

    /// Run all four phases and summarise the result.
    pub fn analyze(&self, graph: &mut TaskGraph) -> Analysis {
        self.compute_expected_times(graph);
        let order = self.pass_order(graph);
        self.forward_pass_over(graph, &order);
        let project_duration = self.backward_pass_over(graph, &order);
        self.compute_slack(graph);

        let critical_path: Vec<TaskId> = graph
            .iter()
            .filter(|t| t.schedule.critical)
            .map(|t| t.id.clone())
            .collect();

        info!(
            tasks = graph.len(),
            project_duration,
            ?critical_path,
            "PERT analysis complete"
        );

        Analysis {
            project_duration,
            critical_path,
        }
    }

    /// Phase 1: expected time and variance per task.
    pub fn compute_expected_times(&self, graph: &mut TaskGraph) {
        for idx in 0..graph.len() {
            let task = graph.task_mut(idx);
            task.schedule.expected = expected_time(&task.estimates);
            task.schedule.variance = variance(&task.estimates);
        }
        debug!(tasks = graph.len(), "computed expected times");
    }

    /// Phase 2: early start / early finish.
    ///
    /// A task without predecessors starts at 0; otherwise at the latest
    /// early finish among its predecessors.
    pub fn forward_pass(&self, graph: &mut TaskGraph) {
        let order = self.pass_order(graph);
        self.forward_pass_over(graph, &order);
    }

    /// Phase 3: late finish / late start. Returns the project duration.
    ///
    /// A task without successors must finish by the project duration;
    /// otherwise by the earliest late start among its successors.
    pub fn backward_pass(&self, graph: &mut TaskGraph) -> f64 {
        let order = self.pass_order(graph);
        self.backward_pass_over(graph, &order)
    }

    /// Visiting order shared by both passes of one run.
    fn pass_order(&self, graph: &TaskGraph) -> Vec<usize> {
        if self.order == PassOrder::Insertion && !is_insertion_topological(graph) {
            warn!("stored task order is not topological; early starts will be understated");
        }
        forward_order(graph, self.order)
    }

    fn forward_pass_over(&self, graph: &mut TaskGraph, order: &[usize]) {
        for &idx in order {
            let task = &graph.tasks()[idx];
            let early_start = if task.predecessors().is_empty() {
                0.0
            } else {
                task.predecessors()
                    .iter()
                    .filter_map(|p| graph.find(p))
                    .map(|p| p.schedule.early_finish)
                    .fold(0.0, f64::max)
            };

            let task = graph.task_mut(idx);
            task.schedule.early_start = early_start;
            task.schedule.early_finish = early_start + task.schedule.expected;
        }
        debug!("forward pass complete");
    }

    fn backward_pass_over(&self, graph: &mut TaskGraph, order: &[usize]) -> f64 {
        let project_duration = Self::project_duration(graph);

        for &idx in order.iter().rev() {
            let task = &graph.tasks()[idx];
            let late_finish = if task.successors().is_empty() {
                project_duration
            } else {
                task.successors()
                    .iter()
                    .filter_map(|s| graph.find(s))
                    .map(|s| s.schedule.late_start)
                    .fold(f64::MAX, f64::min)
            };

            let task = graph.task_mut(idx);
            task.schedule.late_finish = late_finish;
            task.schedule.late_start = late_finish - task.schedule.expected;
        }
        debug!(project_duration, "backward pass complete");
        project_duration
    }

    /// Phase 4: slack and critical flag.
    ///
    /// A task is critical when its rounded slack is exactly zero.
    pub fn compute_slack(&self, graph: &mut TaskGraph) {
        for idx in 0..graph.len() {
            let task = graph.task_mut(idx);
            let slack = round_slack(task.schedule.late_finish - task.schedule.early_finish);
            task.schedule.slack = slack;
            task.schedule.critical = slack == 0.0;
        }
        debug!("computed slack and critical flags");
    }

    /// Largest early finish over all tasks (0 for an empty graph).
    pub fn project_duration(graph: &TaskGraph) -> f64 {
        graph
            .iter()
            .map(|t| t.schedule.early_finish)
            .fold(0.0, f64::max)
    }
}
