// src/report.rs

//! Text rendering of analysis results: results table, critical path chain
//! and a simple dependency diagram. Everything is rendered in stored order.

use crate::graph::{Task, TaskGraph};

const DESCRIPTION_WIDTH: usize = 25;

/// One row per task with every derived field.
pub fn render_table(graph: &TaskGraph) -> String {
    let header = format!(
        "{:<7} | {:<25} | {:>6} | {:>6} | {:>6} | {:>6} | {:>6} | {:>6} | {:>6} | {:<8}",
        "TASK", "DESCRIPTION", "Te", "V", "ES", "EF", "LS", "LF", "SLACK", "CRITICAL"
    );

    let mut lines = vec![header.clone(), "-".repeat(header.len())];

    if graph.is_empty() {
        lines.push("No tasks loaded.".to_string());
        return lines.join("\n");
    }

    lines.extend(graph.iter().map(table_row));
    lines.join("\n")
}

fn table_row(task: &Task) -> String {
    let s = &task.schedule;
    format!(
        "{:<7} | {:<25} | {:>6.1} | {:>6.2} | {:>6.1} | {:>6.1} | {:>6.1} | {:>6.1} | {:>6.1} | {:<8}",
        task.id,
        truncate(&task.description, DESCRIPTION_WIDTH),
        s.expected,
        s.variance,
        s.early_start,
        s.early_finish,
        s.late_start,
        s.late_finish,
        s.slack,
        if s.critical { "Yes" } else { "No" },
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Ids of critical tasks, in stored order.
pub fn critical_path(graph: &TaskGraph) -> Vec<&str> {
    graph
        .iter()
        .filter(|t| t.schedule.critical)
        .map(|t| t.id.as_str())
        .collect()
}

/// Critical path as `A -> C -> E`, or a notice when nothing is critical
/// (typically because the analysis has not been run).
pub fn render_critical_path(graph: &TaskGraph) -> String {
    let path = critical_path(graph);
    if path.is_empty() {
        return "Critical path has not been calculated; run the analysis first.".to_string();
    }
    path.join(" -> ")
}

/// Each task with its schedule window and outgoing edges. Critical tasks are
/// marked with `*`.
pub fn render_diagram(graph: &TaskGraph) -> String {
    if graph.is_empty() {
        return "No tasks loaded.".to_string();
    }

    let mut lines = Vec::with_capacity(graph.len() * 2);
    for task in graph {
        let s = &task.schedule;
        let marker = if s.critical { "*" } else { " " };
        lines.push(format!(
            "{marker}[{}] Te={:.1} ES={:.1} EF={:.1} LS={:.1} LF={:.1}",
            task.id, s.expected, s.early_start, s.early_finish, s.late_start, s.late_finish
        ));

        let targets = if task.successors().is_empty() {
            "(end)".to_string()
        } else {
            task.successors().join(", ")
        };
        lines.push(format!("     -> {targets}"));
    }
    lines.join("\n")
}
