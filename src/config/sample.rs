// src/config/sample.rs

//! Built-in sample project: planning a small event.

use crate::config::model::{AnalysisSection, ProjectFile, RawProjectFile, TaskConfig};
use crate::errors::Result;

const SAMPLE_TASKS: &[(&str, &str, f64, f64, f64, &[&str])] = &[
    ("A", "Define concept and theme", 2.0, 3.0, 4.0, &[]),
    ("B", "Select and book venue", 3.0, 4.0, 5.0, &["A"]),
    ("C", "Design promotional material", 4.0, 6.0, 8.0, &["A"]),
    ("D", "Contact and confirm speakers", 2.0, 3.0, 4.0, &["B"]),
    ("E", "Develop event content", 5.0, 7.0, 9.0, &["C"]),
    ("F", "Marketing campaign and ticket sales", 6.0, 8.0, 10.0, &["D", "E"]),
    ("G", "Coordinate logistics (catering, sound)", 1.0, 2.0, 3.0, &["F"]),
    ("H", "Dress rehearsal and final adjustments", 1.0, 1.0, 1.0, &["G"]),
];

/// The sample project, validated like any file-based project.
pub fn sample_project() -> Result<ProjectFile> {
    let task = SAMPLE_TASKS
        .iter()
        .map(|&(id, description, o, m, p, after)| TaskConfig {
            id: id.to_string(),
            description: description.to_string(),
            optimistic: o,
            most_likely: m,
            pessimistic: p,
            after: after.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    ProjectFile::try_from(RawProjectFile {
        analysis: AnalysisSection::default(),
        task,
    })
}
