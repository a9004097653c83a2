// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PertError {
    #[error("Duplicate task id: {0}")]
    DuplicateId(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Invalid dependency {predecessor} -> {successor}: task '{missing}' does not exist")]
    InvalidDependencyEndpoint {
        predecessor: String,
        successor: String,
        missing: String,
    },

    #[error("Task '{id}' cannot be removed: tasks {dependents:?} depend on it")]
    HasDependents { id: String, dependents: Vec<String> },

    #[error("Invalid estimates for task '{id}': {reason}")]
    InvalidEstimates { id: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cycle detected in task graph: {0}")]
    DagCycle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PertError>;
