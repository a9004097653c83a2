// src/config/mod.rs

//! Project definition loading and input validation for pertdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a project file from disk (`loader.rs`).
//! - Validate user input before it reaches the graph (`validate.rs`).
//! - Provide a built-in sample project (`sample.rs`).

pub mod loader;
pub mod model;
pub mod sample;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_str};
pub use model::{AnalysisSection, ProjectFile, RawProjectFile, TaskConfig};
pub use sample::sample_project;
pub use validate::{parse_predecessor_list, validate_estimates, validate_new_id};
