// src/engine/mod.rs

//! PERT/CPM calculation over a [`TaskGraph`](crate::graph::TaskGraph).
//!
//! - [`pert`] contains the four calculation phases.
//! - [`order`] decides which order the forward/backward passes visit tasks in.

pub mod order;
pub mod pert;

pub use order::{forward_order, is_insertion_topological};
pub use pert::{expected_time, round_slack, variance, Analysis, PertEngine, SLACK_DECIMALS};
