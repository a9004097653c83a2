use clap::ValueEnum;
use serde::Deserialize;

/// Order in which the forward and backward passes visit tasks.
///
/// - `Topological`: derive a dependency-respecting order from the edge lists
///   before each pass (default). Results do not depend on how tasks were
///   inserted.
/// - `Insertion`: visit tasks in stored order (reverse stored order for the
///   backward pass). Only correct when every predecessor was inserted before
///   its successors; otherwise early starts are silently understated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PassOrder {
    #[default]
    Topological,
    Insertion,
}
