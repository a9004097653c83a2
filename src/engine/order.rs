// src/engine/order.rs

//! Visiting order for the forward and backward passes.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, warn};

use crate::graph::TaskGraph;
use crate::types::PassOrder;

/// Positions (into the stored task order) in the order the forward pass
/// should visit them. The backward pass walks the same list reversed.
pub fn forward_order(graph: &TaskGraph, order: PassOrder) -> Vec<usize> {
    let stored: Vec<usize> = (0..graph.len()).collect();

    match order {
        PassOrder::Insertion => stored,
        PassOrder::Topological => match topological_positions(graph) {
            Some(positions) => positions,
            None => {
                warn!("task graph contains a cycle; falling back to stored order");
                stored
            }
        },
    }
}

/// Topological order of stored positions, or `None` if the graph has a cycle.
///
/// Edge direction: predecessor -> successor, taken from the successor lists.
fn topological_positions(graph: &TaskGraph) -> Option<Vec<usize>> {
    let mut dag: DiGraph<usize, ()> = DiGraph::with_capacity(graph.len(), 0);
    let nodes: Vec<NodeIndex> = (0..graph.len()).map(|idx| dag.add_node(idx)).collect();

    for (idx, task) in graph.iter().enumerate() {
        for succ in task.successors() {
            if let Some(succ_idx) = graph.position(succ) {
                dag.add_edge(nodes[idx], nodes[succ_idx], ());
            }
        }
    }

    match toposort(&dag, None) {
        Ok(sorted) => {
            let positions: Vec<usize> = sorted.into_iter().map(|n| dag[n]).collect();
            debug!(?positions, "derived topological pass order");
            Some(positions)
        }
        Err(cycle) => {
            let idx = dag[cycle.node_id()];
            debug!(task = %graph.tasks()[idx].id, "cycle found while ordering passes");
            None
        }
    }
}

/// True when every predecessor is stored before its successor.
pub fn is_insertion_topological(graph: &TaskGraph) -> bool {
    graph.iter().enumerate().all(|(idx, task)| {
        task.predecessors()
            .iter()
            .all(|pred| graph.position(pred).is_some_and(|p| p < idx))
    })
}
