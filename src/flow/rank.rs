//! Rank-based placement of one scope's nodes.

use petgraph::algo::{greedy_feedback_arc_set, toposort};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashSet;

use super::geom::{Point, Size};

/// Places a flat set of sized nodes; returns each node's center, in input order.
///
/// `edges` are `(source, target)` indices into `sizes`. Implementations must not let the
/// returned boxes overlap.
pub trait AutoLayout {
    fn place(&self, sizes: &[Size], edges: &[(usize, usize)]) -> Vec<Point>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedLayout {
    pub node_sep: f64,
    pub rank_sep: f64,
}

impl Default for RankedLayout {
    fn default() -> Self {
        Self {
            node_sep: 50.0,
            rank_sep: 50.0,
        }
    }
}

impl RankedLayout {
    pub fn new(node_sep: f64, rank_sep: f64) -> Self {
        Self { node_sep, rank_sep }
    }

    /// Longest-path ranks over the graph with a feedback arc set removed.
    fn ranks(&self, n: usize, edges: &[(usize, usize)]) -> (Vec<usize>, Vec<Vec<usize>>) {
        let mut graph = DiGraph::<usize, ()>::with_capacity(n, edges.len());
        let nodes: Vec<NodeIndex> = (0..n).map(|i| graph.add_node(i)).collect();
        for &(s, t) in edges {
            if s < n && t < n && s != t {
                graph.update_edge(nodes[s], nodes[t], ());
            }
        }

        let feedback: FxHashSet<EdgeIndex> = greedy_feedback_arc_set(&graph)
            .map(|e| e.id())
            .collect();

        let mut dag = DiGraph::<usize, ()>::with_capacity(n, graph.edge_count());
        let dag_nodes: Vec<NodeIndex> = (0..n).map(|i| dag.add_node(i)).collect();
        for edge in graph.edge_references() {
            if feedback.contains(&edge.id()) {
                continue;
            }
            dag.add_edge(
                dag_nodes[edge.source().index()],
                dag_nodes[edge.target().index()],
                (),
            );
        }

        let order = toposort(&dag, None)
            .map(|order| order.into_iter().map(|ix| ix.index()).collect::<Vec<_>>())
            .unwrap_or_else(|_| (0..n).collect());

        let mut rank = vec![0usize; n];
        for &v in &order {
            for pred in dag.neighbors_directed(dag_nodes[v], petgraph::Direction::Incoming) {
                rank[v] = rank[v].max(rank[pred.index()] + 1);
            }
        }

        let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
        for edge in dag.edge_references() {
            preds[edge.target().index()].push(edge.source().index());
        }
        (rank, preds)
    }
}

impl AutoLayout for RankedLayout {
    fn place(&self, sizes: &[Size], edges: &[(usize, usize)]) -> Vec<Point> {
        let n = sizes.len();
        if n == 0 {
            return Vec::new();
        }

        let (rank, preds) = self.ranks(n, edges);
        let rank_count = rank.iter().copied().max().unwrap_or(0) + 1;

        let mut layers: Vec<Vec<usize>> = vec![Vec::new(); rank_count];
        for (v, &r) in rank.iter().enumerate() {
            layers[r].push(v);
        }

        // One barycenter sweep: order each rank by the mean slot of its predecessors.
        let mut slot = vec![0usize; n];
        for layer in layers.iter_mut() {
            let mut keys: Vec<(usize, f64)> = layer
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    let p = &preds[v];
                    let key = if p.is_empty() {
                        i as f64
                    } else {
                        p.iter().map(|&u| slot[u] as f64).sum::<f64>() / p.len() as f64
                    };
                    (v, key)
                })
                .collect();
            keys.sort_by(|a, b| a.1.total_cmp(&b.1));
            *layer = keys.into_iter().map(|(v, _)| v).collect();
            for (i, &v) in layer.iter().enumerate() {
                slot[v] = i;
            }
        }

        let layer_width = |layer: &[usize]| -> f64 {
            let widths: f64 = layer.iter().map(|&v| sizes[v].width.max(0.0)).sum();
            widths + self.node_sep * layer.len().saturating_sub(1) as f64
        };
        let max_width = layers
            .iter()
            .map(|l| layer_width(l))
            .fold(0.0_f64, f64::max);

        let mut centers = vec![Point::default(); n];
        let mut top = 0.0;
        for layer in &layers {
            let height = layer
                .iter()
                .map(|&v| sizes[v].height.max(0.0))
                .fold(0.0_f64, f64::max);

            let mut left = (max_width - layer_width(layer)) / 2.0;
            for &v in layer {
                let w = sizes[v].width.max(0.0);
                centers[v] = Point::new(left + w / 2.0, top + height / 2.0);
                left += w + self.node_sep;
            }
            top += height + self.rank_sep;
        }

        centers
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flow/rank.rs"]
mod tests;
