//! Scope-by-scope layout of a nested flow design.
//!
//! Every container is laid out after its children: the children of one scope are placed by
//! an [`AutoLayout`] as an isolated graph, moved so their bounding box starts at the local
//! origin, and the bounding box (plus margin) becomes the container's size in the scope
//! above. Positions of nested nodes are relative to their parent container.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::geom::{Point, Size};
use super::rank::{AutoLayout, RankedLayout};
use crate::models::flow::{FlowEdge, FlowNode};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub margin_x: f64,
    pub margin_y: f64,
    pub default_node_width: f64,
    pub default_node_height: f64,
    pub min_content_width: f64,
    pub min_content_height: f64,
    pub node_sep: f64,
    pub rank_sep: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_x: 200.0,
            margin_y: 200.0,
            default_node_width: 250.0,
            default_node_height: 100.0,
            min_content_width: 200.0,
            min_content_height: 50.0,
            node_sep: 50.0,
            rank_sep: 50.0,
        }
    }
}

impl LayoutConfig {
    pub fn default_node_size(&self) -> Size {
        Size::new(self.default_node_width, self.default_node_height)
    }

    /// Container size for a children bounding box; `None` means no children.
    pub fn container_size(&self, content: Option<Size>) -> Size {
        let content = content.unwrap_or_default();
        Size::new(
            content.width.max(self.min_content_width) + self.margin_x,
            content.height.max(self.min_content_height) + self.margin_y,
        )
    }
}

pub struct FlowLayout<L = RankedLayout> {
    engine: L,
    config: LayoutConfig,
}

impl FlowLayout<RankedLayout> {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            engine: RankedLayout::new(config.node_sep, config.rank_sep),
            config,
        }
    }
}

impl Default for FlowLayout<RankedLayout> {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl<L: AutoLayout> FlowLayout<L> {
    pub fn with_engine(engine: L, config: LayoutConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn apply(&self, nodes: &mut [FlowNode], edges: &[FlowEdge]) {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.as_str(), i).is_some() {
                tracing::warn!(id = %node.id, "duplicate flow node id");
            }
        }

        let mut parent_of: Vec<Option<usize>> = nodes
            .iter()
            .map(|node| {
                let parent = node.parent.as_deref()?;
                let found = index.get(parent).copied();
                if found.is_none() {
                    tracing::warn!(id = %node.id, parent, "dangling parent, laying out as root");
                }
                found
            })
            .collect();

        let edge_pairs: Vec<(usize, usize)> = edges
            .iter()
            .filter_map(|e| {
                Some((
                    *index.get(e.source.as_str())?,
                    *index.get(e.target.as_str())?,
                ))
            })
            .collect();

        break_parent_cycles(nodes, &mut parent_of);

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut roots = Vec::new();
        for (i, parent) in parent_of.iter().enumerate() {
            match parent {
                Some(p) => children[*p].push(i),
                None => roots.push(i),
            }
        }

        for id in post_order(&roots, &children) {
            let content = self.place_scope(&children[id], nodes, &edge_pairs);
            if nodes[id].kind.is_container() {
                nodes[id].size = Some(self.config.container_size(content));
            }
        }
        self.place_scope(&roots, nodes, &edge_pairs);

        let dx = self.config.margin_x / 2.0;
        let dy = self.config.margin_y / 2.0;
        for node in nodes.iter_mut() {
            node.position = node.position.offset(dx, dy);
        }

        tracing::debug!(nodes = nodes.len(), scopes = roots.len(), "flow layout done");
    }

    /// Places one scope's members and returns their bounding box size.
    fn place_scope(
        &self,
        members: &[usize],
        nodes: &mut [FlowNode],
        edges: &[(usize, usize)],
    ) -> Option<Size> {
        if members.is_empty() {
            return None;
        }

        let local: FxHashMap<usize, usize> = members
            .iter()
            .enumerate()
            .map(|(slot, &id)| (id, slot))
            .collect();
        let sizes: Vec<Size> = members
            .iter()
            .map(|&id| self.node_size(&nodes[id]))
            .collect();
        let scope_edges: Vec<(usize, usize)> = edges
            .iter()
            .filter_map(|(s, t)| Some((*local.get(s)?, *local.get(t)?)))
            .collect();

        let centers = self.engine.place(&sizes, &scope_edges);

        let mut top_left = Point::new(f64::INFINITY, f64::INFINITY);
        let mut bottom_right = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for (slot, &id) in members.iter().enumerate() {
            let size = sizes[slot];
            let center = centers.get(slot).copied().unwrap_or_default();
            let position = Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0);
            nodes[id].position = position;

            top_left.x = top_left.x.min(position.x);
            top_left.y = top_left.y.min(position.y);
            bottom_right.x = bottom_right.x.max(position.x + size.width);
            bottom_right.y = bottom_right.y.max(position.y + size.height);
        }

        for &id in members {
            nodes[id].position = nodes[id].position.offset(-top_left.x, -top_left.y);
        }

        Some(Size::new(
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        ))
    }

    fn node_size(&self, node: &FlowNode) -> Size {
        node.size.unwrap_or_else(|| self.config.default_node_size())
    }
}

/// Children before parents, so every container sees its members already sized.
fn post_order(roots: &[usize], children: &[Vec<usize>]) -> Vec<usize> {
    let mut order = Vec::with_capacity(children.len());
    let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&r| (r, false)).collect();
    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            order.push(id);
            continue;
        }
        stack.push((id, true));
        stack.extend(children[id].iter().rev().map(|&c| (c, false)));
    }
    order
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnPath,
    Done,
}

/// Cuts the parent link of the first node revisited while walking up a cyclic chain.
fn break_parent_cycles(nodes: &[FlowNode], parent_of: &mut [Option<usize>]) {
    let mut visit = vec![Visit::New; parent_of.len()];
    let mut path = Vec::new();
    for start in 0..parent_of.len() {
        if visit[start] != Visit::New {
            continue;
        }
        let mut current = Some(start);
        while let Some(id) = current {
            match visit[id] {
                Visit::Done => break,
                Visit::OnPath => {
                    tracing::warn!(id = %nodes[id].id, "cyclic parent chain, laying out as root");
                    parent_of[id] = None;
                    break;
                }
                Visit::New => {
                    visit[id] = Visit::OnPath;
                    path.push(id);
                    current = parent_of[id];
                }
            }
        }
        for id in path.drain(..) {
            visit[id] = Visit::Done;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flow/layout.rs"]
mod tests;
