//! Flow-graph data model exchanged with the flow viewer.

use serde::{Deserialize, Serialize};

use crate::flow::geom::{Point, Size};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowNodeKind {
    Unit,
    Module,
    Function,
    Procedure,
    Argument,
    Var,
    DeadVar,
    ReturnVar,
    AffectOuter,
    AffectInner,
    SpawnOuter,
    SpawnInner,
}

impl FlowNodeKind {
    /// Containers are sized from their laid-out children.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::Unit
                | Self::Module
                | Self::Function
                | Self::Procedure
                | Self::AffectOuter
                | Self::SpawnOuter
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FlowNodeKind,
    #[serde(
        rename = "parentNode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<String>,
    #[serde(default)]
    pub position: Point,
    #[serde(rename = "style", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

impl FlowNode {
    pub fn new(id: impl Into<String>, kind: FlowNodeKind, parent: Option<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            parent,
            position: Point::default(),
            size: None,
        }
    }

    pub fn child_of(id: impl Into<String>, kind: FlowNodeKind, parent: &str) -> Self {
        Self::new(id, kind, Some(parent.to_string()))
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl FlowEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{source}/{target}"),
            source,
            target,
        }
    }
}

/// Serialized as `[nodes, edges]`.
pub type FlowDesign = (Vec<FlowNode>, Vec<FlowEdge>);
