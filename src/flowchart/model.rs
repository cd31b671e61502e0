use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque node identity, unique and stable within one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// The six flowchart shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    End,
    Process,
    Decision,
    Input,
    Output,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Start => "Start",
            NodeKind::End => "End",
            NodeKind::Process => "Process",
            NodeKind::Decision => "Decision",
            NodeKind::Input => "Input",
            NodeKind::Output => "Output",
        };
        f.pad(name)
    }
}

/// Attachment side of a node for an incoming or outgoing connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Port {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Port::Top => "top",
            Port::Bottom => "bottom",
            Port::Left => "left",
            Port::Right => "right",
        };
        f.write_str(name)
    }
}

/// A single flowchart element as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowchartNode {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Display text, elided when too long.
    pub label: String,
    /// The original statement or declaration text, never elided.
    pub code_reference: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_body: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_function: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_prototype: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_main_function: bool,
}

/// A directed, optionally labelled edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    pub from_port: Port,
    pub to_port: Port,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

/// The finished graph: nodes in creation order plus their connections.
///
/// Loops produce back-edges, so the graph is not acyclic in general.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flowchart {
    pub nodes: Vec<FlowchartNode>,
    pub connections: Vec<Connection>,
}

impl Flowchart {
    pub fn node(&self, id: NodeId) -> Option<&FlowchartNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &FlowchartNode> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.from == id)
    }

    pub fn incoming(&self, id: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.to == id)
    }

    /// The implicit start node, always the first node of a successful build.
    pub fn start(&self) -> Option<&FlowchartNode> {
        self.nodes_of_kind(NodeKind::Start).next()
    }

    /// The implicit end node, always the last node of a successful build.
    pub fn end(&self) -> Option<&FlowchartNode> {
        self.nodes_of_kind(NodeKind::End).last()
    }

    /// Serializes the graph to the `{ nodes, connections }` JSON shape.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
