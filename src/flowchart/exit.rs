use super::{NodeId, Port};

/// A pending edge source that must be wired into whatever comes next.
///
/// A bare `Node` leaves through its bottom port without a label. `Port` pins the
/// side and label explicitly, which is how branch exits such as a decision's
/// `"false"` side are carried forward.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExitPoint {
    Node(NodeId),
    Port {
        node: NodeId,
        port: Port,
        label: String,
    },
}

impl ExitPoint {
    pub fn port(node: NodeId, port: Port, label: impl Into<String>) -> Self {
        ExitPoint::Port {
            node,
            port,
            label: label.into(),
        }
    }

    pub fn node(&self) -> NodeId {
        match self {
            ExitPoint::Node(node) | ExitPoint::Port { node, .. } => *node,
        }
    }

    /// The `(port, label)` pair an edge leaving this exit point carries.
    pub fn source_port(&self) -> (Port, &str) {
        match self {
            ExitPoint::Node(_) => (Port::Bottom, ""),
            ExitPoint::Port { port, label, .. } => (*port, label.as_str()),
        }
    }
}

impl From<NodeId> for ExitPoint {
    fn from(node: NodeId) -> Self {
        ExitPoint::Node(node)
    }
}
