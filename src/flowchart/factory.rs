use super::{Connection, ExitPoint, Flowchart, FlowchartNode, NodeId, NodeKind, Port};
use crate::config::LayoutConfig;
use ahash::AHashSet;

/// Describes a node before it is allocated.
///
/// Geometry is derived from `kind` and the label unless `size` is given.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    pub kind: NodeKind,
    pub label: String,
    pub code_reference: String,
    pub size: Option<(f64, f64)>,
    pub full_body: Option<String>,
    pub function: Option<FunctionFlags>,
}

/// Metadata carried by function and procedure declaration nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FunctionFlags {
    pub is_prototype: bool,
    pub is_main: bool,
}

impl NodeSpec {
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            code_reference: String::new(),
            size: None,
            full_body: None,
            function: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code_reference = code.into();
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn full_body(mut self, body: Option<String>) -> Self {
        self.full_body = body;
        self
    }

    pub fn function(mut self, flags: FunctionFlags) -> Self {
        self.function = Some(flags);
        self
    }
}

/// The node/edge factory and the context of a single build.
///
/// It owns the id counter and the vertical layout cursor, so two builders never
/// interfere with each other.
pub struct GraphBuilder {
    layout: LayoutConfig,
    label_max_chars: usize,
    nodes: Vec<FlowchartNode>,
    connections: Vec<Connection>,
    seen: AHashSet<Connection>,
    next_id: u32,
    cursor_y: f64,
}

impl GraphBuilder {
    pub fn new(layout: LayoutConfig, label_max_chars: usize) -> Self {
        let cursor_y = layout.origin_y;
        Self {
            layout,
            label_max_chars,
            nodes: Vec::new(),
            connections: Vec::new(),
            seen: AHashSet::new(),
            next_id: 0,
            cursor_y,
        }
    }

    pub fn create_node(&mut self, spec: NodeSpec) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;

        let label = elide(&spec.label, self.label_max_chars);
        let (width, height) = spec
            .size
            .unwrap_or_else(|| self.default_size(spec.kind, &label));
        let flags = spec.function;

        self.nodes.push(FlowchartNode {
            id,
            kind: spec.kind,
            label,
            code_reference: spec.code_reference,
            x: self.layout.center_x - width / 2.0,
            y: self.cursor_y,
            width,
            height,
            full_body: spec.full_body,
            is_function: flags.is_some(),
            is_prototype: flags.is_some_and(|f| f.is_prototype),
            is_main_function: flags.is_some_and(|f| f.is_main),
        });
        self.cursor_y += self.step(spec.kind);
        id
    }

    /// Appends a connection. Self-loops and exact duplicates are dropped.
    pub fn connect(
        &mut self,
        from: NodeId,
        to: NodeId,
        from_port: Port,
        to_port: Port,
        label: impl Into<String>,
    ) {
        if from == to {
            return;
        }
        let connection = Connection {
            from,
            to,
            from_port,
            to_port,
            label: label.into(),
        };
        if self.seen.insert(connection.clone()) {
            self.connections.push(connection);
        }
    }

    /// Wires a pending exit point into the top of `to`.
    pub fn connect_exit(&mut self, exit: &ExitPoint, to: NodeId) {
        let (port, label) = exit.source_port();
        self.connect(exit.node(), to, port, Port::Top, label);
    }

    pub fn finish(self) -> Flowchart {
        Flowchart {
            nodes: self.nodes,
            connections: self.connections,
        }
    }

    fn default_size(&self, kind: NodeKind, label: &str) -> (f64, f64) {
        let layout = &self.layout;
        let chars = label.chars().count() as f64;
        match kind {
            NodeKind::Start | NodeKind::End => (layout.terminal_width, layout.terminal_height),
            NodeKind::Decision => (
                (chars * layout.char_width + 80.0)
                    .max(layout.decision_min_width)
                    .min(layout.decision_max_width),
                layout.decision_height,
            ),
            NodeKind::Process | NodeKind::Input | NodeKind::Output => (
                (chars * layout.char_width + 40.0)
                    .max(layout.process_min_width)
                    .min(layout.process_max_width),
                layout.process_height,
            ),
        }
    }

    fn step(&self, kind: NodeKind) -> f64 {
        match kind {
            NodeKind::Start | NodeKind::End => self.layout.terminal_step,
            NodeKind::Decision => self.layout.decision_step,
            NodeKind::Process | NodeKind::Input | NodeKind::Output => self.layout.process_step,
        }
    }
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
pub fn elide(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max < 3 {
        return text.chars().take(max).collect();
    }
    let keep = max - 3;
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
