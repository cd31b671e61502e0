use crate::flowchart::{ExitPoint, FunctionFlags, GraphBuilder, NodeId, NodeKind, NodeSpec, Port};
use crate::program::{Branch, FunctionDecl, Statement};
use tracing::{trace, warn};

mod assembler;

pub use assembler::assemble;

/// Placeholder label for a branching construct whose condition is absent.
pub const NO_CONDITION: &str = "No condition";

/// What a statement or block contributed to the graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockOutcome {
    /// Nodes created, in creation order.
    pub nodes: Vec<NodeId>,
    /// Pending edge sources to wire into whatever follows.
    pub exits: Vec<ExitPoint>,
}

impl BlockOutcome {
    fn single(node: NodeId) -> Self {
        Self {
            nodes: vec![node],
            exits: vec![ExitPoint::Node(node)],
        }
    }
}

/// The recursive statement walker.
///
/// Each statement is drawn, wired from the exit points it was handed, and reports
/// the exit points the next statement must connect from.
pub struct BlockProcessor<'g> {
    graph: &'g mut GraphBuilder,
}

impl<'g> BlockProcessor<'g> {
    pub fn new(graph: &'g mut GraphBuilder) -> Self {
        Self { graph }
    }

    /// Processes statements in order, threading exit points from one to the next.
    /// An empty block hands `entry` straight back.
    pub fn process_block(&mut self, block: &[Statement], entry: Vec<ExitPoint>) -> BlockOutcome {
        let mut nodes = Vec::new();
        let mut exits = entry;
        for statement in block {
            let outcome = self.process_statement(statement, exits);
            nodes.extend(outcome.nodes);
            exits = outcome.exits;
        }
        BlockOutcome { nodes, exits }
    }

    pub fn process_statement(&mut self, statement: &Statement, entry: Vec<ExitPoint>) -> BlockOutcome {
        trace!(kind = statement.kind_name(), pending = entry.len(), "processing statement");
        match statement {
            Statement::Action { kind, label, code } => {
                let node = self
                    .graph
                    .create_node(NodeSpec::new((*kind).into(), label.as_str()).code(code.as_str()));
                self.attach(&entry, node);
                BlockOutcome::single(node)
            }
            Statement::If {
                condition,
                code,
                then_block,
                else_block,
            } => self.process_if(condition.as_deref(), code, then_block, else_block.as_deref(), entry),
            Statement::Loop {
                condition,
                code,
                body,
            } => self.process_loop(condition.as_deref(), code, body, entry),
            Statement::PostTestLoop {
                condition,
                code,
                body,
            } => self.process_post_test_loop(condition.as_deref(), code, body, entry),
            Statement::Switch {
                selector,
                code,
                branches,
            } => self.process_switch(selector.as_deref(), code, branches, entry),
            Statement::Function(decl) => self.process_function(decl, entry),
            Statement::Block(block) => self.process_block(block, entry),
            Statement::Skip => {
                warn!("skipping unrecognized statement; exit points pass through");
                BlockOutcome {
                    nodes: Vec::new(),
                    exits: entry,
                }
            }
        }
    }

    fn process_if(
        &mut self,
        condition: Option<&str>,
        code: &str,
        then_block: &[Statement],
        else_block: Option<&[Statement]>,
        entry: Vec<ExitPoint>,
    ) -> BlockOutcome {
        let decision = self.decision(condition, code);
        self.attach(&entry, decision);

        let then_outcome =
            self.process_block(then_block, vec![ExitPoint::port(decision, Port::Left, "true")]);
        let mut nodes = vec![decision];
        nodes.extend(then_outcome.nodes);
        let mut exits = then_outcome.exits;

        let false_exit = ExitPoint::port(decision, Port::Right, "false");
        match else_block {
            Some(block) => {
                let else_outcome = self.process_block(block, vec![false_exit]);
                nodes.extend(else_outcome.nodes);
                exits.extend(else_outcome.exits);
            }
            None => exits.push(false_exit),
        }
        BlockOutcome { nodes, exits }
    }

    fn process_loop(
        &mut self,
        condition: Option<&str>,
        code: &str,
        body: &[Statement],
        entry: Vec<ExitPoint>,
    ) -> BlockOutcome {
        let decision = self.decision(condition, code);
        self.attach(&entry, decision);

        let body_outcome =
            self.process_block(body, vec![ExitPoint::port(decision, Port::Left, "true")]);
        // Back-edges: every way out of the body re-tests the condition.
        self.attach(&body_outcome.exits, decision);

        let mut nodes = vec![decision];
        nodes.extend(body_outcome.nodes);
        BlockOutcome {
            nodes,
            exits: vec![ExitPoint::port(decision, Port::Right, "false")],
        }
    }

    /// The body runs first; the condition node follows it and loops back to the
    /// body's first node. The loop's forward exit branches off that same node.
    fn process_post_test_loop(
        &mut self,
        condition: Option<&str>,
        code: &str,
        body: &[Statement],
        entry: Vec<ExitPoint>,
    ) -> BlockOutcome {
        let body_outcome = self.process_block(body, entry);
        let decision = self.decision(condition, code);
        self.attach(&body_outcome.exits, decision);

        let exit = match body_outcome.nodes.first() {
            Some(&first) => {
                self.graph
                    .connect(decision, first, Port::Left, Port::Top, "true");
                ExitPoint::port(first, Port::Right, "false")
            }
            None => ExitPoint::port(decision, Port::Right, "false"),
        };

        let mut nodes = body_outcome.nodes;
        nodes.push(decision);
        BlockOutcome {
            nodes,
            exits: vec![exit],
        }
    }

    fn process_switch(
        &mut self,
        selector: Option<&str>,
        code: &str,
        branches: &[Branch],
        entry: Vec<ExitPoint>,
    ) -> BlockOutcome {
        let decision = self.decision(selector, code);
        self.attach(&entry, decision);

        if branches.is_empty() {
            return BlockOutcome::single(decision);
        }

        let mut nodes = vec![decision];
        let mut exits = Vec::new();
        for branch in branches {
            let outcome = self.process_block(
                &branch.body,
                vec![ExitPoint::port(decision, Port::Bottom, branch.label.as_str())],
            );
            nodes.extend(outcome.nodes);
            exits.extend(outcome.exits);
        }
        BlockOutcome { nodes, exits }
    }

    fn process_function(&mut self, decl: &FunctionDecl, entry: Vec<ExitPoint>) -> BlockOutcome {
        let flags = FunctionFlags {
            is_prototype: decl.body.is_none(),
            is_main: decl.is_main(),
        };
        let node = self.graph.create_node(
            NodeSpec::new(NodeKind::Process, decl.label.as_str())
                .code(decl.code.as_str())
                .full_body(decl.full_body.clone())
                .function(flags),
        );
        self.attach(&entry, node);

        let Some(body) = &decl.body else {
            return BlockOutcome::single(node);
        };

        let body_outcome = self.process_block(body, vec![ExitPoint::Node(node)]);
        let exits = if decl.threads_body {
            body_outcome.exits
        } else {
            vec![ExitPoint::Node(node)]
        };
        let mut nodes = vec![node];
        nodes.extend(body_outcome.nodes);
        BlockOutcome { nodes, exits }
    }

    fn decision(&mut self, condition: Option<&str>, code: &str) -> NodeId {
        let label = condition
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(NO_CONDITION);
        self.graph
            .create_node(NodeSpec::new(NodeKind::Decision, label).code(code))
    }

    fn attach(&mut self, exits: &[ExitPoint], to: NodeId) {
        for exit in exits {
            self.graph.connect_exit(exit, to);
        }
    }
}
