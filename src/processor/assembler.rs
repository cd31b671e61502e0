use super::BlockProcessor;
use crate::flowchart::{ExitPoint, Flowchart, GraphBuilder, NodeKind, NodeSpec};
use crate::program::ProgramDefinition;
use tracing::debug;

/// Builds the whole flowchart for a lowered program.
///
/// A start node is created first, each section is chained onto the exit points
/// left by the one before it, and a single end node closes every live exit.
pub fn assemble(program: &ProgramDefinition, mut graph: GraphBuilder) -> Flowchart {
    let start = graph.create_node(NodeSpec::new(NodeKind::Start, "Start").code(program.start_code.as_str()));

    let mut exits = vec![ExitPoint::Node(start)];
    {
        let mut processor = BlockProcessor::new(&mut graph);
        for section in &program.sections {
            debug!(
                section = %section.name,
                statements = section.block.len(),
                "assembling section"
            );
            exits = processor.process_block(&section.block, exits).exits;
        }
    }

    let end = graph.create_node(NodeSpec::new(NodeKind::End, "End"));
    for exit in &exits {
        if exit.node() != end {
            graph.connect_exit(exit, end);
        }
    }

    graph.finish()
}
