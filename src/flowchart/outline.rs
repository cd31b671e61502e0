use super::Flowchart;
use std::fmt;

/// A wrapper to display a built flowchart as an indented node/edge listing.
/// Used by the CLI's `outline` format when inspecting a build by hand.
pub struct FlowchartOutline<'a> {
    pub chart: &'a Flowchart,
}

impl<'a> fmt::Display for FlowchartOutline<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Flowchart: {} nodes, {} connections",
            self.chart.nodes.len(),
            self.chart.connections.len()
        )?;
        for node in &self.chart.nodes {
            write!(
                f,
                "{:>8} {:<8} \"{}\"",
                node.id.to_string(),
                node.kind,
                node.label
            )?;
            if node.is_main_function {
                write!(f, " [main]")?;
            } else if node.is_prototype {
                write!(f, " [prototype]")?;
            } else if node.is_function {
                write!(f, " [function]")?;
            }
            writeln!(f)?;

            let mut edges = self.chart.outgoing(node.id).peekable();
            while let Some(edge) = edges.next() {
                let marker = if edges.peek().is_some() { "├──" } else { "└──" };
                let target = self
                    .chart
                    .node(edge.to)
                    .map_or_else(|| "?".to_string(), |n| n.kind.to_string());
                write!(
                    f,
                    "         {} {} -> {} ({}) {}",
                    marker, edge.from_port, edge.to, target, edge.to_port
                )?;
                if !edge.label.is_empty() {
                    write!(f, " [{}]", edge.label)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Flowchart {
    pub fn outline(&self) -> FlowchartOutline<'_> {
        FlowchartOutline { chart: self }
    }
}
