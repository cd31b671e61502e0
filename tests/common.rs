//! Common test utilities for building program documents.
use serde_json::{Map, Value, json};
use zushiki::prelude::*;

/// Wraps section entries into a Pascal SPR document.
#[allow(dead_code)]
pub fn spr_program(name: &str, sections: Value) -> Value {
    json!({ "program": { "name": name, "sections": sections } })
}

/// An SPR document with only a main block.
#[allow(dead_code)]
pub fn spr_main(entries: Vec<Value>) -> Value {
    spr_program("Test", json!({ "mainBlock": keyed(entries) }))
}

/// Keys entries `expr1`, `expr2`, ... in order.
#[allow(dead_code)]
pub fn keyed(entries: Vec<Value>) -> Value {
    let map: Map<String, Value> = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| (format!("expr{}", i + 1), entry))
        .collect();
    Value::Object(map)
}

/// Wraps top-level statements into a C AST document.
#[allow(dead_code)]
pub fn c_program(statements: Vec<Value>) -> Value {
    json!({ "type": "Program", "body": { "type": "Block", "statements": statements } })
}

#[allow(dead_code)]
pub fn c_block(statements: Vec<Value>) -> Value {
    json!({ "type": "Block", "statements": statements })
}

#[allow(dead_code)]
pub fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

#[allow(dead_code)]
pub fn int(value: i64) -> Value {
    json!({ "type": "IntLiteral", "value": value })
}

#[allow(dead_code)]
pub fn binary(operator: &str, left: Value, right: Value) -> Value {
    json!({ "type": "BinaryOp", "operator": operator, "left": left, "right": right })
}

#[allow(dead_code)]
pub fn call(callee: &str, arguments: Vec<Value>) -> Value {
    json!({ "type": "CallExpr", "callee": ident(callee), "arguments": arguments })
}

#[allow(dead_code)]
pub fn expr_stmt(expression: Value) -> Value {
    json!({ "type": "ExprStmt", "expression": expression })
}

#[allow(dead_code)]
pub fn function(return_type: &str, name: &str, body: Option<Value>) -> Value {
    let mut decl = json!({ "type": "FunctionDecl", "returnType": return_type, "name": name, "params": [] });
    if let Some(body) = body {
        decl["body"] = body;
    }
    decl
}

#[allow(dead_code)]
pub fn pascal(document: &Value) -> Flowchart {
    Generator::builder(Language::Pascal)
        .build()
        .generate(document)
        .expect("Failed to generate Pascal flowchart")
}

#[allow(dead_code)]
pub fn c(document: &Value) -> Flowchart {
    Generator::builder(Language::C)
        .build()
        .generate(document)
        .expect("Failed to generate C flowchart")
}

/// Node labels in creation order.
#[allow(dead_code)]
pub fn labels(chart: &Flowchart) -> Vec<&str> {
    chart.nodes.iter().map(|n| n.label.as_str()).collect()
}

#[allow(dead_code)]
pub fn kinds(chart: &Flowchart) -> Vec<NodeKind> {
    chart.nodes.iter().map(|n| n.kind).collect()
}

/// The first node carrying `label`.
#[allow(dead_code)]
pub fn by_label<'a>(chart: &'a Flowchart, label: &str) -> &'a FlowchartNode {
    chart
        .nodes
        .iter()
        .find(|n| n.label == label)
        .unwrap_or_else(|| panic!("no node labelled {:?} in {:?}", label, labels(chart)))
}

/// The connection between two nodes, if any.
#[allow(dead_code)]
pub fn edge<'a>(chart: &'a Flowchart, from: NodeId, to: NodeId) -> Option<&'a Connection> {
    chart.connections.iter().find(|c| c.from == from && c.to == to)
}

/// Asserts an edge exists with the given source port and label.
#[allow(dead_code)]
pub fn assert_edge(chart: &Flowchart, from: &str, to: &str, port: Port, label: &str) {
    let from_node = by_label(chart, from);
    let to_node = by_label(chart, to);
    let connection = edge(chart, from_node.id, to_node.id)
        .unwrap_or_else(|| panic!("missing edge {:?} -> {:?}\n{}", from, to, chart.outline()));
    assert_eq!(connection.from_port, port, "port of {:?} -> {:?}", from, to);
    assert_eq!(connection.to_port, Port::Top, "target port of {:?} -> {:?}", from, to);
    assert_eq!(connection.label, label, "label of {:?} -> {:?}", from, to);
}
