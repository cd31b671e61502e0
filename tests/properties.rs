//! Graph invariants that must hold for every generated flowchart.
mod common;
use common::*;
use serde_json::{Value, json};
use zushiki::prelude::*;

/// A Pascal program touching every statement kind.
fn mixed_pascal() -> Value {
    spr_program(
        "Mixed",
        json!({
            "functionBlock": {
                "expr1": {
                    "type": "function",
                    "declaration": "function Square(n: integer): integer",
                    "body": { "expr1": { "type": "assign", "value": "Square := n * n" } }
                },
                "expr2": { "type": "procedure", "declaration": "procedure Later" }
            },
            "constantBlock": { "expr1": "LIMIT = 5" },
            "variableBlock": { "expr1": "i, total: integer" },
            "mainBlock": {
                "expr1": { "type": "io", "value": "readln(total)" },
                "expr2": {
                    "type": "for",
                    "condition": "i := 1 to LIMIT",
                    "body": {
                        "expr1": {
                            "type": "if",
                            "condition": "i mod 2 = 0",
                            "body": { "expr1": "total := total + i" }
                        },
                        "expr2": { "type": "else", "body": { "expr1": "total := total - i" } }
                    }
                },
                "expr3": {
                    "type": "caseOf",
                    "condition": "total",
                    "body": {
                        "expr1": { "compareValue": "0", "body": { "expr1": "writeln('zero')" } },
                        "expr2": { "type": "else", "body": {} }
                    }
                },
                "expr4": {
                    "type": "until",
                    "condition": "total <= 0",
                    "body": { "expr1": "total := total - 1", "expr2": "writeln(total)" }
                },
                "expr5": { "type": "while", "condition": "total > 100", "body": { "expr1": "total := total div 2" } }
            }
        }),
    )
}

/// A C program touching every statement kind.
fn mixed_c() -> Value {
    c_program(vec![
        json!({ "type": "PreprocessorDirective", "directive": "#include <stdio.h>" }),
        function("int", "helper", Some(c_block(vec![json!({ "type": "ReturnStmt", "value": int(1) })]))),
        function(
            "int",
            "main",
            Some(c_block(vec![
                json!({ "type": "VarDeclStmt", "varType": "int", "name": "n", "initializer": int(0) }),
                expr_stmt(binary("RSHIFT", ident("cin"), ident("n"))),
                json!({
                    "type": "WhileStmt",
                    "condition": binary("GT", ident("n"), int(0)),
                    "body": c_block(vec![
                        json!({
                            "type": "IfStmt",
                            "condition": binary("EQ", ident("n"), int(3)),
                            "thenBranch": c_block(vec![json!({ "type": "BreakStmt" })])
                        }),
                        json!({ "type": "AssignStmt", "target": ident("n"), "operator": "MINUSASSIGN", "value": int(1) })
                    ])
                }),
                json!({
                    "type": "DoWhileStmt",
                    "body": c_block(vec![expr_stmt(call("printf", vec![ident("n")]))]),
                    "condition": binary("LT", ident("n"), int(3))
                }),
                json!({
                    "type": "SwitchStmt",
                    "expression": ident("n"),
                    "cases": [
                        { "value": int(1), "statements": [expr_stmt(call("puts", vec![ident("s")]))] },
                        { "isDefault": true, "statements": [] }
                    ]
                }),
                json!({ "type": "ReturnStmt", "value": int(0) }),
            ])),
        ),
    ])
}

fn charts() -> Vec<Flowchart> {
    vec![pascal(&mixed_pascal()), c(&mixed_c())]
}

#[cfg(test)]
mod properties_tests {
    use super::*;

    #[test]
    fn test_straight_line_is_a_chain() {
        for n in 0..6 {
            let entries = (0..n).map(|i| json!(format!("x{} := {}", i, i))).collect();
            let chart = pascal(&spr_main(entries));

            assert_eq!(chart.nodes.len(), n + 2);
            assert_eq!(chart.connections.len(), n + 1);
            for (i, connection) in chart.connections.iter().enumerate() {
                assert_eq!(connection.from, chart.nodes[i].id);
                assert_eq!(connection.to, chart.nodes[i + 1].id);
            }
        }

        let statements = (0..4)
            .map(|i| expr_stmt(call("step", vec![int(i)])))
            .collect();
        let chart = c(&c_program(statements));
        assert_eq!(chart.nodes.len(), 6);
        assert_eq!(chart.connections.len(), 5);
    }

    #[test]
    fn test_every_node_but_start_has_an_incoming_edge() {
        for chart in charts() {
            for node in &chart.nodes {
                let incoming = chart.incoming(node.id).count();
                if node.kind == NodeKind::Start {
                    assert_eq!(incoming, 0);
                } else {
                    assert!(incoming > 0, "{} has no incoming edge\n{}", node.id, chart.outline());
                }
            }
        }
    }

    #[test]
    fn test_end_has_no_outgoing_edge() {
        for chart in charts() {
            let end = chart.end().expect("end node");
            assert_eq!(chart.nodes.last().map(|n| n.id), Some(end.id));
            assert_eq!(chart.outgoing(end.id).count(), 0);
            assert!(chart.incoming(end.id).count() > 0);
            assert_eq!(chart.nodes_of_kind(NodeKind::Start).count(), 1);
            assert_eq!(chart.nodes_of_kind(NodeKind::End).count(), 1);
        }
    }

    #[test]
    fn test_decisions_have_true_and_false_branches() {
        for chart in charts() {
            for decision in chart.nodes_of_kind(NodeKind::Decision) {
                let labels: Vec<&str> = chart.outgoing(decision.id).map(|c| c.label.as_str()).collect();
                let is_switch = decision.code_reference.starts_with("case") || decision.code_reference.starts_with("switch");
                if is_switch {
                    continue;
                }
                assert!(labels.contains(&"true"), "{} lacks a true edge: {:?}", decision.label, labels);

                // Post-test loops leave through the body's first node, which the true edge enters.
                let reaches_false = labels.contains(&"false")
                    || chart
                        .outgoing(decision.id)
                        .filter(|c| c.label == "true")
                        .any(|c| chart.outgoing(c.to).any(|next| next.label == "false"));
                assert!(reaches_false, "{} never reaches a false edge\n{}", decision.label, chart.outline());
            }
        }
    }

    #[test]
    fn test_no_self_loops_or_duplicates() {
        for chart in charts() {
            assert!(chart.connections.iter().all(|c| c.from != c.to));
            for (i, a) in chart.connections.iter().enumerate() {
                assert!(!chart.connections[i + 1..].contains(a), "duplicate edge {:?}", a);
            }
        }
    }

    #[test]
    fn test_ids_are_unique_and_layout_monotonic() {
        for chart in charts() {
            for (i, node) in chart.nodes.iter().enumerate() {
                assert_eq!(node.id, NodeId(i as u32));
            }
            assert!(chart.nodes.windows(2).all(|w| w[0].y < w[1].y));
            for connection in &chart.connections {
                assert!(chart.node(connection.from).is_some());
                assert!(chart.node(connection.to).is_some());
            }
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let generator = Generator::builder(Language::Pascal).build();
        let document = mixed_pascal();
        let first = generator.generate(&document).expect("first build");
        let second = generator.generate(&document).expect("second build");
        assert_eq!(first, second);

        let generator = Generator::builder(Language::C).build();
        let document = mixed_c();
        assert_eq!(generator.generate(&document), generator.generate(&document));
    }

    #[test]
    fn test_json_output_shape() {
        let chart = pascal(&mixed_pascal());
        let json: Value = serde_json::from_str(&chart.to_json().expect("serializes")).expect("valid JSON");

        let nodes = json["nodes"].as_array().expect("nodes array");
        let connections = json["connections"].as_array().expect("connections array");
        assert_eq!(nodes.len(), chart.nodes.len());
        assert_eq!(connections.len(), chart.connections.len());

        let start = &nodes[0];
        assert_eq!(start["kind"], "start");
        assert_eq!(start["codeReference"], "program Mixed;");
        assert!(start.get("isFunction").is_none());

        let square = nodes
            .iter()
            .find(|n| n["label"] == "function Square(n: integer): integer")
            .expect("function node");
        assert_eq!(square["isFunction"], true);
        assert!(square["fullBody"].as_str().is_some());

        let later = nodes.iter().find(|n| n["label"] == "procedure Later").expect("procedure node");
        assert_eq!(later["isPrototype"], true);

        assert!(connections.iter().any(|c| c["fromPort"] == "left" && c["label"] == "true"));
        assert!(connections.iter().all(|c| c["toPort"] == "top"));

        let round_trip: Flowchart = serde_json::from_value(json).expect("deserializes");
        assert_eq!(round_trip, chart);
    }
}
