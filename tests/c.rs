//! Tests for the C/C++ AST adapter.
mod common;
use common::*;
use serde_json::{Value, json};
use zushiki::prelude::*;

fn var_decl(var_type: &str, name: &str, initializer: Value) -> Value {
    json!({ "type": "VarDeclStmt", "varType": var_type, "name": name, "initializer": initializer })
}

#[cfg(test)]
mod c_tests {
    use super::*;

    #[test]
    fn test_main_threads_its_body() {
        let document = c_program(vec![function(
            "int",
            "main",
            Some(c_block(vec![
                var_decl("int", "x", int(5)),
                expr_stmt(call("printf", vec![json!({ "type": "StringLiteral", "value": "%d" }), ident("x")])),
                json!({ "type": "ReturnStmt", "value": int(0) }),
            ])),
        )]);
        let chart = c(&document);

        assert_eq!(
            labels(&chart),
            vec!["Start", "int main()", "int x = 5", "printf(\"%d\", x)", "return 0", "End"]
        );
        assert_eq!(
            kinds(&chart),
            vec![
                NodeKind::Start,
                NodeKind::Process,
                NodeKind::Process,
                NodeKind::Output,
                NodeKind::Process,
                NodeKind::End
            ]
        );
        assert_eq!(chart.connections.len(), 5);
        assert_edge(&chart, "return 0", "End", Port::Bottom, "");

        let main = by_label(&chart, "int main()");
        assert!(main.is_function);
        assert!(main.is_main_function);
        assert!(!main.is_prototype);
        let full_body = main.full_body.as_deref().expect("main carries its source");
        assert!(full_body.starts_with("int main() {\n"));
        assert!(full_body.contains("\n    int x = 5;\n"));
        assert!(full_body.contains("\n    printf(\"%d\", x);\n"));
        assert!(full_body.ends_with("    return 0;\n}"));
    }

    #[test]
    fn test_other_functions_hang_off_their_node() {
        let document = c_program(vec![
            json!({
                "type": "FunctionDecl",
                "returnType": "int",
                "name": "add",
                "params": [{ "paramType": "int", "name": "a" }, { "paramType": "int", "name": "b" }],
                "body": c_block(vec![json!({ "type": "ReturnStmt", "value": binary("PLUS", ident("a"), ident("b")) })])
            }),
            function("void", "helper", None),
            function(
                "int",
                "main",
                Some(c_block(vec![expr_stmt(call("add", vec![int(1), int(2)]))])),
            ),
        ]);
        let chart = c(&document);

        assert_eq!(chart.nodes.len(), 7);
        assert_edge(&chart, "Start", "int add(int a, int b)", Port::Bottom, "");
        assert_edge(&chart, "int add(int a, int b)", "return a + b", Port::Bottom, "");
        assert_edge(&chart, "int add(int a, int b)", "void helper()", Port::Bottom, "");
        assert_edge(&chart, "void helper()", "int main()", Port::Bottom, "");
        assert_edge(&chart, "int main()", "add(1, 2)", Port::Bottom, "");
        assert_edge(&chart, "add(1, 2)", "End", Port::Bottom, "");
        assert_eq!(chart.outgoing(by_label(&chart, "return a + b").id).count(), 0);

        let helper = by_label(&chart, "void helper()");
        assert!(helper.is_prototype);
        assert!(!helper.is_main_function);
        assert_eq!(helper.full_body.as_deref(), Some("void helper();"));
        assert!(!by_label(&chart, "int add(int a, int b)").is_main_function);
    }

    #[test]
    fn test_if_else_with_single_statement_branch() {
        let document = c_program(vec![json!({
            "type": "IfStmt",
            "condition": binary("GT", ident("x"), int(0)),
            "thenBranch": c_block(vec![expr_stmt(call("puts", vec![json!({ "type": "StringLiteral", "value": "pos" })]))]),
            "elseBranch": { "type": "AssignStmt", "target": ident("x"), "value": int(0) }
        })]);
        let chart = c(&document);

        let decision = by_label(&chart, "x > 0");
        assert_eq!(decision.kind, NodeKind::Decision);
        assert_eq!(decision.code_reference, "if (x > 0)");
        assert_edge(&chart, "x > 0", "puts(\"pos\")", Port::Left, "true");
        assert_edge(&chart, "x > 0", "x = 0", Port::Right, "false");
        assert_eq!(by_label(&chart, "puts(\"pos\")").kind, NodeKind::Output);
    }

    #[test]
    fn test_for_loop_header_label() {
        let document = c_program(vec![json!({
            "type": "ForStmt",
            "init": var_decl("int", "i", int(0)),
            "condition": binary("LT", ident("i"), int(10)),
            "update": { "type": "UnaryOp", "operator": "INCREMENT", "operand": ident("i"), "postfix": true },
            "body": c_block(vec![expr_stmt(call("printf", vec![ident("i")]))])
        })]);
        let chart = c(&document);

        let header = "int i = 0; i < 10; i++";
        assert_eq!(by_label(&chart, header).kind, NodeKind::Decision);
        assert_eq!(by_label(&chart, header).code_reference, format!("for ({})", header));
        assert_edge(&chart, header, "printf(i)", Port::Left, "true");
        assert_edge(&chart, "printf(i)", header, Port::Bottom, "");
        assert_edge(&chart, header, "End", Port::Right, "false");
    }

    #[test]
    fn test_for_loop_without_clauses_uses_condition() {
        let document = c_program(vec![json!({
            "type": "ForStmt",
            "condition": binary("NEQ", ident("p"), ident("NULL")),
            "body": c_block(vec![])
        })]);
        let chart = c(&document);

        assert_eq!(labels(&chart), vec!["Start", "p != NULL", "End"]);
    }

    #[test]
    fn test_do_while_body_first() {
        let document = c_program(vec![json!({
            "type": "DoWhileStmt",
            "body": c_block(vec![json!({
                "type": "AssignStmt", "target": ident("x"), "operator": "PLUSASSIGN", "value": int(1)
            })]),
            "condition": binary("LT", ident("x"), int(5))
        })]);
        let chart = c(&document);

        assert_eq!(labels(&chart), vec!["Start", "x += 1", "x < 5", "End"]);
        assert_edge(&chart, "Start", "x += 1", Port::Bottom, "");
        assert_edge(&chart, "x += 1", "x < 5", Port::Bottom, "");
        assert_edge(&chart, "x < 5", "x += 1", Port::Left, "true");
        assert_edge(&chart, "x += 1", "End", Port::Right, "false");
    }

    #[test]
    fn test_switch_cases_and_default() {
        let document = c_program(vec![json!({
            "type": "SwitchStmt",
            "expression": ident("c"),
            "cases": [
                {
                    "value": int(1),
                    "statements": [
                        expr_stmt(call("puts", vec![json!({ "type": "StringLiteral", "value": "one" })])),
                        { "type": "BreakStmt" }
                    ]
                },
                {
                    "isDefault": true,
                    "statements": [expr_stmt(call("puts", vec![json!({ "type": "StringLiteral", "value": "other" })]))]
                }
            ]
        })]);
        let chart = c(&document);

        let decision = by_label(&chart, "c");
        assert_eq!(decision.kind, NodeKind::Decision);
        assert_eq!(decision.code_reference, "switch (c)");
        assert_eq!(chart.outgoing(decision.id).count(), 2);
        assert_edge(&chart, "c", "puts(\"one\")", Port::Bottom, "1");
        assert_edge(&chart, "c", "puts(\"other\")", Port::Bottom, "default");
        assert_edge(&chart, "puts(\"one\")", "break", Port::Bottom, "");
        assert_edge(&chart, "break", "End", Port::Bottom, "");
        assert_edge(&chart, "puts(\"other\")", "End", Port::Bottom, "");
    }

    #[test]
    fn test_stream_io_detection() {
        let document = c_program(vec![
            expr_stmt(binary("RSHIFT", ident("cin"), ident("n"))),
            expr_stmt(binary(
                "LSHIFT",
                binary("LSHIFT", ident("std::cout"), json!({ "type": "StringLiteral", "value": "n=" })),
                ident("n"),
            )),
            var_decl("int", "ch", call("getchar", vec![])),
            expr_stmt(binary("LSHIFT", ident("mask"), int(2))),
        ]);
        let chart = c(&document);

        assert_eq!(by_label(&chart, "cin >> n").kind, NodeKind::Input);
        assert_eq!(by_label(&chart, "std::cout << \"n=\" << n").kind, NodeKind::Output);
        assert_eq!(by_label(&chart, "int ch = getchar()").kind, NodeKind::Input);
        assert_eq!(by_label(&chart, "mask << 2").kind, NodeKind::Process);
    }

    #[test]
    fn test_declarations_are_process_nodes() {
        let document = c_program(vec![
            json!({ "type": "PreprocessorDirective", "directive": "#include <stdio.h>" }),
            json!({
                "type": "StructDecl",
                "name": "Point",
                "members": [{ "memberType": "int", "name": "x" }, { "memberType": "int", "name": "y" }]
            }),
            json!({ "type": "TypedefDecl", "originalType": "struct Point", "alias": "Point" }),
        ]);
        let chart = c(&document);

        assert_eq!(
            labels(&chart),
            vec!["Start", "#include <stdio.h>", "struct Point", "typedef struct Point Point", "End"]
        );
        assert!(chart.nodes_of_kind(NodeKind::Process).count() == 3);
        assert_eq!(
            by_label(&chart, "struct Point").code_reference,
            "struct Point {\n    int x;\n    int y;\n};"
        );
    }

    #[test]
    fn test_unknown_statement_is_skipped() {
        let document = c_program(vec![
            expr_stmt(call("foo", vec![])),
            json!({ "type": "GotoStmt", "label": "retry" }),
            expr_stmt(call("bar", vec![])),
        ]);
        let chart = c(&document);

        assert_eq!(labels(&chart), vec!["Start", "foo()", "bar()", "End"]);
        assert_edge(&chart, "foo()", "bar()", Port::Bottom, "");
    }

    #[test]
    fn test_cpp_shares_the_c_schema() {
        let document = c_program(vec![expr_stmt(binary("LSHIFT", ident("cout"), ident("x")))]);
        let chart = Generator::builder(Language::Cpp)
            .build()
            .generate(&document)
            .expect("Failed to generate");

        assert_eq!(by_label(&chart, "cout << x").kind, NodeKind::Output);
    }

    #[test]
    fn test_missing_program_body_is_an_error() {
        let generator = Generator::builder(Language::C).build();

        assert_eq!(
            generator.generate(&json!({ "type": "Program" })),
            Err(FlowchartError::MissingProgramBody)
        );
        assert_eq!(
            generator.generate(&json!({ "type": "Module", "body": c_block(vec![]) })),
            Err(FlowchartError::MissingProgramBody)
        );
        assert_eq!(
            generator.generate(&spr_main(vec![])),
            Err(FlowchartError::MissingProgramBody)
        );
    }
}
