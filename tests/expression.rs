//! Tests for the C/C++ expression stringifier.
mod common;
use common::*;
use serde_json::json;
use zushiki::languages::c::{CExpression, stringify};

#[cfg(test)]
mod expression_tests {
    use super::*;

    #[test]
    fn test_atoms() {
        assert_eq!(stringify(&ident("count")), "count");
        assert_eq!(stringify(&int(42)), "42");
        assert_eq!(stringify(&json!({ "type": "RealLiteral", "value": 2.5 })), "2.5");
        assert_eq!(stringify(&json!({ "type": "StringLiteral", "value": "hi" })), "\"hi\"");
        assert_eq!(stringify(&json!({ "type": "CharLiteral", "value": "a" })), "'a'");
        assert_eq!(stringify(&json!({ "type": "BoolLiteral", "value": true })), "true");
    }

    #[test]
    fn test_string_literal_quoting() {
        assert_eq!(
            stringify(&json!({ "type": "StringLiteral", "value": "say \"hi\"\n" })),
            "\"say \\\"hi\\\"\\n\""
        );
        // Already-quoted source text is kept as is.
        assert_eq!(
            stringify(&json!({ "type": "StringLiteral", "value": "\"%d\\n\"" })),
            "\"%d\\n\""
        );
        // Existing escapes pass through untouched.
        assert_eq!(
            stringify(&json!({ "type": "StringLiteral", "value": "say \\\"hi\\\"" })),
            "\"say \\\"hi\\\"\""
        );
        assert_eq!(
            stringify(&json!({ "type": "StringLiteral", "value": "a\\tb\\\\" })),
            "\"a\\tb\\\\\""
        );
    }

    #[test]
    fn test_operator_tokens_map_to_symbols() {
        assert_eq!(stringify(&binary("ASSIGN", ident("x"), int(1))), "x = 1");
        assert_eq!(stringify(&binary("PLUSASSIGN", ident("x"), int(1))), "x += 1");
        assert_eq!(stringify(&binary("AND", ident("a"), ident("b"))), "a && b");
        // Unmapped tokens fall through verbatim.
        assert_eq!(stringify(&binary("<=>", ident("a"), ident("b"))), "a <=> b");
        assert_eq!(stringify(&binary("+", ident("a"), ident("b"))), "a + b");
    }

    #[test]
    fn test_unary_prefix_and_postfix() {
        let post = json!({ "type": "UnaryOp", "operator": "INCREMENT", "operand": ident("i"), "postfix": true });
        let pre = json!({ "type": "UnaryOp", "operator": "DECREMENT", "operand": ident("i"), "postfix": false });
        let not = json!({ "type": "UnaryOp", "operator": "NOT", "operand": binary("EQ", ident("a"), ident("b")) });

        assert_eq!(stringify(&post), "i++");
        assert_eq!(stringify(&pre), "--i");
        assert_eq!(stringify(&not), "!(a == b)");

        let prefix = |operator: &str, operand: serde_json::Value| {
            json!({ "type": "UnaryOp", "operator": operator, "operand": operand, "postfix": false })
        };
        assert_eq!(stringify(&prefix("MINUS", prefix("MINUS", ident("x")))), "-(-x)");
        assert_eq!(stringify(&prefix("PLUS", prefix("PLUS", ident("x")))), "+(+x)");
        assert_eq!(stringify(&prefix("AMPERSAND", prefix("AMPERSAND", ident("x")))), "&(&x)");
        assert_eq!(stringify(&prefix("MINUS", prefix("DECREMENT", ident("i")))), "-(--i)");
        assert_eq!(stringify(&prefix("MINUS", int(-1))), "-(-1)");
        assert_eq!(stringify(&prefix("MINUS", prefix("NOT", ident("x")))), "-!x");
    }

    #[test]
    fn test_precedence_parentheses() {
        let sum = binary("PLUS", ident("a"), ident("b"));
        assert_eq!(stringify(&binary("MULTIPLY", sum.clone(), ident("c"))), "(a + b) * c");
        assert_eq!(stringify(&binary("PLUS", ident("c"), binary("MULTIPLY", ident("a"), ident("b")))), "c + a * b");

        let difference = binary("MINUS", ident("b"), ident("c"));
        assert_eq!(stringify(&binary("MINUS", ident("a"), difference)), "a - (b - c)");
        assert_eq!(
            stringify(&binary("MINUS", binary("MINUS", ident("a"), ident("b")), ident("c"))),
            "a - b - c"
        );
        assert_eq!(
            stringify(&binary("ASSIGN", ident("x"), binary("ASSIGN", ident("y"), int(0)))),
            "x = y = 0"
        );
    }

    #[test]
    fn test_postfix_forms() {
        let array = json!({ "type": "ArrayAccessExpr", "array": ident("grid"), "index": binary("PLUS", ident("i"), int(1)) });
        assert_eq!(stringify(&array), "grid[i + 1]");

        let dot = json!({ "type": "MemberAccessExpr", "object": ident("p"), "member": "x" });
        let arrow = json!({ "type": "MemberAccessExpr", "object": ident("node"), "member": "next", "isArrow": true });
        assert_eq!(stringify(&dot), "p.x");
        assert_eq!(stringify(&arrow), "node->next");

        let nested = call("max", vec![dot, binary("COMMA", ident("a"), ident("b"))]);
        assert_eq!(stringify(&nested), "max(p.x, (a, b))");
    }

    #[test]
    fn test_ternary_cast_and_sizeof() {
        let ternary = json!({
            "type": "TernaryOp",
            "condition": binary("GT", ident("a"), ident("b")),
            "trueExpr": ident("a"),
            "falseExpr": ident("b")
        });
        assert_eq!(stringify(&ternary), "a > b ? a : b");

        let cast = json!({ "type": "CastExpr", "targetType": "double", "expression": ident("n") });
        assert_eq!(stringify(&cast), "(double)n");

        let size = json!({ "type": "SizeofExpr", "operand": ident("int") });
        assert_eq!(stringify(&size), "sizeof(int)");
    }

    #[test]
    fn test_unknown_and_absent_render_empty() {
        assert_eq!(stringify(&json!({ "type": "LambdaExpr" })), "");
        assert_eq!(stringify(&json!(null)), "");
        assert_eq!(stringify(&json!(17)), "");
        assert_eq!(stringify(&binary("PLUS", ident("a"), json!(null))), "a + ");
        assert!(CExpression::from_opt(None).is_unknown());
    }

    #[test]
    fn test_bare_string_is_source_text() {
        assert_eq!(stringify(&json!("x + 1")), "x + 1");
        assert_eq!(stringify(&call("printf", vec![json!("fmt"), ident("x")])), "printf(fmt, x)");
    }
}
