use clap::{Parser, ValueEnum};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Map, Value, json};
use std::fs;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Schema {
    /// Pascal SPR document
    Pascal,
    /// C AST document
    C,
}

/// A CLI tool to generate random, well-formed program documents for the Zushiki generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The document schema to generate
    #[arg(short, long, value_enum, default_value = "pascal")]
    schema: Schema,

    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_program.json")]
    output: String,

    /// The number of statements in the main block
    #[arg(long, default_value_t = 20)]
    statements: usize,

    /// The maximum nesting depth of compound statements
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// The number of routines to declare besides the main block
    #[arg(long, default_value_t = 2)]
    functions: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.statements == 0 {
        eprintln!("Error: --statements must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating a {:?} document ({} statements, depth {}, {} routines)...",
        cli.schema, cli.statements, cli.depth, cli.functions
    );

    let document = match cli.schema {
        Schema::Pascal => pascal_document(&mut rng, &cli),
        Schema::C => c_document(&mut rng, &cli),
    };

    let json_output = serde_json::to_string_pretty(&document)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved program to '{}'", cli.output);
    Ok(())
}

const VARIABLES: &[&str] = &["i", "j", "n", "total", "count", "x", "y"];

fn variable(rng: &mut ThreadRng) -> &'static str {
    VARIABLES[rng.random_range(0..VARIABLES.len())]
}

fn comparison(rng: &mut ThreadRng) -> String {
    let operators = ["<", ">", "<=", ">=", "=", "<>"];
    format!(
        "{} {} {}",
        variable(rng),
        operators[rng.random_range(0..operators.len())],
        rng.random_range(0..100)
    )
}

// --- Pascal SPR ---

fn pascal_document(rng: &mut ThreadRng, cli: &Cli) -> Value {
    let functions = (0..cli.functions)
        .map(|n| {
            let body = short_pascal_block(rng, 4, cli.depth.saturating_sub(1));
            json!({
                "type": if n % 2 == 0 { "function" } else { "procedure" },
                "declaration": if n % 2 == 0 {
                    format!("function Func{}(a: integer): integer", n)
                } else {
                    format!("procedure Proc{}(a: integer)", n)
                },
                "body": body,
            })
        })
        .collect();

    json!({
        "program": {
            "name": "Generated",
            "sections": {
                "functionBlock": keyed(functions),
                "constantBlock": keyed(vec![json!("Limit: integer = 100"), json!("Step = 2")]),
                "variableBlock": keyed(VARIABLES.iter().map(|v| json!(format!("{}: integer", v))).collect()),
                "mainBlock": pascal_block(rng, cli.statements, cli.depth),
            }
        }
    })
}

fn pascal_block(rng: &mut ThreadRng, len: usize, depth: usize) -> Value {
    let mut entries = Vec::with_capacity(len);
    for _ in 0..len {
        entries.extend(pascal_statement(rng, depth));
    }
    keyed(entries)
}

/// A block of one to `below - 1` statements.
fn short_pascal_block(rng: &mut ThreadRng, below: usize, depth: usize) -> Value {
    let len = rng.random_range(1..below);
    pascal_block(rng, len, depth)
}

/// One statement; an `if` may come back paired with its sibling `else`.
fn pascal_statement(rng: &mut ThreadRng, depth: usize) -> Vec<Value> {
    let choice = if depth == 0 { rng.random_range(0..3) } else { rng.random_range(0..8) };
    let inner = depth.saturating_sub(1);
    match choice {
        0 => vec![json!({ "type": "assign", "value": format!("{} := {} + 1", variable(rng), variable(rng)) })],
        1 => vec![json!({ "type": "io", "value": format!("writeln({})", variable(rng)) })],
        2 => vec![json!({ "type": "io", "value": format!("readln({})", variable(rng)) })],
        3 => {
            let mut pair = vec![json!({
                "type": "if",
                "condition": comparison(rng),
                "body": short_pascal_block(rng, 3, inner),
            })];
            if rng.random_bool(0.5) {
                pair.push(json!({ "type": "else", "body": short_pascal_block(rng, 3, inner) }));
            }
            pair
        }
        4 => vec![json!({ "type": "while", "condition": comparison(rng), "body": pascal_block(rng, 2, inner) })],
        5 => vec![json!({
            "type": "for",
            "condition": format!("{} := 1 to {}", variable(rng), rng.random_range(2..20)),
            "body": pascal_block(rng, 1, inner),
        })],
        6 => vec![json!({ "type": "until", "condition": comparison(rng), "body": pascal_block(rng, 2, inner) })],
        _ => {
            let arms = rng.random_range(1..4);
            let mut branches: Vec<Value> = (0..arms)
                .map(|arm| json!({ "compareValue": format!("{}, {}", arm * 2, arm * 2 + 1), "body": pascal_block(rng, 1, inner) }))
                .collect();
            if rng.random_bool(0.5) {
                branches.push(json!({ "type": "else", "body": pascal_block(rng, 1, inner) }));
            }
            vec![json!({ "type": "caseOf", "condition": variable(rng), "body": keyed(branches) })]
        }
    }
}

/// Wraps entries in an `expr<N>` keyed map.
fn keyed(entries: Vec<Value>) -> Value {
    let map: Map<String, Value> = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| (format!("expr{}", i + 1), entry))
        .collect();
    Value::Object(map)
}

// --- C AST ---

fn c_document(rng: &mut ThreadRng, cli: &Cli) -> Value {
    let mut statements = vec![json!({ "type": "PreprocessorDirective", "directive": "#include <stdio.h>" })];
    for n in 0..cli.functions {
        statements.push(json!({
            "type": "FunctionDecl",
            "returnType": "int",
            "name": format!("helper{}", n),
            "params": [{ "paramType": "int", "name": "a" }],
            "body": short_c_block(rng, 4, cli.depth.saturating_sub(1)),
        }));
    }
    statements.push(json!({
        "type": "FunctionDecl",
        "returnType": "int",
        "name": "main",
        "params": [],
        "body": c_block(rng, cli.statements, cli.depth),
    }));

    json!({ "type": "Program", "body": { "type": "Block", "statements": statements } })
}

fn c_block(rng: &mut ThreadRng, len: usize, depth: usize) -> Value {
    let statements: Vec<Value> = (0..len).map(|_| c_statement(rng, depth)).collect();
    json!({ "type": "Block", "statements": statements })
}

fn short_c_block(rng: &mut ThreadRng, below: usize, depth: usize) -> Value {
    let len = rng.random_range(1..below);
    c_block(rng, len, depth)
}

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

fn int(value: i64) -> Value {
    json!({ "type": "IntLiteral", "value": value })
}

fn c_condition(rng: &mut ThreadRng) -> Value {
    let operators = ["LT", "GT", "LE", "GE", "EQ", "NEQ"];
    json!({
        "type": "BinaryOp",
        "operator": operators[rng.random_range(0..operators.len())],
        "left": ident(variable(rng)),
        "right": int(rng.random_range(0..100)),
    })
}

fn c_statement(rng: &mut ThreadRng, depth: usize) -> Value {
    let choice = if depth == 0 { rng.random_range(0..4) } else { rng.random_range(0..9) };
    let inner = depth.saturating_sub(1);
    match choice {
        0 => json!({
            "type": "VarDeclStmt",
            "varType": "int",
            "name": variable(rng),
            "initializer": int(rng.random_range(0..10)),
        }),
        1 => json!({
            "type": "AssignStmt",
            "target": ident(variable(rng)),
            "operator": "PLUSASSIGN",
            "value": int(rng.random_range(1..5)),
        }),
        2 => json!({
            "type": "ExprStmt",
            "expression": {
                "type": "CallExpr",
                "callee": ident("printf"),
                "arguments": [{ "type": "StringLiteral", "value": "%d\\n" }, ident(variable(rng))],
            }
        }),
        3 => json!({ "type": "ReturnStmt", "value": int(0) }),
        4 => json!({
            "type": "IfStmt",
            "condition": c_condition(rng),
            "thenBranch": short_c_block(rng, 3, inner),
            "elseBranch": if rng.random_bool(0.5) { c_block(rng, 1, inner) } else { Value::Null },
        }),
        5 => json!({ "type": "WhileStmt", "condition": c_condition(rng), "body": c_block(rng, 2, inner) }),
        6 => {
            let var = variable(rng);
            json!({
                "type": "ForStmt",
                "init": { "type": "VarDeclStmt", "varType": "int", "name": var, "initializer": int(0) },
                "condition": { "type": "BinaryOp", "operator": "LT", "left": ident(var), "right": int(rng.random_range(2..20)) },
                "update": { "type": "UnaryOp", "operator": "INCREMENT", "operand": ident(var), "postfix": true },
                "body": c_block(rng, 1, inner),
            })
        }
        7 => json!({ "type": "DoWhileStmt", "body": c_block(rng, 2, inner), "condition": c_condition(rng) }),
        _ => {
            let arms = rng.random_range(1..4);
            let mut cases: Vec<Value> = (0..arms)
                .map(|arm| {
                    json!({
                        "value": int(arm),
                        "statements": [c_statement(rng, inner), { "type": "BreakStmt" }],
                    })
                })
                .collect();
            cases.push(json!({ "isDefault": true, "statements": [c_statement(rng, inner)] }));
            json!({ "type": "SwitchStmt", "expression": ident(variable(rng)), "cases": cases })
        }
    }
}
