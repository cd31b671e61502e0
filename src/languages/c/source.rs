use super::statement::{CFunction, CStatement, for_header};

const INDENT: &str = "    ";

/// Reconstructs the source text of a whole function declaration.
pub fn function_source(function: &CFunction) -> String {
    let mut out = String::new();
    write_function(&mut out, function, 0);
    out.trim_end().to_string()
}

/// Reconstructs the source text of any statement, without leading indentation.
pub fn statement_source(statement: &CStatement) -> String {
    let mut out = String::new();
    write_statement(&mut out, statement, 0);
    out.trim_end().to_string()
}

fn write_function(out: &mut String, function: &CFunction, depth: usize) {
    indent(out, depth);
    out.push_str(&function.signature());
    match &function.body {
        Some(body) => {
            out.push_str(" {\n");
            write_block(out, body, depth + 1);
            indent(out, depth);
            out.push_str("}\n");
        }
        None => out.push_str(";\n"),
    }
}

fn write_block(out: &mut String, statements: &[CStatement], depth: usize) {
    for statement in statements {
        write_statement(out, statement, depth);
    }
}

fn write_braced(out: &mut String, statements: &[CStatement], depth: usize) {
    out.push_str(" {\n");
    write_block(out, statements, depth + 1);
    indent(out, depth);
    out.push('}');
}

fn write_statement(out: &mut String, statement: &CStatement, depth: usize) {
    match statement {
        CStatement::If {
            condition,
            then_branch,
            else_branch,
        } => {
            indent(out, depth);
            out.push_str(&format!("if ({})", condition));
            write_braced(out, then_branch, depth);
            if let Some(else_branch) = else_branch {
                out.push_str(" else");
                write_braced(out, else_branch, depth);
            }
            out.push('\n');
        }
        CStatement::While { condition, body } => {
            indent(out, depth);
            out.push_str(&format!("while ({})", condition));
            write_braced(out, body, depth);
            out.push('\n');
        }
        CStatement::For {
            init,
            condition,
            update,
            body,
        } => {
            indent(out, depth);
            out.push_str(&format!(
                "for ({})",
                for_header(init.as_deref(), condition, update.as_deref())
            ));
            write_braced(out, body, depth);
            out.push('\n');
        }
        CStatement::DoWhile { body, condition } => {
            indent(out, depth);
            out.push_str("do");
            write_braced(out, body, depth);
            out.push_str(&format!(" while ({});\n", condition));
        }
        CStatement::Switch { selector, cases } => {
            indent(out, depth);
            out.push_str(&format!("switch ({}) {{\n", selector));
            for case in cases {
                indent(out, depth + 1);
                match &case.value {
                    Some(value) => out.push_str(&format!("case {}:\n", value)),
                    None => out.push_str("default:\n"),
                }
                write_block(out, &case.body, depth + 2);
            }
            indent(out, depth);
            out.push_str("}\n");
        }
        CStatement::Function(function) => write_function(out, function, depth),
        CStatement::Block(statements) => {
            indent(out, depth);
            out.push('{');
            out.push('\n');
            write_block(out, statements, depth + 1);
            indent(out, depth);
            out.push_str("}\n");
        }
        CStatement::Struct { name, members } => {
            indent(out, depth);
            out.push_str(&format!("struct {} {{\n", name));
            for member in members {
                indent(out, depth + 1);
                out.push_str(&member.text());
                out.push_str(";\n");
            }
            indent(out, depth);
            out.push_str("};\n");
        }
        CStatement::Preprocessor(directive) => {
            out.push_str(directive.trim());
            out.push('\n');
        }
        CStatement::Unknown(_) => {}
        simple => {
            indent(out, depth);
            out.push_str(&simple.text());
            out.push_str(";\n");
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
