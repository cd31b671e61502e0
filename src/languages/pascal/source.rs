use crate::program::{Statement, FunctionDecl};

const INDENT: &str = "  ";

/// Reconstructs a routine declaration and its body as Pascal source.
pub fn routine_source(declaration: &str, body: Option<&[Statement]>) -> String {
    let mut out = String::new();
    out.push_str(declaration);
    out.push_str(";\n");
    if let Some(body) = body {
        out.push_str("begin\n");
        write_block(&mut out, body, 1);
        out.push_str("end;");
    }
    out.trim_end().to_string()
}

fn write_block(out: &mut String, statements: &[Statement], depth: usize) {
    for statement in statements {
        write_statement(out, statement, depth);
    }
}

fn write_compound(out: &mut String, statements: &[Statement], depth: usize, terminator: &str) {
    line(out, depth, "begin");
    write_block(out, statements, depth + 1);
    line(out, depth, &format!("end{}", terminator));
}

fn write_statement(out: &mut String, statement: &Statement, depth: usize) {
    match statement {
        Statement::Action { code, .. } => line(out, depth, &format!("{};", code)),
        Statement::If {
            code,
            then_block,
            else_block,
            ..
        } => {
            line(out, depth, code);
            match else_block {
                Some(else_block) => {
                    write_compound(out, then_block, depth, "");
                    line(out, depth, "else");
                    write_compound(out, else_block, depth, ";");
                }
                None => write_compound(out, then_block, depth, ";"),
            }
        }
        Statement::Loop { code, body, .. } => {
            line(out, depth, code);
            write_compound(out, body, depth, ";");
        }
        Statement::PostTestLoop { code, body, .. } => {
            line(out, depth, "repeat");
            write_block(out, body, depth + 1);
            line(out, depth, &format!("{};", code));
        }
        Statement::Switch { code, branches, .. } => {
            line(out, depth, code);
            for branch in branches {
                if branch.label == "else" {
                    line(out, depth + 1, "else");
                } else {
                    line(out, depth + 1, &format!("{}:", branch.label.replace(' ', ", ")));
                }
                write_compound(out, &branch.body, depth + 1, ";");
            }
            line(out, depth, "end;");
        }
        Statement::Function(FunctionDecl { code, body, .. }) => {
            for source_line in routine_source(code, body.as_deref()).lines() {
                line(out, depth, source_line);
            }
        }
        Statement::Block(block) => write_compound(out, block, depth, ";"),
        Statement::Skip => {}
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}
