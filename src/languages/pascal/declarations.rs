/// Whether a constant-section entry is a real constant (`name: type = value` or
/// `name = value`) rather than an assignment the SPR producer filed there.
pub fn is_constant_form(text: &str) -> bool {
    if text.contains(":=") {
        return false;
    }
    let Some((lhs, rhs)) = text.split_once('=') else {
        return false;
    };
    if rhs.trim().trim_end_matches(';').trim().is_empty() {
        return false;
    }
    let name = match lhs.split_once(':') {
        Some((name, type_name)) => {
            if type_name.trim().is_empty() {
                return false;
            }
            name
        }
        None => lhs,
    };
    is_identifier(name.trim())
}

/// The routine name in a `function`/`procedure` header, e.g. `Add` in
/// `function Add(a, b: integer): integer`.
pub fn routine_name(declaration: &str) -> &str {
    let rest = declaration.trim_start();
    let rest = ["function", "procedure"]
        .iter()
        .find_map(|keyword| strip_keyword(rest, keyword))
        .unwrap_or(rest)
        .trim_start();
    let end = rest
        .char_indices()
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '_' || c == '.'))
        .map_or(rest.len(), |(i, _)| i);
    &rest[..end]
}

/// Trims whitespace and a trailing `;` from statement text.
pub fn statement_text(text: &str) -> &str {
    text.trim().trim_end_matches(';').trim_end()
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &text[keyword.len()..];
    rest.starts_with(char::is_whitespace).then_some(rest)
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
