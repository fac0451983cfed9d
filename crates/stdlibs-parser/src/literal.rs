//! Evaluation of simple Python string literals.

/// Evaluate the source text of a simple string literal to its value.
///
/// Handles `r`/`u` prefixes in either case, single/double/triple quoting and
/// Python escape sequences. Returns `None` for anything that is not a simple
/// text literal: f-strings, byte strings, and malformed quoting.
#[must_use]
pub fn evaluate_string_literal(text: &str) -> Option<String> {
    let quote_at = text.find(['\'', '"'])?;
    let raw = match text[..quote_at].to_ascii_lowercase().as_str() {
        "" | "u" => false,
        "r" => true,
        _ => return None,
    };

    let quoted = &text[quote_at..];
    let body = ["\"\"\"", "'''", "\"", "'"].into_iter().find_map(|q| {
        quoted
            .strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
            .filter(|_| quoted.len() >= 2 * q.len())
    })?;

    Some(if raw { body.to_string() } else { unescape(body) })
}

fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };
        match next {
            '\n' => {}
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            '\\' | '\'' | '"' => out.push(next),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let mut digits = String::from(next);
                while digits.len() < 3 {
                    match chars.next_if(|d| ('0'..='7').contains(d)) {
                        Some(d) => digits.push(d),
                        None => break,
                    }
                }
                push_code_point(&mut out, &digits, 8, next);
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let mut digits = String::new();
                while digits.len() < width {
                    match chars.next_if(char::is_ascii_hexdigit) {
                        Some(d) => digits.push(d),
                        None => break,
                    }
                }
                if digits.len() == width {
                    push_code_point(&mut out, &digits, 16, next);
                } else {
                    out.push('\\');
                    out.push(next);
                    out.push_str(&digits);
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}

fn push_code_point(out: &mut String, digits: &str, radix: u32, escape: char) {
    match u32::from_str_radix(digits, radix).ok().and_then(char::from_u32) {
        Some(c) => out.push(c),
        None => {
            out.push('\\');
            if radix == 16 {
                out.push(escape);
            }
            out.push_str(digits);
        }
    }
}
