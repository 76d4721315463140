//! Single-pass scanner for `${...}` placeholders.

use std::mem;

use crate::parts::{Content, Part, PartSequence};

/// Split an attribute or text-node value into literal and embedded-expression
/// fragments.
///
/// Returns [`Content::Static`] when the value contains no unescaped `${`; the
/// carried text has escape sequences reduced and is the final static value.
/// Otherwise returns [`Content::Interpolated`] with parts alternating
/// literal/expression, starting and ending on a literal.
///
/// Escaping is processed left to right with one character of lookahead:
/// `\${x}` yields the literal text `${x}`, while `\\${x}` keeps both
/// backslashes and still opens a placeholder (the first backslash escapes
/// only the second). Inside a placeholder nothing but brace depth is tracked,
/// so a `}` closing an object literal does not end the placeholder early;
/// quote characters get no special treatment.
///
/// A placeholder still open at end of input folds back into literal text.
/// The scanner is total: it never fails and never panics.
pub fn scan(source: &str) -> Content {
    // Without a dollar sign there can be neither a placeholder nor a `\$`
    // escape, so the text passes through untouched.
    if !source.contains('$') {
        return Content::Static(source.to_owned());
    }

    let mut parts: Vec<Part> = Vec::new();
    let mut literal = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.peek() {
                // An escaped backslash keeps both characters and strips the
                // pair of any further escaping power.
                Some('\\') => {
                    chars.next();
                    literal.push_str("\\\\");
                }
                // An escaped delimiter: drop the backslash, keep the dollar.
                // A `{` that follows is an ordinary literal character.
                Some('$') => {
                    chars.next();
                    literal.push('$');
                }
                _ => literal.push('\\'),
            },
            '$' if matches!(chars.peek(), Some('{')) => {
                chars.next();
                let mut expression = String::new();
                let mut depth = 0usize;
                let mut closed = false;
                while let Some(ch) = chars.next() {
                    match ch {
                        '{' => {
                            depth += 1;
                            expression.push(ch);
                        }
                        '}' if depth > 0 => {
                            depth -= 1;
                            expression.push(ch);
                        }
                        '}' => {
                            closed = true;
                            break;
                        }
                        _ => expression.push(ch),
                    }
                }
                if closed {
                    parts.push(Part::Literal(mem::take(&mut literal)));
                    parts.push(Part::Expression(expression));
                } else {
                    // Ran out of input inside the placeholder: fold the whole
                    // tail back into literal text instead of failing.
                    literal.push_str("${");
                    literal.push_str(&expression);
                }
            }
            _ => literal.push(ch),
        }
    }

    if parts.is_empty() {
        return Content::Static(literal);
    }
    parts.push(Part::Literal(literal));
    Content::Interpolated(PartSequence::from_parts(parts))
}
