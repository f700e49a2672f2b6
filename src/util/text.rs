//! Tokenizing and quoting configuration lines

use std::borrow::Cow;

/// Start of a comment when it begins a token outside quotes
const COMMENT: char = '#';

/// Split a configuration line into tokens
///
/// Tokens are separated by whitespace. A double-quoted section may contain
/// whitespace and the escapes `\"`, `\\`, `\n`, `\t` and `\r`; any other escaped
/// character is kept as is. A `#` at the start of an unquoted token comments
/// out the rest of the line. An unterminated quote runs to the end of the line.
pub fn tokenize_quoted(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.peek() {
            None | Some(&COMMENT) => break,
            Some(_) => {}
        }

        let mut token = String::new();
        let mut in_quotes = false;
        while let Some(c) = chars.next() {
            match c {
                '"' => in_quotes = !in_quotes,
                '\\' if in_quotes => match chars.next() {
                    Some('n') => token.push('\n'),
                    Some('t') => token.push('\t'),
                    Some('r') => token.push('\r'),
                    Some(other) => token.push(other),
                    None => token.push('\\'),
                },
                c if c.is_whitespace() && !in_quotes => break,
                c => token.push(c),
            }
        }
        tokens.push(token);
    }

    tokens
}

fn needs_quoting(token: &str) -> bool {
    token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\\' | COMMENT))
}

/// Quote a token so that [`tokenize_quoted`] reads it back unchanged
///
/// Plain tokens are returned as they are.
pub fn quote(token: &str) -> Cow<'_, str> {
    if !needs_quoting(token) {
        return Cow::Borrowed(token);
    }

    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push('"');
    for c in token.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
