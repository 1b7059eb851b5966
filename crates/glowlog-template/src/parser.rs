//! Tokenizer for `{property}` templates.

use crate::token::{Alignment, Destructure, Node, PropertyToken};

/// Splits a template into text and property nodes.
///
/// Never fails: malformed tokens come out as [`Node::Text`].
pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Consumes text up to the next opening brace that is not `{{`.
    fn text_token(&mut self) -> Node {
        let rest = &self.input[self.pos..];
        let mut text = String::new();
        let mut consumed = rest.len();
        let mut chars = rest.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            match ch {
                '{' => {
                    if matches!(chars.peek(), Some((_, '{'))) {
                        chars.next();
                        text.push('{');
                    } else {
                        consumed = idx;
                        break;
                    }
                }
                '}' => {
                    // `}}` collapses to one brace; a lone `}` is kept as-is
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                    }
                    text.push('}');
                }
                _ => text.push(ch),
            }
        }

        self.pos += consumed;
        Node::Text(text)
    }

    /// Consumes a `{...}` token starting at the current position.
    fn property_token(&mut self) -> Node {
        let start = self.pos;
        let rest = &self.input[start..];

        let mut close = None;
        for (idx, ch) in rest.char_indices().skip(1) {
            match ch {
                '{' => {
                    // Nested opening brace: everything so far is text and
                    // scanning restarts at the new brace.
                    self.pos = start + idx;
                    return degrade(&rest[..idx], "nested opening brace");
                }
                '}' => {
                    close = Some(idx);
                    break;
                }
                _ => {}
            }
        }

        let Some(close) = close else {
            self.pos = self.input.len();
            return degrade(rest, "unterminated token");
        };

        let raw = &rest[..=close];
        self.pos = start + close + 1;

        match parse_token_content(&rest[1..close], raw) {
            Some(token) => Node::Property(token),
            None => degrade(raw, "invalid token content"),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        if rest.starts_with('{') && !rest.starts_with("{{") {
            Some(self.property_token())
        } else {
            Some(self.text_token())
        }
    }
}

fn degrade(text: &str, reason: &'static str) -> Node {
    tracing::trace!(token = text, reason, "template token kept as literal text");
    Node::Text(text.to_string())
}

/// Parses `[@|$]name[,alignment][:format]`.
fn parse_token_content(content: &str, raw: &str) -> Option<PropertyToken> {
    let (hint, body) = match content.as_bytes().first() {
        Some(b'@') => (Some(Destructure::Structure), &content[1..]),
        Some(b'$') => (Some(Destructure::Stringify), &content[1..]),
        _ => (None, content),
    };

    // The format runs to the end of the token, so a comma after the
    // first colon belongs to the format, not the alignment.
    let format_at = body.find(':');
    let align_at = body.find(',');
    let (name, alignment, format) = match (align_at, format_at) {
        (None, None) => (body, None, None),
        (Some(a), Some(f)) if a < f => (&body[..a], Some(&body[a + 1..f]), Some(&body[f + 1..])),
        (Some(a), None) => (&body[..a], Some(&body[a + 1..]), None),
        (_, Some(f)) => (&body[..f], None, Some(&body[f + 1..])),
    };

    if !is_valid_name(name) {
        return None;
    }

    let alignment = match alignment {
        Some(spec) => Some(Alignment::parse(spec)?),
        None => None,
    };

    let format = match format {
        Some(f) if f.is_empty() || f.chars().any(char::is_control) => return None,
        Some(f) => Some(f.to_string()),
        None => None,
    };

    Some(PropertyToken::new(
        name.to_string(),
        hint,
        alignment,
        format,
        raw.to_string(),
    ))
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
