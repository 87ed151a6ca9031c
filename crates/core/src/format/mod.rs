//! Token substitution for message templates.
//!
//! A placeholder is `{name}` or `{name:spec}`, where `name` starts with a
//! letter or underscore. Whitespace inside the braces is ignored and names
//! match tokens case-insensitively. `{{` and `}}` are escapes and pass
//! through verbatim.
//!
//! Formatting is permissive: when any placeholder has no matching token the
//! template is returned unchanged instead of failing.
//!
//! ```rust
//! use outcome_core::format::format;
//! use outcome_core::tokens;
//!
//! let bag = tokens! { monkey = 9.987_654_321, balls = 0.123_456_789 };
//! assert_eq!(format("Hello {monkey:F1} {balls:F2}", Some(&bag)), "Hello 10.0 0.12");
//! ```

mod spec;
mod value;

use std::borrow::Cow;

pub use value::{Token, TokenBag, TokenValue};

/// Substitutes `tokens` into `template`.
///
/// Returns the template unchanged when `tokens` is `None` or when any
/// placeholder cannot be resolved.
pub fn format(template: &str, tokens: Option<&TokenBag>) -> String {
    let Some(tokens) = tokens else {
        return template.to_owned();
    };

    let segments = scan(template);
    let missing: Vec<&str> = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(p) if tokens.get(p.name).is_none() => Some(p.name),
            _ => None,
        })
        .collect();
    if !missing.is_empty() {
        tracing::debug!(template, ?missing, "template references tokens that were not supplied");
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len() + 16);
    for segment in &segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(p) => {
                if let Some(value) = tokens.get(p.name) {
                    out.push_str(&value.render(p.spec));
                }
            }
        }
    }
    out
}

/// Lower-cases the first character of every placeholder name, leaving the
/// rest of the template untouched: `"{PropertyName:F2}"` becomes
/// `"{propertyName:F2}"`.
pub fn lower_camel_case_tokens(template: &str) -> String {
    scan(template)
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => Cow::Borrowed(*text),
            Segment::Placeholder(p) => Cow::Owned(p.lower_camel()),
        })
        .collect()
}

/// Names of the placeholders in `template`, in order of appearance.
pub fn placeholder_names(template: &str) -> Vec<&str> {
    scan(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(p.name),
            Segment::Text(_) => None,
        })
        .collect()
}

// ============================================================================
// SCANNER
// ============================================================================

#[derive(Debug, PartialEq)]
enum Segment<'t> {
    Text(&'t str),
    Placeholder(Placeholder<'t>),
}

#[derive(Debug, PartialEq)]
struct Placeholder<'t> {
    raw: &'t str,
    name: &'t str,
    spec: Option<&'t str>,
    /// Byte offset of `name` within `raw`.
    name_offset: usize,
}

impl Placeholder<'_> {
    fn lower_camel(&self) -> String {
        let mut chars = self.name.chars();
        let Some(first) = chars.next() else {
            return self.raw.to_owned();
        };
        let tail = &self.raw[self.name_offset + first.len_utf8()..];
        let mut out = String::with_capacity(self.raw.len());
        out.push_str(&self.raw[..self.name_offset]);
        out.extend(first.to_lowercase());
        out.push_str(tail);
        out
    }
}

fn scan(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => i += 2,
            b'}' if bytes.get(i + 1) == Some(&b'}') => i += 2,
            b'{' => match parse_placeholder(template, i) {
                Some((placeholder, end)) => {
                    if text_start < i {
                        segments.push(Segment::Text(&template[text_start..i]));
                    }
                    segments.push(Segment::Placeholder(placeholder));
                    i = end;
                    text_start = end;
                }
                None => i += 1,
            },
            _ => i += 1,
        }
    }
    if text_start < template.len() {
        segments.push(Segment::Text(&template[text_start..]));
    }
    segments
}

/// Parses the placeholder opening at byte `open`; returns it with the byte
/// offset just past its closing brace.
fn parse_placeholder(template: &str, open: usize) -> Option<(Placeholder<'_>, usize)> {
    let rest = &template[open + 1..];
    let close = rest.find(['{', '}'])?;
    if rest.as_bytes()[close] != b'}' {
        return None;
    }

    let inner = &rest[..close];
    let body = inner.trim_start();
    let leading = inner.len() - body.len();

    let name_len = body
        .char_indices()
        .take_while(|(i, c)| {
            if *i == 0 {
                c.is_alphabetic() || *c == '_'
            } else {
                c.is_alphanumeric() || *c == '_'
            }
        })
        .last()
        .map(|(i, c)| i + c.len_utf8())?;
    let name = &body[..name_len];

    let after = body[name_len..].trim_start();
    let spec = if let Some(spec) = after.strip_prefix(':') {
        let spec = spec.trim();
        if spec.is_empty() {
            return None;
        }
        Some(spec)
    } else if after.is_empty() {
        None
    } else {
        return None;
    };

    let end = open + 1 + close + 1;
    Some((
        Placeholder {
            raw: &template[open..end],
            name,
            spec,
            name_offset: 1 + leading,
        },
        end,
    ))
}
