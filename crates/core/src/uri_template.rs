//! Expansion of the RFC 6570 URI templates used by the Graph OpenAPI description.
//!
//! Only the operators the generated templates use are supported: simple
//! (`{var}`), reserved (`{+var}`) and form-style query (`{?a,b}`, `{&a,b}`).
//! Variable names are matched literally, so `%24select` and
//! `namedLocation%2Did` are ordinary keys.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::error::{GraphError, GraphResult};

pub type PathParameters = BTreeMap<String, String>;
pub type QueryMap = BTreeMap<String, QueryValue>;

/// A query parameter value. Lists expand comma-separated.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    String(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
}

impl QueryValue {
    fn encode(&self, reserved: bool) -> String {
        let enc = |s: &str| {
            if reserved {
                encode_reserved(s)
            } else {
                urlencoding::encode(s).into_owned()
            }
        };
        match self {
            Self::String(s) => enc(s),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::List(items) => items.iter().map(|s| enc(s)).collect::<Vec<_>>().join(","),
        }
    }

    fn is_defined(&self) -> bool {
        !matches!(self, Self::List(items) if items.is_empty())
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Expand `template` against the given path and query parameters.
pub fn expand(template: &str, path: &PathParameters, query: &QueryMap) -> GraphResult<String> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| GraphError::InvalidTemplate {
            template: template.to_string(),
            reason: format!("unterminated expression at offset {start}"),
        })?;
        expand_expression(&after[..end], path, query, &mut out).map_err(|reason| {
            GraphError::InvalidTemplate {
                template: template.to_string(),
                reason,
            }
        })?;
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn expand_expression(
    expr: &str,
    path: &PathParameters,
    query: &QueryMap,
    out: &mut String,
) -> Result<(), String> {
    if expr.is_empty() {
        return Err("empty expression".into());
    }

    let (op, vars) = match expr.as_bytes()[0] {
        b'+' | b'?' | b'&' => (Some(expr.as_bytes()[0]), &expr[1..]),
        b'#' | b'.' | b'/' | b';' => {
            return Err(format!("unsupported operator in '{{{expr}}}'"));
        }
        _ => (None, expr),
    };

    match op {
        Some(b'?') | Some(b'&') => {
            let pairs: Vec<String> = vars
                .split(',')
                .filter_map(|name| {
                    lookup(name, query, path)
                        .filter(|v| v.is_defined())
                        .map(|v| format!("{name}={}", v.encode(false)))
                })
                .collect();
            if !pairs.is_empty() {
                out.push(if op == Some(b'?') { '?' } else { '&' });
                out.push_str(&pairs.join("&"));
            }
        }
        _ => {
            let reserved = op == Some(b'+');
            let values: Vec<String> = vars
                .split(',')
                .filter_map(|name| lookup(name, query, path))
                .filter(|v| v.is_defined())
                .map(|v| v.encode(reserved))
                .collect();
            out.push_str(&values.join(","));
        }
    }
    Ok(())
}

fn lookup(name: &str, query: &QueryMap, path: &PathParameters) -> Option<QueryValue> {
    query
        .get(name)
        .cloned()
        .or_else(|| path.get(name).map(|v| QueryValue::String(v.clone())))
}

/// Reserved expansion keeps unreserved and reserved characters plus existing
/// pct-encoded triplets, and encodes everything else.
fn encode_reserved(value: &str) -> String {
    const RESERVED: &str = ":/?#[]@!$&'()*+,;=%";
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() || "-._~".contains(ch) || RESERVED.contains(ch) {
            out.push(ch);
        } else {
            let mut buf = [0u8; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
