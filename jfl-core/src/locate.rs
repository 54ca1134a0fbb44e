//! Emission-point location
//!
//! Finds the tree nodes matching an unwrap path and builds one path-chain
//! proxy per match. The ancestor chain is accumulated top-down during the
//! descent, so no parent pointers are needed on the value type.

use crate::proxy::Proxy;
use jfl_path::error::value_kind;
use jfl_path::{FlError, Result};
use serde_json::Value;

/// Locate the emission points for `unwrap_path` under `root` and return a
/// proxy for each, in document order (property declaration order, then
/// array index order).
///
/// The root must be an object; an empty unwrap path matches the root
/// itself, yielding exactly one emission point.
pub fn locate<'a>(root: &'a Value, unwrap_path: &str) -> Result<Vec<Proxy<'a>>> {
    if root.is_null() {
        return Err(FlError::NullInput);
    }
    if !root.is_object() {
        return Err(FlError::TypeMismatch {
            expected: "object",
            found: value_kind(root),
        });
    }

    let target = normalize(unwrap_path);
    let mut chain = Vec::new();
    let mut proxies = Vec::new();
    descend(root, "/", &target, &mut chain, &mut proxies);
    Ok(proxies)
}

/// Canonical `/a/b/` form: leading and trailing slash, duplicate and empty
/// segments removed. The empty path normalizes to `/`.
fn normalize(unwrap_path: &str) -> String {
    let mut normalized = String::from("/");
    for segment in unwrap_path.split('/').filter(|s| !s.is_empty()) {
        normalized.push_str(segment);
        normalized.push('/');
    }
    normalized
}

fn descend<'a>(
    node: &'a Value,
    simple_path: &str,
    target: &str,
    chain: &mut Vec<(&'a str, &'a Value)>,
    proxies: &mut Vec<Proxy<'a>>,
) {
    if simple_path == target {
        // Matching an array unwraps it: one emission point per element.
        match node {
            Value::Array(items) => {
                proxies.extend(items.iter().map(|item| Proxy::from_chain(chain, item)));
            }
            _ => proxies.push(Proxy::from_chain(chain, node)),
        }
        return;
    }

    match node {
        Value::Object(map) => {
            for (key, child) in map {
                chain.push((key.as_str(), node));
                let child_path = format!("{simple_path}{key}/");
                descend(child, &child_path, target, chain, proxies);
                chain.pop();
            }
        }
        // Arrays are transparent to path matching: they consume no segment
        // and add no chain entry.
        Value::Array(items) => {
            for item in items {
                descend(item, simple_path, target, chain, proxies);
            }
        }
        _ => {}
    }
}
