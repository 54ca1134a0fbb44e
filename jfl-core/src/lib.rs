//! JFL Core - Traversal and resolution engine
//!
//! This crate turns a nested JSON tree into flat key→value records:
//!
//! - Emission-point location for a given unwrap path
//! - Path-chain proxies for O(depth) targeted lookups
//! - Flattening a proxy into an insertion-ordered map
//!
//! The input tree is a `serde_json::Value` (with `preserve_order`, so
//! object property order survives end to end) and is never mutated;
//! proxies and flat maps borrow from it.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod flatten;
pub mod locate;
pub mod proxy;

// Re-export commonly used types
pub use flatten::FlatMap;
pub use jfl_path::{FlError, Path, PropPath, Result};
pub use proxy::Proxy;

use serde_json::Value;

/// Locate the emission points for `unwrap_path` and return one path-chain
/// proxy per point, in document order.
pub fn flatten_to_proxies<'a>(root: &'a Value, unwrap_path: &str) -> Result<Vec<Proxy<'a>>> {
    locate::locate(root, unwrap_path)
}

/// Flatten `root` against `unwrap_path`, returning one flat map per
/// emission point, in document order.
pub fn flatten_to_maps<'a>(root: &'a Value, unwrap_path: &str) -> Result<Vec<FlatMap<'a>>> {
    Ok(locate::locate(root, unwrap_path)?
        .iter()
        .map(Proxy::flatten)
        .collect())
}

/// Flatten the whole document into a single flat map (no unwrapping).
pub fn flatten_to_map(root: &Value) -> Result<FlatMap<'_>> {
    let mut proxies = locate::locate(root, "")?;
    match proxies.len() {
        1 => Ok(proxies.remove(0).flatten()),
        n => Err(FlError::InvalidEmissionCount(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_to_map_is_single_whole_document_record() {
        let doc = json!({"name": "value", "obj": {"n1": 1}});
        let map = flatten_to_map(&doc).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["name"], &json!("value"));
        assert_eq!(map["obj/n1"], &json!(1));
    }

    #[test]
    fn test_null_root_is_rejected() {
        assert!(matches!(
            flatten_to_map(&Value::Null),
            Err(FlError::NullInput)
        ));
    }
}
