//! Flattening proxies into ordered key→value maps

use crate::proxy::Proxy;
use indexmap::IndexMap;
use jfl_path::PropPath;
use serde_json::Value;

/// A flattened record: canonical path string → leaf scalar, in traversal
/// order (pre-order, property declaration order, then array index order).
pub type FlatMap<'a> = IndexMap<String, &'a Value>;

impl<'a> Proxy<'a> {
    /// Flatten this record into a [`FlatMap`].
    ///
    /// Walks the chain root-to-leaf: at every hop the siblings of the
    /// followed property are flattened in full (the ancestor context), and
    /// the emission point's own subtree is flattened last. The followed
    /// branch itself is skipped at each hop, so nothing is emitted twice.
    pub fn flatten(&self) -> FlatMap<'a> {
        let mut out = FlatMap::new();
        let mut current = PropPath::new();
        for item in &self.items {
            match item.next_key {
                Some(key) => {
                    fill_from_value(item.container, &current, Some(key), &mut out);
                    current = current.append(key);
                }
                None => fill_from_value(item.container, &current, None, &mut out),
            }
        }
        out
    }
}

/// Recursively flatten `value` at `path` into `out`. Objects expand to
/// `path/prop`, arrays attach an index to the last segment, scalars
/// terminate as entries. `skip_property` excludes one property at the top
/// level only (the chain hop already followed).
fn fill_from_value<'a>(
    value: &'a Value,
    path: &PropPath,
    skip_property: Option<&str>,
    out: &mut FlatMap<'a>,
) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if skip_property == Some(key.as_str()) {
                    continue;
                }
                fill_from_value(child, &path.append(key), None, out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                fill_from_value(child, &path.append_index(i), None, out);
            }
        }
        scalar => {
            out.insert(path.to_string(), scalar);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::locate;
    use serde_json::json;

    fn flatten_one<'a>(doc: &'a Value, unwrap_path: &str) -> FlatMap<'a> {
        let proxies = locate(doc, unwrap_path).unwrap();
        assert_eq!(proxies.len(), 1);
        proxies[0].flatten()
    }

    #[test]
    fn test_scalars_keep_declaration_order() {
        let doc = json!({"name1": "value1", "name2": "value2"});
        let map = flatten_one(&doc, "");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["name1", "name2"]);
    }

    #[test]
    fn test_nested_object_expands_with_slash() {
        let doc = json!({"name": "value", "obj": {"n1": 1}});
        let map = flatten_one(&doc, "");
        assert_eq!(map["name"], &json!("value"));
        assert_eq!(map["obj/n1"], &json!(1));
    }

    #[test]
    fn test_array_index_attaches_to_preceding_name() {
        let doc = json!({"objs": [{"n1": 3}, {"n1": 4}]});
        let map = flatten_one(&doc, "");
        assert_eq!(map["objs[0]/n1"], &json!(3));
        assert_eq!(map["objs[1]/n1"], &json!(4));
    }

    #[test]
    fn test_nested_arrays_stack_indices() {
        let doc = json!({"a": [[1, 2], [3]]});
        let map = flatten_one(&doc, "");
        let entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(
            entries,
            vec![
                ("a[0][0]", &json!(1)),
                ("a[0][1]", &json!(2)),
                ("a[1][0]", &json!(3)),
            ]
        );
    }

    #[test]
    fn test_unwrapped_scalar_element_keyed_by_its_path() {
        let doc = json!({"name": "value", "tags": ["x", "y"]});
        let maps: Vec<_> = locate(&doc, "tags")
            .unwrap()
            .iter()
            .map(Proxy::flatten)
            .collect();
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[0]["name"], &json!("value"));
        assert_eq!(maps[0]["tags"], &json!("x"));
        assert_eq!(maps[1]["tags"], &json!("y"));
    }

    #[test]
    fn test_null_and_bool_leaves_are_kept() {
        let doc = json!({"a": null, "b": false});
        let map = flatten_one(&doc, "");
        assert_eq!(map["a"], &json!(null));
        assert_eq!(map["b"], &json!(false));
    }

    #[test]
    fn test_followed_branch_not_duplicated() {
        let doc = json!({"name": "value", "objs": [{"n1": 1}]});
        let proxies = locate(&doc, "objs").unwrap();
        let map = proxies[0].flatten();
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["name", "objs/n1"]);
    }
}
