//! Path-chain proxies
//!
//! A proxy is the root-to-emission-point chain of object hops recorded by
//! the locator. It answers arbitrary sub-path queries in O(chain length)
//! without flattening the subtree, which is the whole reason it exists.

use jfl_path::Path;
use serde_json::Value;
use smallvec::SmallVec;

/// One hop of the chain: an ancestor object and the property that was
/// followed to reach the next hop. The final item carries the emission
/// point itself and no key. Arrays never appear as containers; they are
/// absorbed between object hops.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChainItem<'a> {
    pub(crate) next_key: Option<&'a str>,
    pub(crate) container: &'a Value,
}

/// A lazy root-to-emission-point view over one output record.
#[derive(Debug, Clone)]
pub struct Proxy<'a> {
    pub(crate) items: SmallVec<[ChainItem<'a>; 10]>,
}

impl<'a> Proxy<'a> {
    /// Build a proxy from the locator's accumulated (key, ancestor object)
    /// chain plus the emission point it reached.
    pub(crate) fn from_chain(chain: &[(&'a str, &'a Value)], emission_point: &'a Value) -> Self {
        let mut items: SmallVec<[ChainItem<'a>; 10]> = chain
            .iter()
            .map(|&(key, container)| ChainItem {
                next_key: Some(key),
                container,
            })
            .collect();
        items.push(ChainItem {
            next_key: None,
            container: emission_point,
        });
        Self { items }
    }

    /// The node this record was emitted for.
    pub fn emission_point(&self) -> &'a Value {
        // The chain always ends with the emission point item.
        self.items[self.items.len() - 1].container
    }

    /// Number of object-boundary hops from the root to the emission point.
    pub fn depth(&self) -> usize {
        self.items.len() - 1
    }

    /// Resolve a `/`-delimited query path against this record. Segments may
    /// carry index qualifiers (`objs[0]`, `a[0][1]`) selecting specific
    /// array elements. Returns `None` when any segment is absent.
    pub fn get_by_path(&self, path: &str) -> Option<&'a Value> {
        self.get(&Path::parse(path))
    }

    /// Resolve a parsed query path. Chain hops are matched against the
    /// query segments; at the first divergence the remaining segments are
    /// looked up structurally from that hop's container. Equivalent to
    /// flattening fully and looking the key up, without building the map.
    pub fn get(&self, path: &Path) -> Option<&'a Value> {
        let segments = path.segments();
        for (i, item) in self.items.iter().enumerate() {
            let matches = match item.next_key {
                Some(next_key) if i < segments.len() => segments[i] == next_key,
                _ => false,
            };
            if !matches {
                return lookup(item.container, &segments[i..]);
            }
        }
        None
    }
}

/// Direct structural lookup of `segments` starting at `container`.
fn lookup<'a>(container: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let mut current = container;
    for segment in segments {
        let (name, indices) = parse_segment(segment)?;
        if !name.is_empty() {
            current = current.as_object()?.get(name)?;
        }
        for idx in indices {
            current = current.as_array()?.get(idx)?;
        }
    }
    Some(current)
}

/// Split a query segment into its name and trailing `[i]` qualifiers.
/// Malformed qualifiers resolve to nothing rather than erroring, matching
/// the absent-path contract.
fn parse_segment(segment: &str) -> Option<(&str, SmallVec<[usize; 2]>)> {
    let name_end = segment.find('[').unwrap_or(segment.len());
    let name = &segment[..name_end];

    let mut indices = SmallVec::new();
    let mut rest = &segment[name_end..];
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return None;
        }
        let close = rest.find(']')?;
        let idx: usize = rest[1..close].parse().ok()?;
        indices.push(idx);
        rest = &rest[close + 1..];
    }
    Some((name, indices))
}
