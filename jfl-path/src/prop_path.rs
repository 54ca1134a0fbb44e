//! Index-aware traversal paths

use smallvec::SmallVec;
use std::fmt;

/// One segment of a [`PropPath`]: a property name plus the array indices
/// attached to it. Arrays do not introduce segments of their own; an index
/// always qualifies the name that preceded the array, and nested arrays
/// stack indices on the same segment (`a[0][1]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropPathPart {
    /// Property name of this segment.
    pub name: String,
    /// Array indices attached to the name, outermost first.
    pub indices: SmallVec<[usize; 2]>,
}

impl fmt::Display for PropPathPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for idx in &self.indices {
            write!(f, "[{}]", idx)?;
        }
        Ok(())
    }
}

/// A path accumulated while descending the tree. Immutable: `append` and
/// `append_index` return new values, so sibling branches of the traversal
/// never observe each other's extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropPath {
    parts: SmallVec<[PropPathPart; 10]>,
}

impl PropPath {
    /// The empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new path with `name` appended as a fresh segment.
    pub fn append(&self, name: &str) -> Self {
        let mut parts = self.parts.clone();
        parts.push(PropPathPart {
            name: name.to_string(),
            indices: SmallVec::new(),
        });
        Self { parts }
    }

    /// Return a new path with an array index attached to the current last
    /// segment. With no last segment the index starts one with an empty
    /// name; the engine never produces that case since a document root is
    /// always an object.
    pub fn append_index(&self, index: usize) -> Self {
        let mut parts = self.parts.clone();
        match parts.last_mut() {
            Some(part) => part.indices.push(index),
            None => {
                let mut indices = SmallVec::new();
                indices.push(index);
                parts.push(PropPathPart {
                    name: String::new(),
                    indices,
                });
            }
        }
        Self { parts }
    }

    /// The index-stripped, `/`-joined form, used to compare structural
    /// position against an unwrap path.
    pub fn simple_path(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// The ordered parts.
    pub fn parts(&self) -> &[PropPathPart] {
        &self.parts
    }

    /// True for the empty path.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for PropPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}
