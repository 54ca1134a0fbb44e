//! Slash-delimited field paths

use std::fmt;

/// A declared field path: an ordered sequence of segment names parsed from
/// a `/`-delimited literal. Empty segments are removed, so `"a//b/"` and
/// `"a/b"` name the same path. There is no escaping mechanism for segment
/// names containing `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parse a path from a `/`-delimited literal.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// The ordered segment names.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True for the empty (root) path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path::parse(path)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_drops_empty_segments() {
        assert_eq!(Path::parse("a/b"), Path::parse("/a//b/"));
        assert_eq!(Path::parse("a/b").segments(), &["a", "b"]);
    }

    #[test]
    fn test_empty_path() {
        assert!(Path::parse("").is_empty());
        assert!(Path::parse("/").is_empty());
        assert_eq!(Path::parse("").to_string(), "");
    }

    #[test]
    fn test_display_round_trip() {
        let path = Path::parse("sub/objs/n1");
        assert_eq!(path.to_string(), "sub/objs/n1");
        assert_eq!(Path::parse(&path.to_string()), path);
    }

    proptest! {
        #[test]
        fn prop_parse_display_round_trip(segments in prop::collection::vec("[a-z][a-z0-9_]{0,7}", 0..6)) {
            let literal = segments.join("/");
            let path = Path::parse(&literal);
            prop_assert_eq!(path.segments(), segments.as_slice());
            prop_assert_eq!(Path::parse(&path.to_string()), path);
        }

        #[test]
        fn prop_slash_noise_is_ignored(segments in prop::collection::vec("[a-z]{1,5}", 1..5)) {
            let noisy = format!("//{}//", segments.join("//"));
            prop_assert_eq!(Path::parse(&noisy), Path::parse(&segments.join("/")));
        }
    }
}
