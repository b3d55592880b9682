//! Dot-separated composite paths into an [`AttributeView`](super::AttributeView).

use std::fmt;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// A composite path: an ordered list of flat key segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DataPath {
    segments: Vec<String>,
}

impl DataPath {
    /// Parse a dotted path.
    ///
    /// Examples:
    /// - `"" -> []`
    /// - `"a" -> ["a"]`
    /// - `"a.b.c" -> ["a", "b", "c"]`
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::default();
        }
        Self {
            segments: path.split(SEPARATOR).map(str::to_owned).collect(),
        }
    }

    /// A single-segment path. The segment is taken verbatim, dots included.
    pub fn of(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Splits off the last segment.
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.segments
            .split_last()
            .map(|(last, parents)| (last.as_str(), parents))
    }

    /// A new path with `segment` appended.
    pub fn then(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Joins the segments with `sep`.
    pub fn as_string(&self, sep: char) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(sep);
            }
            out.push_str(segment);
        }
        out
    }
}

impl fmt::Display for DataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string(SEPARATOR))
    }
}

impl From<&str> for DataPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}
