//! Named-tag tree model.
//!
//! A [`Tag`] is one node of the tree. Compounds hold flat string keys, lists
//! declare a single [`TagKind`] for their elements.

use std::fmt;

use indexmap::IndexMap;

/// Compound payload: flat key segment to child tag.
pub type CompoundMap = IndexMap<String, Tag>;

/// Kind of a tag, without its payload.
///
/// Discriminants follow the conventional named-tag ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TagKind {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
}

impl TagKind {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            TagKind::End => "End",
            TagKind::Byte => "Byte",
            TagKind::Short => "Short",
            TagKind::Int => "Int",
            TagKind::Long => "Long",
            TagKind::Float => "Float",
            TagKind::Double => "Double",
            TagKind::ByteArray => "ByteArray",
            TagKind::String => "String",
            TagKind::List => "List",
            TagKind::Compound => "Compound",
            TagKind::IntArray => "IntArray",
        }
    }
}

impl TryFrom<u8> for TagKind {
    type Error = u8;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => TagKind::End,
            1 => TagKind::Byte,
            2 => TagKind::Short,
            3 => TagKind::Int,
            4 => TagKind::Long,
            5 => TagKind::Float,
            6 => TagKind::Double,
            7 => TagKind::ByteArray,
            8 => TagKind::String,
            9 => TagKind::List,
            10 => TagKind::Compound,
            11 => TagKind::IntArray,
            other => return Err(other),
        })
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of a tag tree.
///
/// `List` carries its declared element kind separately from its elements;
/// nothing here checks that the elements agree with it.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    List(TagKind, Vec<Tag>),
    Compound(CompoundMap),
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::End => TagKind::End,
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::String(_) => TagKind::String,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::List(..) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
        }
    }

    /// An empty list, declared with the `End` element kind.
    pub fn empty_list() -> Self {
        Tag::List(TagKind::End, Vec::new())
    }

    pub fn empty_compound() -> Self {
        Tag::Compound(CompoundMap::new())
    }

    /// Builds a compound from `(key, tag)` pairs, keeping their order.
    pub fn compound<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Tag)>,
    {
        Tag::Compound(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Tag::Compound(_))
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Tag::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Tag::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Tag::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Tag::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Tag::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Tag::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<(TagKind, &[Tag])> {
        match self {
            Tag::List(kind, items) => Some((*kind, items)),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundMap> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a direct child of a compound. Keys are flat; no path splitting.
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.as_compound().and_then(|map| map.get(key))
    }

    /// Whether every list in this subtree holds only elements of its
    /// declared kind.
    pub fn is_homogeneous(&self) -> bool {
        match self {
            Tag::List(kind, items) => items
                .iter()
                .all(|item| item.kind() == *kind && item.is_homogeneous()),
            Tag::Compound(map) => map.values().all(Tag::is_homogeneous),
            _ => true,
        }
    }
}
