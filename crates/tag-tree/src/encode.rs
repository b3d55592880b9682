//! Attribute view → tag tree.

use crate::error::ConvertError;
use crate::options::{ConverterOptions, ListKindPolicy};
use crate::tag::{CompoundMap, Tag, TagKind};
use crate::view::{AttributeView, ToView, Value};

/// Recursive encoder. Each call returns a freshly built subtree; parents take
/// ownership of their children, so sibling subtrees never alias.
pub struct Encoder<'a> {
    options: &'a ConverterOptions,
}

impl<'a> Encoder<'a> {
    pub fn new(options: &'a ConverterOptions) -> Self {
        Self { options }
    }

    pub fn encode(&self, value: &Value) -> Result<Tag, ConvertError> {
        self.encode_at(value, 0)
    }

    /// Encodes a view; the result is always a `Compound`.
    pub fn encode_view(&self, view: &AttributeView) -> Result<Tag, ConvertError> {
        self.view_at(view, 0)
    }

    /// Encodes any self-describing object through its canonical view.
    pub fn encode_object(&self, object: &dyn ToView) -> Result<Tag, ConvertError> {
        self.view_at(&object.to_view(), 0)
    }

    fn encode_at(&self, value: &Value, depth: usize) -> Result<Tag, ConvertError> {
        self.check_depth(depth)?;
        let tag = match value {
            Value::Nil => Tag::End,
            Value::Byte(v) => Tag::Byte(*v),
            Value::Short(v) => Tag::Short(*v),
            Value::Int(v) => Tag::Int(*v),
            Value::Long(v) => Tag::Long(*v),
            Value::Float(v) => Tag::Float(*v),
            Value::Double(v) => Tag::Double(*v),
            Value::String(s) => Tag::String(s.clone()),
            Value::IntArray(items) => Tag::IntArray(items.clone()),
            Value::ByteArray(items) => Tag::ByteArray(items.clone()),
            Value::View(view) => self.view_at(view, depth)?,
            Value::Serializable(object) => self.view_at(&object.to_view(), depth)?,
            Value::Map(entries) => {
                let mut map = CompoundMap::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key.to_string(), self.encode_at(value, depth + 1)?);
                }
                Tag::Compound(map)
            }
            Value::List(items) => self.list_at(items, depth)?,
            Value::Bool(_) | Value::Char(_) | Value::Any(_) => {
                return Err(ConvertError::unsupported(value.type_name()));
            }
        };
        Ok(tag)
    }

    fn view_at(&self, view: &AttributeView, depth: usize) -> Result<Tag, ConvertError> {
        let entries = view.values(false);
        let mut map = CompoundMap::with_capacity(entries.len());
        for (path, value) in entries {
            map.insert(path.to_string(), self.encode_at(value, depth + 1)?);
        }
        Ok(Tag::Compound(map))
    }

    fn list_at(&self, items: &[Value], depth: usize) -> Result<Tag, ConvertError> {
        let mut tags = Vec::with_capacity(items.len());
        for item in items {
            tags.push(self.encode_at(item, depth + 1)?);
        }
        let kind = tags.first().map_or(TagKind::End, Tag::kind);
        let mismatch = tags
            .iter()
            .enumerate()
            .find(|(_, tag)| tag.kind() != kind)
            .map(|(index, tag)| (index, tag.kind()));
        if let Some((index, found)) = mismatch {
            match self.options.list_kinds {
                ListKindPolicy::Strict => {
                    return Err(ConvertError::HeterogeneousList {
                        index,
                        expected: kind,
                        found,
                    });
                }
                ListKindPolicy::Permissive => {
                    log::warn!(
                        "list declared as {kind} holds a {found} at index {index}; keeping first element kind"
                    );
                }
            }
        }
        Ok(Tag::List(kind, tags))
    }

    fn check_depth(&self, depth: usize) -> Result<(), ConvertError> {
        if depth > self.options.max_depth {
            return Err(ConvertError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }
}
