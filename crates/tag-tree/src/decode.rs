//! Tag tree → attribute view.

use crate::error::ConvertError;
use crate::options::{ConverterOptions, NestedCompoundMode};
use crate::tag::Tag;
use crate::view::{AttributeView, Value};

/// Recursive decoder. Compounds become views, lists become sequences and every
/// other tag yields its raw value. Tags are not checked for well-formedness:
/// list elements are decoded one by one whatever the declared kind.
pub struct Decoder<'a> {
    options: &'a ConverterOptions,
}

impl<'a> Decoder<'a> {
    pub fn new(options: &'a ConverterOptions) -> Self {
        Self { options }
    }

    pub fn decode(&self, tag: &Tag) -> Result<Value, ConvertError> {
        self.value_at(tag, 0)
    }

    /// Decodes a compound into a fresh view.
    pub fn decode_view(&self, tag: &Tag) -> Result<AttributeView, ConvertError> {
        let mut view = AttributeView::new();
        self.compound_into(tag, &mut view, 0)?;
        Ok(view)
    }

    /// Merges a compound into `target`. On failure `target` is left untouched.
    pub fn decode_into(&self, tag: &Tag, target: &mut AttributeView) -> Result<(), ConvertError> {
        let mut scratch = target.clone();
        self.compound_into(tag, &mut scratch, 0)?;
        *target = scratch;
        Ok(())
    }

    fn value_at(&self, tag: &Tag, depth: usize) -> Result<Value, ConvertError> {
        self.check_depth(depth)?;
        let value = match tag {
            Tag::Compound(_) => {
                let mut view = AttributeView::new();
                self.compound_into(tag, &mut view, depth)?;
                Value::View(view)
            }
            Tag::List(_, items) => Value::List(
                items
                    .iter()
                    .map(|item| self.value_at(item, depth + 1))
                    .collect::<Result<_, _>>()?,
            ),
            Tag::End => Value::Nil,
            Tag::Byte(v) => Value::Byte(*v),
            Tag::Short(v) => Value::Short(*v),
            Tag::Int(v) => Value::Int(*v),
            Tag::Long(v) => Value::Long(*v),
            Tag::Float(v) => Value::Float(*v),
            Tag::Double(v) => Value::Double(*v),
            Tag::String(s) => Value::String(s.clone()),
            Tag::ByteArray(items) => Value::ByteArray(items.clone()),
            Tag::IntArray(items) => Value::IntArray(items.clone()),
        };
        Ok(value)
    }

    fn compound_into(
        &self,
        tag: &Tag,
        view: &mut AttributeView,
        depth: usize,
    ) -> Result<(), ConvertError> {
        self.check_depth(depth)?;
        let Tag::Compound(map) = tag else {
            return Err(ConvertError::NotACompound { found: tag.kind() });
        };
        for (key, child) in map {
            if child.is_compound() {
                let source = match self.options.nested_compounds {
                    NestedCompoundMode::EntryValue => child,
                    NestedCompoundMode::OuterTag => tag,
                };
                self.compound_into(source, view.create_view(key.as_str()), depth + 1)?;
            } else {
                view.set(key.as_str(), self.value_at(child, depth + 1)?);
            }
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TagKind;

    fn nested() -> Tag {
        Tag::compound([
            ("a", Tag::Int(1)),
            ("b", Tag::compound([("c", Tag::String("x".into()))])),
        ])
    }

    #[test]
    fn scalars_decode_to_raw_values() {
        let options = ConverterOptions::default();
        let decoder = Decoder::new(&options);
        assert_eq!(decoder.decode(&Tag::End).unwrap(), Value::Nil);
        assert_eq!(decoder.decode(&Tag::Short(4)).unwrap(), Value::Short(4));
        assert_eq!(
            decoder.decode(&Tag::ByteArray(vec![1, 2])).unwrap(),
            Value::ByteArray(vec![1, 2])
        );
        assert_eq!(
            decoder.decode(&Tag::String("s".into())).unwrap(),
            Value::from("s")
        );
    }

    #[test]
    fn nested_compound_decodes_entry_value() {
        let view = Decoder::new(&ConverterOptions::default())
            .decode_view(&nested())
            .unwrap();
        assert_eq!(view.get_path("a"), Some(&Value::Int(1)));
        assert_eq!(view.get_path("b.c"), Some(&Value::from("x")));
        assert_eq!(view.get_view("b").map(AttributeView::len), Some(1));
    }

    #[test]
    fn outer_tag_mode_recurses_until_depth_limit() {
        let options = ConverterOptions {
            nested_compounds: NestedCompoundMode::OuterTag,
            max_depth: 16,
            ..ConverterOptions::default()
        };
        assert_eq!(
            Decoder::new(&options).decode_view(&nested()),
            Err(ConvertError::DepthExceeded { limit: 16 })
        );
    }

    #[test]
    fn outer_tag_mode_matches_on_flat_compounds() {
        let flat = Tag::compound([("a", Tag::Int(1)), ("s", Tag::String("x".into()))]);
        let options = ConverterOptions {
            nested_compounds: NestedCompoundMode::OuterTag,
            ..ConverterOptions::default()
        };
        let literal = Decoder::new(&options).decode_view(&flat).unwrap();
        let fixed = Decoder::new(&ConverterOptions::default())
            .decode_view(&flat)
            .unwrap();
        assert_eq!(literal, fixed);
    }

    #[test]
    fn list_elements_decode_independently() {
        let tag = Tag::List(
            TagKind::Compound,
            vec![
                Tag::compound([("k", Tag::Int(1))]),
                Tag::compound([("k", Tag::Int(2))]),
            ],
        );
        let Value::List(items) = Decoder::new(&ConverterOptions::default())
            .decode(&tag)
            .unwrap()
        else {
            panic!("expected list");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].as_view().and_then(|v| v.get("k")), Some(&Value::Int(2)));
    }

    #[test]
    fn mismatched_list_is_decoded_best_effort() {
        let tag = Tag::List(TagKind::Int, vec![Tag::Int(1), Tag::String("x".into())]);
        assert_eq!(
            Decoder::new(&ConverterOptions::default()).decode(&tag).unwrap(),
            Value::List(vec![Value::Int(1), Value::from("x")])
        );
    }

    #[test]
    fn decode_view_rejects_non_compound() {
        assert_eq!(
            Decoder::new(&ConverterOptions::default()).decode_view(&Tag::Int(1)),
            Err(ConvertError::NotACompound {
                found: TagKind::Int
            })
        );
    }

    #[test]
    fn decode_into_merges_and_is_atomic() {
        let options = ConverterOptions::default();
        let decoder = Decoder::new(&options);
        let mut target = AttributeView::new();
        target.set("keep", 9);
        decoder.decode_into(&nested(), &mut target).unwrap();
        assert_eq!(target.get("keep"), Some(&Value::Int(9)));
        assert_eq!(target.get_path("b.c"), Some(&Value::from("x")));

        let shallow = ConverterOptions {
            max_depth: 1,
            ..ConverterOptions::default()
        };
        let deep = Tag::compound([
            ("z", Tag::Int(0)),
            ("n", Tag::compound([("m", Tag::compound([("o", Tag::Int(1))]))])),
        ]);
        let before = target.clone();
        assert!(Decoder::new(&shallow).decode_into(&deep, &mut target).is_err());
        assert_eq!(target, before);
    }
}
