use tag_tree::{
    decode, decode_view, encode, encode_view, AttributeView, ConvertError, Converter,
    ConverterOptions, ListKindPolicy, NestedCompoundMode, Tag, TagKind, ToView, Value,
};

fn sample_tag() -> Tag {
    Tag::compound([
        ("a", Tag::Int(1)),
        ("b", Tag::compound([("c", Tag::String("x".into()))])),
    ])
}

// ── Encoding ──────────────────────────────────────────────────────────────

#[test]
fn empty_sequence_is_end_typed_list() {
    assert_eq!(
        encode(&Value::List(Vec::new())).unwrap(),
        Tag::List(TagKind::End, Vec::new())
    );
}

#[test]
fn int_sequence_is_int_list() {
    let value = Value::List(vec![1.into(), 2.into(), 3.into()]);
    assert_eq!(
        encode(&value).unwrap(),
        Tag::List(TagKind::Int, vec![Tag::Int(1), Tag::Int(2), Tag::Int(3)])
    );
}

#[test]
fn nested_mapping_is_nested_compound() {
    let value = Value::Map(vec![
        ("a".into(), 1.into()),
        (
            "b".into(),
            Value::Map(vec![("c".into(), "x".into())]),
        ),
    ]);
    assert_eq!(encode(&value).unwrap(), sample_tag());
}

#[test]
fn unsupported_kind_produces_no_tag() {
    fn handler() {}
    let value = Value::any(handler as fn());
    match encode(&value) {
        Err(ConvertError::UnsupportedValue { type_name }) => assert_eq!(type_name, "fn()"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn view_keys_are_single_segments() {
    let mut view = AttributeView::new();
    view.set_path("pos.x", 1.5f64);
    view.set("raw.key", 2);
    let tag = encode_view(&view).unwrap();
    let keys: Vec<_> = tag.as_compound().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["pos", "raw.key"]);
    assert_eq!(
        tag.get("pos").and_then(|p| p.get("x")),
        Some(&Tag::Double(1.5))
    );
}

#[test]
fn self_describing_type_needs_no_converter_change() {
    struct Chest {
        slots: Vec<(i8, &'static str)>,
    }

    impl ToView for Chest {
        fn to_view(&self) -> AttributeView {
            let items = self
                .slots
                .iter()
                .map(|(slot, id)| {
                    let mut item = AttributeView::new();
                    item.set("Slot", *slot);
                    item.set("id", *id);
                    Value::View(item)
                })
                .collect::<Vec<_>>();
            let mut view = AttributeView::new();
            view.set("Items", items);
            view
        }
    }

    let chest = Chest {
        slots: vec![(0, "stone"), (4, "dirt")],
    };
    let tag = Converter::default().encode_object(&chest).unwrap();
    let (kind, items) = tag.get("Items").and_then(Tag::as_list).unwrap();
    assert_eq!(kind, TagKind::Compound);
    assert_eq!(items[1].get("Slot"), Some(&Tag::Byte(4)));
}

// ── Decoding ──────────────────────────────────────────────────────────────

#[test]
fn nested_compound_reads_back_by_path() {
    let view = decode_view(&sample_tag()).unwrap();
    assert_eq!(view.get_path("a"), Some(&Value::Int(1)));
    assert_eq!(view.get_path("b.c"), Some(&Value::from("x")));
}

/// Regression pin for the nested-compound traversal. The default decodes
/// each nested entry's own compound; `OuterTag` re-walks the enclosing
/// compound and can only terminate by hitting the depth limit.
#[test]
fn nested_compound_traversal_modes_are_pinned() {
    let entry_value = Converter::new(ConverterOptions {
        nested_compounds: NestedCompoundMode::EntryValue,
        ..ConverterOptions::default()
    });
    let view = entry_value.decode_view(&sample_tag()).unwrap();
    assert_eq!(view.get_path("b.c"), Some(&Value::from("x")));
    assert!(view.get_path("b.a").is_none());
    assert!(view.get_path("b.b").is_none());

    let outer_tag = Converter::new(ConverterOptions {
        nested_compounds: NestedCompoundMode::OuterTag,
        max_depth: 32,
        ..ConverterOptions::default()
    });
    assert_eq!(
        outer_tag.decode_view(&sample_tag()),
        Err(ConvertError::DepthExceeded { limit: 32 })
    );
}

#[test]
fn default_options_pick_entry_value_and_strict_lists() {
    let options = ConverterOptions::default();
    assert_eq!(options.nested_compounds, NestedCompoundMode::EntryValue);
    assert_eq!(options.list_kinds, ListKindPolicy::Strict);
}

#[test]
fn list_of_compounds_decodes_to_views() {
    let tag = Tag::compound([(
        "Items",
        Tag::List(
            TagKind::Compound,
            vec![Tag::compound([("id", Tag::String("stone".into()))])],
        ),
    )]);
    let view = decode_view(&tag).unwrap();
    let items = view.get("Items").and_then(Value::as_list).unwrap();
    assert_eq!(
        items[0].as_view().and_then(|v| v.get("id")),
        Some(&Value::from("stone"))
    );
}

#[test]
fn end_decodes_to_nil_and_back() {
    assert_eq!(decode(&Tag::End).unwrap(), Value::Nil);
    assert_eq!(encode(&Value::Nil).unwrap(), Tag::End);
}

/// Decoding drops the declared kind of an empty list, so it comes back as an
/// `End` list. Non-empty lists keep their kind.
#[test]
fn empty_typed_list_reencodes_as_end() {
    let tag = Tag::compound([
        ("Items", Tag::List(TagKind::Compound, Vec::new())),
        ("Pos", Tag::List(TagKind::Double, vec![Tag::Double(0.5)])),
    ]);
    assert!(tag.is_homogeneous());
    let back = encode(&decode(&tag).unwrap()).unwrap();
    assert_eq!(back.get("Items"), Some(&Tag::List(TagKind::End, Vec::new())));
    assert_eq!(back.get("Pos"), tag.get("Pos"));
    assert_ne!(back, tag);
}

// ── Round trips ───────────────────────────────────────────────────────────

#[test]
fn player_like_view_roundtrip() {
    let mut view = AttributeView::new();
    view.set("Health", 20i16);
    view.set("XpSeed", i64::MIN);
    view.set("FallDistance", 0.25f32);
    view.set_path("Abilities.walkSpeed", 0.1f32);
    view.set_path("Abilities.flying", 0i8);
    view.set("Inventory", Value::ByteArray(vec![1, -1]));
    view.set("Palette", Value::IntArray(vec![0, 16, 32]));

    let tag = encode_view(&view).unwrap();
    let back = decode_view(&tag).unwrap();
    assert_eq!(back, view);
    assert_eq!(encode_view(&back).unwrap(), tag);
}

#[test]
fn permissive_roundtrip_preserves_mismatched_list() {
    let converter = Converter::new(ConverterOptions {
        list_kinds: ListKindPolicy::Permissive,
        ..ConverterOptions::default()
    });
    let tag = Tag::compound([(
        "mixed",
        Tag::List(TagKind::Int, vec![Tag::Int(1), Tag::Long(2)]),
    )]);
    let view = converter.decode_view(&tag).unwrap();
    assert_eq!(converter.encode_view(&view).unwrap(), tag);
    assert!(matches!(
        encode_view(&view),
        Err(ConvertError::HeterogeneousList { index: 1, .. })
    ));
}
