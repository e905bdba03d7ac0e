//! Property tests for the mapping engine.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use objmap_map::{MapOptions, Mapper, MetadataRegistry, Object, TypeDescriptor, Value};

const FIELDS: [&str; 3] = ["a", "b", "c"];

fn mapper() -> Mapper {
    let descriptor = FIELDS
        .iter()
        .fold(TypeDescriptor::new("Target").unwrap(), |d, f| d.field(*f));
    let mut registry = MetadataRegistry::new();
    registry.declare(descriptor);
    Mapper::new(registry)
}

fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        "[a-zA-Z ]{0,12}".prop_map(Value::Text),
        (0i64..4_102_444_800, 0u32..1_000)
            .prop_map(|(secs, millis)| Value::Timestamp(
                Utc.timestamp_opt(secs, millis * 1_000_000).unwrap()
            )),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    primitive().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-e]{1,3}", inner, 0..4)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

fn source_object() -> impl Strategy<Value = Object> {
    prop::collection::btree_map("[a-e]{1,3}", value(), 0..6)
        .prop_map(|fields| fields.into_iter().collect())
}

proptest! {
    #[test]
    fn flat_sources_with_declared_fields_map_to_themselves(
        a in primitive(),
        b in primitive(),
        c in primitive(),
    ) {
        let source = Object::new().with("a", a).with("b", b).with("c", c);
        let result = mapper()
            .map(&Value::Object(source.clone()), "Target", MapOptions::default())
            .unwrap();
        prop_assert_eq!(result, source);
    }

    #[test]
    fn map_array_matches_element_wise_map(sources in prop::collection::vec(source_object(), 0..6)) {
        let mapper = mapper();
        let sources: Vec<Value> = sources.into_iter().map(Value::Object).collect();

        let batch = mapper.map_array(&sources, "Target", MapOptions::default()).unwrap();

        prop_assert_eq!(batch.len(), sources.len());
        for (mapped, source) in batch.iter().zip(&sources) {
            let single = mapper.map(source, "Target", MapOptions::default()).unwrap();
            prop_assert_eq!(mapped, &single);
        }
    }

    #[test]
    fn mapping_is_idempotent(source in source_object()) {
        let mapper = mapper();
        let first = mapper
            .map(&Value::Object(source), "Target", MapOptions::default())
            .unwrap();
        let second = mapper
            .map(&Value::Object(first.clone()), "Target", MapOptions::default())
            .unwrap();
        prop_assert_eq!(second, first);
    }

    #[test]
    fn every_source_field_is_copied(source in source_object()) {
        let result = mapper()
            .map(&Value::Object(source.clone()), "Target", MapOptions::default())
            .unwrap();
        for (key, value) in source.iter() {
            prop_assert_eq!(result.get(key), Some(value));
        }
        for field in FIELDS {
            prop_assert!(result.contains_key(field));
        }
    }
}
