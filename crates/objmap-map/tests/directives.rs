//! Directive application (`apply_directives`) on entity-to-DTO mappings.

use chrono::{TimeZone, Utc};
use serde_json::json;

use objmap_map::{MapOptions, Mapper, MetadataRegistry, Object, Value};
use objmap_model::SchemaFile;

const DTO_SCHEMA: &str = r#"{
    "types": [
        {
            "name": "UserDto",
            "fields": [
                { "name": "id" },
                { "name": "name", "map_from": "firstName" },
                { "name": "surname", "map_from": "lastName" },
                { "name": "email", "required": true },
                { "name": "role", "transform": "uppercase" },
                { "name": "password", "ignore": true },
                { "name": "address" },
                { "name": "posts" }
            ]
        },
        {
            "name": "PostDto",
            "fields": [
                { "name": "id" },
                { "name": "title" },
                { "name": "summary", "map_from": "content", "transform": "truncate", "max_chars": 12 },
                { "name": "body", "map_from": "content" },
                { "name": "publishedAt", "map_from": "createdAt", "transform": "iso_timestamp" },
                { "name": "visibility", "default": "public", "ignore": true }
            ]
        }
    ]
}"#;

fn mapper() -> Mapper {
    let registry: MetadataRegistry = SchemaFile::from_json_str(DTO_SCHEMA, "dto schema")
        .unwrap()
        .into_registry("dto schema")
        .unwrap();
    Mapper::new(registry)
}

fn user_entity() -> Value {
    Value::from(json!({
        "id": 1,
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@example.com",
        "role": "admin",
        "password": "hunter2",
        "address": {"street": "Main Street", "city": "New York", "zipCode": "10001", "country": "USA"},
        "posts": [{"id": 1, "title": "Hello", "content": "First post"}]
    }))
}

fn with_directives() -> MapOptions {
    MapOptions::default().with_apply_directives(true)
}

#[test]
fn renames_transforms_and_ignores_top_level_fields() {
    let result = mapper().map(&user_entity(), "UserDto", with_directives()).unwrap();

    assert_eq!(result.get("name"), Some(&Value::from("John")));
    assert_eq!(result.get("surname"), Some(&Value::from("Doe")));
    assert_eq!(result.get("role"), Some(&Value::from("ADMIN")));
    assert_eq!(result.get("password"), Some(&Value::Undefined));
    assert!(result.to_json().get("password").is_none());
    assert_eq!(result.get("email"), Some(&Value::from("john.doe@example.com")));
}

#[test]
fn nested_values_are_copied_without_type_information() {
    let result = mapper().map(&user_entity(), "UserDto", with_directives()).unwrap();

    // Nested objects carry no target type, so their directives do not apply.
    assert_eq!(
        result.get("address"),
        Some(&Value::from(json!({
            "street": "Main Street", "city": "New York", "zipCode": "10001", "country": "USA"
        })))
    );
    assert_eq!(
        result.get("posts"),
        Some(&Value::from(json!([{"id": 1, "title": "Hello", "content": "First post"}])))
    );
}

#[test]
fn renamed_fields_can_be_transformed() {
    let created = Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
    let post = Object::new()
        .with("id", 3)
        .with("title", "Notes")
        .with("content", "A rather long post body")
        .with("createdAt", created)
        .with("visibility", "private");

    let result = mapper()
        .map(&Value::Object(post), "PostDto", with_directives())
        .unwrap();

    assert_eq!(result.get("summary"), Some(&Value::from("A rather ...")));
    assert_eq!(result.get("body"), Some(&Value::from("A rather long post body")));
    assert_eq!(
        result.get("publishedAt"),
        Some(&Value::from("2023-01-01T12:00:00.000Z"))
    );
    // The original key is still copied name-for-name.
    assert_eq!(result.get("createdAt"), Some(&Value::Timestamp(created)));
    // Ignored fields fall back to their declared default.
    assert_eq!(result.get("visibility"), Some(&Value::from("public")));
}

#[test]
fn transforms_skip_undefined_fields() {
    let source = Value::from(json!({"email": "a@b.c"}));
    let result = mapper().map(&source, "UserDto", with_directives()).unwrap();
    assert_eq!(result.get("role"), Some(&Value::Undefined));
    assert_eq!(result.get("name"), Some(&Value::Undefined));
}

#[test]
fn strict_validation_still_runs_first() {
    let source = Value::from(json!({"firstName": "John"}));
    let err = mapper()
        .map(&source, "UserDto", with_directives().with_strict_mapping(true))
        .unwrap_err();
    assert_eq!(err.to_string(), "missing required fields: email");
}

#[test]
fn same_source_without_directives_keeps_raw_names() {
    let result = mapper()
        .map(&user_entity(), "UserDto", MapOptions::default())
        .unwrap();
    assert_eq!(result.get("name"), Some(&Value::Undefined));
    assert_eq!(result.get("firstName"), Some(&Value::from("John")));
    assert_eq!(result.get("role"), Some(&Value::from("admin")));
    assert_eq!(result.get("password"), Some(&Value::from("hunter2")));
}
