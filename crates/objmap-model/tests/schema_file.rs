//! Schema loading from disk.

use std::fs;
use std::path::PathBuf;

use objmap_model::{MapError, MetadataRegistry, Value};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "objmap-model-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn loads_registry_from_schema_file() {
    let dir = unique_temp_dir("load");
    let path = dir.join("schema.json");
    fs::write(
        &path,
        r#"{
            "types": [
                {
                    "name": "PostDto",
                    "fields": [
                        { "name": "id", "required": true },
                        { "name": "summary", "map_from": "content", "transform": "truncate", "max_chars": 20 },
                        { "name": "publishedAt", "transform": "iso_timestamp" },
                        { "name": "tags", "default": [] }
                    ]
                },
                { "name": "AddressDto", "fields": [ { "name": "postalCode", "map_from": "zipCode" } ] }
            ]
        }"#,
    )
    .unwrap();

    let registry = MetadataRegistry::from_schema_file(&path).expect("load schema");
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.required_fields("PostDto"), ["id"]);

    let post = registry.descriptor("PostDto").unwrap();
    assert_eq!(post.default_for("tags"), Some(&Value::Array(vec![])));

    let summary = registry.lookup("PostDto", "summary");
    assert_eq!(summary.source_key.as_deref(), Some("content"));
    let cut = summary
        .transform
        .as_ref()
        .unwrap()
        .apply(&Value::from("a fairly long post body that keeps going"));
    assert_eq!(cut, Value::from("a fairly long pos..."));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_schema_file_reports_path() {
    let dir = unique_temp_dir("missing");
    let path = dir.join("nope.json");
    let err = MetadataRegistry::from_schema_file(&path).unwrap_err();
    assert!(matches!(err, MapError::FileRead { .. }));
    assert!(err.to_string().contains("nope.json"));
    fs::remove_dir_all(&dir).ok();
}
