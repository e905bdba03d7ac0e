//! Command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info_span;

use objmap_map::{MapOptions, Mapper, Value};
use objmap_model::MetadataRegistry;

/// Inputs for `objmap map`.
#[derive(Debug, Clone)]
pub struct MapRequest {
    /// Schema file declaring the target types.
    pub schema: PathBuf,
    /// Target type to map onto.
    pub type_name: String,
    /// JSON document to map: an object, or an array of objects.
    pub input: PathBuf,
    pub options: MapOptions,
    /// Single-line output instead of pretty-printed JSON.
    pub compact: bool,
}

/// One declared type, as listed by `objmap types`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSummary {
    pub name: String,
    pub fields: Vec<String>,
    pub required: Vec<String>,
}

/// Map the input document and return the rendered JSON.
pub fn run_map(request: &MapRequest) -> Result<String> {
    let span = info_span!("map", target_type = %request.type_name);
    let _guard = span.enter();

    let registry = load_registry(&request.schema)?;
    let source = read_json(&request.input)?;
    let mapper = Mapper::new(registry);

    let mapped = if let Some(items) = source.as_array() {
        let objects = mapper.map_array(items, &request.type_name, request.options)?;
        tracing::info!(records = objects.len(), "Mapped input array");
        Value::Array(objects.into_iter().map(Value::Object).collect())
    } else {
        let object = mapper.map(&source, &request.type_name, request.options)?;
        tracing::info!(fields = object.len(), "Mapped input object");
        Value::Object(object)
    };

    let rendered = if request.compact {
        serde_json::to_string(&mapped)
    } else {
        serde_json::to_string_pretty(&mapped)
    };
    rendered.context("render mapped output")
}

/// List the types declared in a schema file, sorted by name.
pub fn run_types(schema: &Path) -> Result<Vec<TypeSummary>> {
    let registry = load_registry(schema)?;
    let summaries = registry
        .type_names()
        .into_iter()
        .filter_map(|name| registry.descriptor(name.as_str()))
        .map(|descriptor| {
            let name = descriptor.name().as_str();
            TypeSummary {
                name: name.to_string(),
                fields: descriptor.field_names().map(str::to_string).collect(),
                required: registry
                    .required_fields(name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }
        })
        .collect();
    Ok(summaries)
}

fn load_registry(schema: &Path) -> Result<MetadataRegistry> {
    let registry = MetadataRegistry::from_schema_file(schema)
        .with_context(|| format!("load schema {}", schema.display()))?;
    tracing::info!(types = registry.len(), "Loaded schema");
    Ok(registry)
}

fn read_json(path: &Path) -> Result<Value> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse input {}", path.display()))?;
    Ok(Value::from(json))
}
