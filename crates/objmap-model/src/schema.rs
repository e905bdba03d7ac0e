//! Declarative schema files.
//!
//! A schema file declares target types, their fields and the directives on
//! those fields as JSON, so a registry can be built without code:
//!
//! ```json
//! { "types": [ { "name": "UserDto", "fields": [
//!     { "name": "email", "required": true },
//!     { "name": "name", "map_from": "firstName" },
//!     { "name": "role", "transform": "uppercase", "default": "user" },
//!     { "name": "password", "ignore": true } ] } ] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::TypeDescriptor;
use crate::directive::{BuiltinTransform, FieldDirective};
use crate::error::{MapError, Result};
use crate::registry::MetadataRegistry;
use crate::value::Value;

/// Root of a schema document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub types: Vec<TypeSchema>,
}

/// One declared target type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSchema {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

/// One declared field and its directive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    /// Initial value of the field on a fresh instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<BuiltinTransform>,
    /// Limit for the `truncate` transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
    #[serde(default)]
    pub ignore: bool,
    #[serde(default)]
    pub required: bool,
}

impl FieldSchema {
    fn directive(&self) -> FieldDirective {
        let mut directive = FieldDirective::default()
            .with_ignore(self.ignore)
            .with_required(self.required);
        if let Some(key) = &self.map_from {
            directive = directive.with_source_key(key.clone());
        }
        if let Some(transform) = self.transform {
            directive = directive.with_transform(transform.into_transform(self.max_chars));
        }
        directive
    }
}

impl SchemaFile {
    /// Parse a schema document. `origin` names it in error messages.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| MapError::SchemaParse {
            origin: origin.to_string(),
            source,
        })
    }

    /// Read and parse a schema file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| MapError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let schema = Self::from_json_str(&contents, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), types = schema.types.len(), "Loaded schema file");
        Ok(schema)
    }

    /// Build a registry from this schema.
    ///
    /// A type declared twice in the same document is rejected.
    pub fn into_registry(self, origin: &str) -> Result<MetadataRegistry> {
        let mut registry = MetadataRegistry::new();
        for ty in self.types {
            let mut descriptor = TypeDescriptor::new(&ty.name)?;
            if registry.descriptor(descriptor.name().as_str()).is_some() {
                return Err(MapError::InvalidSchema {
                    origin: origin.to_string(),
                    message: format!("type {} declared more than once", ty.name),
                });
            }
            let type_name = descriptor.name().clone();
            for field in &ty.fields {
                let default = field.default.clone().map_or(Value::Undefined, Value::from);
                descriptor.push_field(field.name.clone(), default);
                let directive = field.directive();
                if !directive.is_empty() {
                    registry.attach(&type_name, field.name.clone(), directive);
                }
            }
            registry.declare(descriptor);
        }
        Ok(registry)
    }
}

impl MetadataRegistry {
    /// Build a registry from an in-memory schema document.
    pub fn from_schema(schema: SchemaFile) -> Result<Self> {
        schema.into_registry("<inline>")
    }

    /// Read a schema file and build a registry from it.
    pub fn from_schema_file(path: &Path) -> Result<Self> {
        SchemaFile::load(path)?.into_registry(&path.display().to_string())
    }
}
