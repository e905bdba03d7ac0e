//! Data model for the objmap mapper.
//!
//! - [`Value`] / [`Object`]: the tagged value model sources and targets use
//! - [`FieldDirective`]: per-field mapping metadata (rename, transform, ignore, required)
//! - [`TypeDescriptor`]: declared shape of a target type
//! - [`MetadataRegistry`]: (type, field) -> directive store, filled at startup
//! - [`SchemaFile`]: declarative JSON form of a registry

#![deny(unsafe_code)]

pub mod descriptor;
pub mod directive;
pub mod error;
pub mod registry;
pub mod schema;
pub mod value;

pub use descriptor::{FieldDef, TypeDescriptor, TypeName};
pub use directive::{
    BuiltinTransform, DEFAULT_TRUNCATE_CHARS, FieldDirective, Transform, TransformFn,
};
pub use error::{MapError, Result};
pub use registry::{MetadataRegistry, global, install_global};
pub use schema::{FieldSchema, SchemaFile, TypeSchema};
pub use value::{Object, Value, format_timestamp};
