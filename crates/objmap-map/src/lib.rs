//! Metadata-driven object-to-object mapping.
//!
//! # Overview
//!
//! [`Mapper`] takes a source [`Value`] and the name of a target type declared
//! in a [`MetadataRegistry`], allocates a fresh instance of the target and
//! copies fields into it:
//!
//! - primitives and timestamps are copied as-is
//! - nested objects are copied recursively, reusing an object already present
//!   on the target as the write base
//! - arrays are copied element by element; objects inside arrays start from
//!   an empty base
//!
//! With [`MapOptions::strict_mapping`], fields flagged `required` on the
//! target must be present on the source, otherwise the call fails before
//! anything is copied.
//!
//! Rename, transform and ignore directives are recorded in the registry but
//! left alone by default; [`MapOptions::apply_directives`] turns them on.
//!
//! # Example
//!
//! ```ignore
//! use objmap_map::{MapOptions, Mapper};
//! use objmap_model::{FieldDirective, MetadataRegistry, TypeDescriptor, Value};
//!
//! let descriptor = TypeDescriptor::new("UserDto")?.field("name").field("email");
//! let mut registry = MetadataRegistry::new();
//! let name = descriptor.name().clone();
//! registry.declare(descriptor);
//! registry.attach(&name, "email", FieldDirective::required());
//!
//! let mapper = Mapper::new(registry);
//! let user = mapper.map(&source, "UserDto", MapOptions::strict())?;
//! ```

#![deny(unsafe_code)]

mod copy;
mod directives;
mod engine;
mod options;
mod validate;

pub use engine::Mapper;
pub use options::{DEFAULT_MAX_DEPTH, MapOptions};

pub use objmap_model::{
    FieldDirective, MapError, MetadataRegistry, Object, Result, TypeDescriptor, Value,
};
