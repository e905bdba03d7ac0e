//! Field metadata registry.
//!
//! Holds the declared target types and the directives attached to their
//! fields. A registry is filled once at startup and only read while mapping;
//! it can be shared across threads behind an `Arc` without locking.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::descriptor::{TypeDescriptor, TypeName};
use crate::directive::FieldDirective;
use crate::error::{MapError, Result};

static EMPTY_DIRECTIVE: FieldDirective = FieldDirective::EMPTY;

static GLOBAL_REGISTRY: OnceLock<Arc<MetadataRegistry>> = OnceLock::new();

/// Registry of target types and their field directives.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    types: HashMap<TypeName, TypeDescriptor>,
    directives: HashMap<TypeName, HashMap<String, FieldDirective>>,
}

impl MetadataRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target type. Declaring the same name again replaces the
    /// previous descriptor; attached directives are kept.
    pub fn declare(&mut self, descriptor: TypeDescriptor) {
        tracing::debug!(
            target_type = %descriptor.name(),
            fields = descriptor.fields().len(),
            "Declared target type"
        );
        self.types.insert(descriptor.name().clone(), descriptor);
    }

    /// Attach a directive to a field. A later attach for the same
    /// (type, field) overwrites the earlier one.
    pub fn attach(
        &mut self,
        type_name: &TypeName,
        field: impl Into<String>,
        directive: FieldDirective,
    ) {
        let field = field.into();
        let fields = self.directives.entry(type_name.clone()).or_default();
        if fields.insert(field.clone(), directive).is_some() {
            tracing::trace!(target_type = %type_name, field = %field, "Replaced field directive");
        }
    }

    /// Directive attached to a field, or the empty directive when none was.
    pub fn lookup(&self, type_name: &str, field: &str) -> &FieldDirective {
        self.directives
            .get(type_name)
            .and_then(|fields| fields.get(field))
            .unwrap_or(&EMPTY_DIRECTIVE)
    }

    /// Declared descriptor for a type.
    pub fn descriptor(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }

    /// Like [`Self::descriptor`] but an unknown type is an error.
    pub fn require_descriptor(&self, type_name: &str) -> Result<&TypeDescriptor> {
        self.descriptor(type_name)
            .ok_or_else(|| MapError::UnknownType(type_name.to_string()))
    }

    /// Declared fields flagged `required`, in declaration order.
    ///
    /// Empty for an unknown type.
    pub fn required_fields(&self, type_name: &str) -> Vec<&str> {
        self.descriptor(type_name)
            .map(|descriptor| {
                descriptor
                    .field_names()
                    .filter(|field| self.lookup(type_name, field).required)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Declared type names, sorted.
    pub fn type_names(&self) -> Vec<&TypeName> {
        let mut names: Vec<&TypeName> = self.types.keys().collect();
        names.sort();
        names
    }

    /// Number of declared types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if no type is declared.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Install the process-wide registry. Only the first call succeeds.
pub fn install_global(registry: MetadataRegistry) -> Result<Arc<MetadataRegistry>> {
    let registry = Arc::new(registry);
    GLOBAL_REGISTRY
        .set(Arc::clone(&registry))
        .map_err(|_| MapError::GlobalRegistryInstalled)?;
    tracing::info!(types = registry.len(), "Installed global metadata registry");
    Ok(registry)
}

/// The process-wide registry, once installed.
pub fn global() -> Option<Arc<MetadataRegistry>> {
    GLOBAL_REGISTRY.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_dto() -> TypeDescriptor {
        TypeDescriptor::new("UserDto")
            .unwrap()
            .field("id")
            .field("name")
            .field("email")
            .field("password")
    }

    #[test]
    fn lookup_returns_empty_directive_when_unset() {
        let registry = MetadataRegistry::new();
        assert!(registry.lookup("UserDto", "email").is_empty());
        assert!(registry.descriptor("UserDto").is_none());
    }

    #[test]
    fn later_attach_overwrites() {
        let mut registry = MetadataRegistry::new();
        let descriptor = user_dto();
        let name = descriptor.name().clone();
        registry.declare(descriptor);

        registry.attach(&name, "name", FieldDirective::map_from("firstName"));
        registry.attach(&name, "name", FieldDirective::required());

        let directive = registry.lookup("UserDto", "name");
        assert!(directive.required);
        assert!(directive.source_key.is_none());
    }

    #[test]
    fn required_fields_follow_declaration_order() {
        let mut registry = MetadataRegistry::new();
        let descriptor = user_dto();
        let name = descriptor.name().clone();
        registry.declare(descriptor);
        registry.attach(&name, "email", FieldDirective::required());
        registry.attach(&name, "id", FieldDirective::required());
        registry.attach(&name, "password", FieldDirective::ignored());

        assert_eq!(registry.required_fields("UserDto"), ["id", "email"]);
        assert!(registry.required_fields("Missing").is_empty());
    }

    #[test]
    fn unknown_type_is_an_error() {
        let registry = MetadataRegistry::new();
        let err = registry.require_descriptor("Nope").unwrap_err();
        assert!(matches!(err, MapError::UnknownType(ref n) if n == "Nope"));
    }

    #[test]
    fn type_names_are_sorted() {
        let mut registry = MetadataRegistry::new();
        registry.declare(TypeDescriptor::new("PostDto").unwrap());
        registry.declare(TypeDescriptor::new("AddressDto").unwrap());
        let names: Vec<&str> = registry.type_names().into_iter().map(TypeName::as_str).collect();
        assert_eq!(names, ["AddressDto", "PostDto"]);
        assert_eq!(registry.len(), 2);
    }
}
