//! Required-field validation for strict mapping.

use objmap_model::{MapError, MetadataRegistry, Object, Result, TypeDescriptor, Value};

/// Declared fields of the target that are flagged `required` but missing or
/// `Undefined` on the source, in declaration order.
pub(crate) fn missing_required_fields(
    registry: &MetadataRegistry,
    descriptor: &TypeDescriptor,
    source: &Object,
) -> Vec<String> {
    let type_name = descriptor.name().as_str();
    descriptor
        .field_names()
        .filter(|field| registry.lookup(type_name, field).required)
        .filter(|field| source.get(field).is_none_or(Value::is_undefined))
        .map(str::to_string)
        .collect()
}

/// Fail with a single aggregated error when any required field is missing.
pub(crate) fn validate_required(
    registry: &MetadataRegistry,
    descriptor: &TypeDescriptor,
    source: &Object,
) -> Result<()> {
    let missing = missing_required_fields(registry, descriptor, source);
    if missing.is_empty() {
        return Ok(());
    }
    tracing::warn!(
        target_type = %descriptor.name(),
        missing = %missing.join(", "),
        "Required fields missing from source"
    );
    Err(MapError::Validation { missing })
}
