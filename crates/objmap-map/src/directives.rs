//! Directive pass: rename, transform and ignore.
//!
//! Runs after the name-for-name copy, and only when
//! [`MapOptions::apply_directives`](crate::MapOptions) is set. Fields are
//! visited in declaration order; per field the steps are ignore, then rename,
//! then transform.

use objmap_model::{MetadataRegistry, Object, Result, TypeDescriptor};

use crate::copy::Copier;

pub(crate) fn apply_directives(
    registry: &MetadataRegistry,
    descriptor: &TypeDescriptor,
    source: &Object,
    target: &mut Object,
    copier: &mut Copier,
) -> Result<()> {
    let type_name = descriptor.name().as_str();
    for field in descriptor.fields() {
        let directive = registry.lookup(type_name, &field.name);
        if directive.is_empty() {
            continue;
        }

        if directive.ignore {
            target.insert(field.name.clone(), field.default.clone());
            continue;
        }

        if let Some(key) = &directive.source_key
            && let Some(value) = source.get(key)
        {
            // Depth failures are reported under the target field name.
            let copied = copier.copy_field(&field.name, value, Some(field.default.clone()), 0)?;
            target.insert(field.name.clone(), copied);
        }

        if let Some(transform) = &directive.transform
            && let Some(current) = target.get(&field.name)
            && !current.is_undefined()
        {
            let transformed = transform.apply(current);
            tracing::trace!(
                field = %field.name,
                transform = transform.name(),
                "Applied field transform"
            );
            target.insert(field.name.clone(), transformed);
        }
    }
    Ok(())
}
