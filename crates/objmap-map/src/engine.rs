//! Mapping engine implementation.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use objmap_model::{MapError, MetadataRegistry, Object, Result, TypeDescriptor, Value, global};

use crate::copy::Copier;
use crate::directives::apply_directives;
use crate::options::MapOptions;
use crate::validate::validate_required;

/// Maps source values onto declared target types.
///
/// A `Mapper` only reads its registry, so one instance can be cloned or
/// shared across threads freely.
#[derive(Debug, Clone)]
pub struct Mapper {
    registry: Arc<MetadataRegistry>,
}

impl Mapper {
    /// Create a mapper over a registry.
    pub fn new(registry: impl Into<Arc<MetadataRegistry>>) -> Self {
        Self {
            registry: registry.into(),
        }
    }

    /// Create a mapper over the process-wide registry.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::GlobalRegistryMissing`] if no registry was installed.
    pub fn from_global() -> Result<Self> {
        global()
            .map(|registry| Self { registry })
            .ok_or(MapError::GlobalRegistryMissing)
    }

    /// Map `source` onto a fresh instance of `type_name`.
    ///
    /// An absent or non-object source yields the fresh instance untouched.
    /// Under strict mapping, required fields are checked before anything is
    /// copied, so a validation failure produces no partial result.
    ///
    /// # Errors
    ///
    /// - [`MapError::UnknownType`] if `type_name` was never declared
    /// - [`MapError::Validation`] for missing required fields (strict mode)
    /// - [`MapError::DepthExceeded`] if the source nests deeper than allowed
    pub fn map(&self, source: &Value, type_name: &str, options: MapOptions) -> Result<Object> {
        let descriptor = self.registry.require_descriptor(type_name)?;
        self.map_with(descriptor, source, options)
    }

    /// Map every element of `sources`, preserving order.
    ///
    /// Stops at the first failing element and returns its error.
    pub fn map_array(
        &self,
        sources: &[Value],
        type_name: &str,
        options: MapOptions,
    ) -> Result<Vec<Object>> {
        let descriptor = self.registry.require_descriptor(type_name)?;
        tracing::debug!(
            target_type = %descriptor.name(),
            count = sources.len(),
            "Mapping source array"
        );
        sources
            .iter()
            .map(|source| self.map_with(descriptor, source, options))
            .collect()
    }

    /// Map `source` and deserialize the result into `T`.
    ///
    /// `Undefined` fields are left out before deserializing, so they land on
    /// `Option` fields as `None` or on `#[serde(default)]` fields.
    pub fn map_into<T: DeserializeOwned>(
        &self,
        source: &Value,
        type_name: &str,
        options: MapOptions,
    ) -> Result<T> {
        let object = self.map(source, type_name, options)?;
        serde_json::from_value(object.to_json()).map_err(|err| {
            MapError::Conversion(format!("cannot build {type_name} from mapped value: {err}"))
        })
    }

    /// Serialize `source` into a [`Value`], map it, and deserialize into `T`.
    pub fn map_serialized<S, T>(
        &self,
        source: &S,
        type_name: &str,
        options: MapOptions,
    ) -> Result<T>
    where
        S: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let json = serde_json::to_value(source)
            .map_err(|err| MapError::Conversion(format!("cannot serialize source: {err}")))?;
        self.map_into(&Value::from(json), type_name, options)
    }

    fn map_with(
        &self,
        descriptor: &TypeDescriptor,
        source: &Value,
        options: MapOptions,
    ) -> Result<Object> {
        let target = descriptor.instantiate();
        let Some(source) = source.as_object() else {
            tracing::debug!(
                target_type = %descriptor.name(),
                source_kind = source.kind(),
                "Source has no fields, returning fresh instance"
            );
            return Ok(target);
        };

        tracing::debug!(
            target_type = %descriptor.name(),
            source_fields = source.len(),
            strict = options.strict_mapping,
            "Mapping source object"
        );

        if options.strict_mapping {
            validate_required(&self.registry, descriptor, source)?;
        }

        let mut copier = Copier::new(options.max_depth);
        let mut target = copier.copy_object(source, target)?;

        if options.apply_directives {
            apply_directives(&self.registry, descriptor, source, &mut target, &mut copier)?;
        }

        Ok(target)
    }
}
