//! Target type descriptors.

use std::borrow::Borrow;
use std::fmt;

use crate::error::{MapError, Result};
use crate::value::{Object, Value};

/// Identity of a target type in the metadata registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(MapError::InvalidTypeName(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A declared field and the value a fresh instance starts with.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub default: Value,
}

/// Shape of a target type: its name and declared fields in order.
///
/// The field list stands in for runtime reflection: it is what
/// [`TypeDescriptor::instantiate`] allocates and what required-field
/// validation scans.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    name: TypeName,
    fields: Vec<FieldDef>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: TypeName::new(name)?,
            fields: Vec::new(),
        })
    }

    /// Declare a field that starts out `Undefined`.
    #[must_use]
    pub fn field(self, name: impl Into<String>) -> Self {
        self.field_with_default(name, Value::Undefined)
    }

    /// Declare a field with an initial value. Re-declaring a field replaces
    /// its default and keeps its position.
    #[must_use]
    pub fn field_with_default(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.push_field(name.into(), default.into());
        self
    }

    pub(crate) fn push_field(&mut self, name: String, default: Value) {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.default = default,
            None => self.fields.push(FieldDef { name, default }),
        }
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn default_for(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.default)
    }

    /// Allocate a fresh instance holding every declared field at its default.
    pub fn instantiate(&self) -> Object {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.default.clone()))
            .collect()
    }
}
