//! Per-field mapping directives.
//!
//! A directive is attached to one (target type, field) pair when the type is
//! declared and never changes afterwards.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::value::{Value, format_timestamp};

/// Signature of a value transform.
pub type TransformFn = dyn Fn(&Value) -> Value + Send + Sync;

/// A named, shareable value-to-value function.
#[derive(Clone)]
pub struct Transform {
    name: String,
    func: Arc<TransformFn>,
}

impl Transform {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, value: &Value) -> Value {
        (self.func)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform").field(&self.name).finish()
    }
}

/// Mapping directive for a single target field.
#[derive(Debug, Clone, Default)]
pub struct FieldDirective {
    /// Read this source key instead of the field's own name.
    pub source_key: Option<String>,
    /// Post-process the copied value.
    pub transform: Option<Transform>,
    /// Exclude the field from mapping.
    pub ignore: bool,
    /// Must be present and defined on the source under strict mapping.
    pub required: bool,
}

impl FieldDirective {
    /// Directive with every attribute unset.
    pub const EMPTY: FieldDirective = FieldDirective {
        source_key: None,
        transform: None,
        ignore: false,
        required: false,
    };

    /// Rename: read `source_key` from the source.
    pub fn map_from(source_key: impl Into<String>) -> Self {
        Self::default().with_source_key(source_key)
    }

    pub fn transform<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::default().with_transform(Transform::new(name, func))
    }

    pub fn ignored() -> Self {
        Self::default().with_ignore(true)
    }

    pub fn required() -> Self {
        Self::default().with_required(true)
    }

    #[must_use]
    pub fn with_source_key(mut self, source_key: impl Into<String>) -> Self {
        self.source_key = Some(source_key.into());
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    #[must_use]
    pub fn with_ignore(mut self, ignore: bool) -> Self {
        self.ignore = ignore;
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.source_key.is_none() && self.transform.is_none() && !self.ignore && !self.required
    }
}

/// Transforms that can be named in a schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinTransform {
    Uppercase,
    Lowercase,
    Trim,
    /// Cut text longer than `max_chars`, ending it with `...`.
    Truncate,
    /// Render a timestamp as RFC 3339 text.
    IsoTimestamp,
}

/// Default limit for [`BuiltinTransform::Truncate`].
pub const DEFAULT_TRUNCATE_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

impl BuiltinTransform {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Trim => "trim",
            Self::Truncate => "truncate",
            Self::IsoTimestamp => "iso_timestamp",
        }
    }

    /// Build the transform. `max_chars` only matters for `Truncate`.
    ///
    /// Values of a kind the transform does not handle pass through unchanged.
    pub fn into_transform(self, max_chars: Option<usize>) -> Transform {
        match self {
            Self::Uppercase => map_text(self.as_str(), str::to_uppercase),
            Self::Lowercase => map_text(self.as_str(), str::to_lowercase),
            Self::Trim => map_text(self.as_str(), |s| s.trim().to_string()),
            Self::Truncate => {
                let max = max_chars.unwrap_or(DEFAULT_TRUNCATE_CHARS);
                map_text(self.as_str(), move |s| truncate(s, max))
            }
            Self::IsoTimestamp => Transform::new(self.as_str(), |value| {
                value
                    .as_timestamp()
                    .map_or_else(|| value.clone(), |ts| Value::Text(format_timestamp(ts)))
            }),
        }
    }
}

impl fmt::Display for BuiltinTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn map_text<F>(name: &str, func: F) -> Transform
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Transform::new(name, move |value| match value {
        Value::Text(text) => Value::Text(func(text)),
        other => other.clone(),
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn constructors_set_single_attribute() {
        let rename = FieldDirective::map_from("firstName");
        assert_eq!(rename.source_key.as_deref(), Some("firstName"));
        assert!(!rename.required && !rename.ignore && rename.transform.is_none());

        assert!(FieldDirective::ignored().ignore);
        assert!(FieldDirective::required().required);
        assert!(FieldDirective::EMPTY.is_empty());
        assert!(!FieldDirective::required().is_empty());
    }

    #[test]
    fn directives_can_combine_attributes() {
        let directive = FieldDirective::map_from("content")
            .with_transform(BuiltinTransform::Truncate.into_transform(Some(10)))
            .with_required(true);
        assert!(directive.required);
        let transform = directive.transform.expect("transform");
        assert_eq!(transform.name(), "truncate");
        assert_eq!(
            transform.apply(&Value::from("abcdefghijklmnop")),
            Value::from("abcdefg...")
        );
    }

    #[test]
    fn truncate_keeps_short_text() {
        let transform = BuiltinTransform::Truncate.into_transform(None);
        assert_eq!(transform.apply(&Value::from("short")), Value::from("short"));
        let long = "x".repeat(120);
        let Value::Text(cut) = transform.apply(&Value::from(long)) else {
            panic!("expected text");
        };
        assert_eq!(cut.chars().count(), DEFAULT_TRUNCATE_CHARS);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn text_transforms_pass_other_kinds_through() {
        let upper = BuiltinTransform::Uppercase.into_transform(None);
        assert_eq!(upper.apply(&Value::from("admin")), Value::from("ADMIN"));
        assert_eq!(upper.apply(&Value::from(7)), Value::from(7));
        assert_eq!(upper.apply(&Value::Null), Value::Null);
    }

    #[test]
    fn iso_timestamp_renders_dates() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
        let transform = BuiltinTransform::IsoTimestamp.into_transform(None);
        assert_eq!(
            transform.apply(&Value::from(ts)),
            Value::from("2023-01-01T12:00:00.000Z")
        );
        assert_eq!(transform.apply(&Value::from("raw")), Value::from("raw"));
    }

    #[test]
    fn custom_transform_debug_shows_name() {
        let directive = FieldDirective::transform("double", |v| match v {
            Value::Int(i) => Value::Int(i * 2),
            other => other.clone(),
        });
        let rendered = format!("{directive:?}");
        assert!(rendered.contains("double"));
    }
}
