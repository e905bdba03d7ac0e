//! Recursive field copy.
//!
//! Fields are matched by identical name and driven by the source's shape:
//! every field present on the source is written to the target, fields absent
//! from the source keep whatever the target already holds.

use std::fmt::Write as _;

use objmap_model::{MapError, Object, Result, Value};

#[derive(Debug, Clone)]
enum Segment {
    Field(String),
    Index(usize),
}

/// Copies values for one mapping call, tracking the current field path so a
/// depth failure can say where it happened.
#[derive(Debug)]
pub(crate) struct Copier {
    max_depth: usize,
    path: Vec<Segment>,
}

impl Copier {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            path: Vec::new(),
        }
    }

    /// Copy every own field of `source` onto `target` and return the target.
    pub(crate) fn copy_object(&mut self, source: &Object, target: Object) -> Result<Object> {
        self.copy_object_at(source, target, 0)
    }

    /// Copy `value` as the content of field `key`.
    ///
    /// `existing` is the target's current value for the field; when it is an
    /// object and `value` is an object, it becomes the write base.
    pub(crate) fn copy_field(
        &mut self,
        key: &str,
        value: &Value,
        existing: Option<Value>,
        depth: usize,
    ) -> Result<Value> {
        self.path.push(Segment::Field(key.to_string()));
        let copied = self.copy_value(value, existing, depth)?;
        self.path.pop();
        Ok(copied)
    }

    fn copy_object_at(
        &mut self,
        source: &Object,
        mut target: Object,
        depth: usize,
    ) -> Result<Object> {
        self.check_depth(depth)?;
        for (key, value) in source.iter() {
            let existing = match value {
                Value::Object(_) => target.get_mut(key).map(std::mem::take),
                _ => None,
            };
            let copied = self.copy_field(key, value, existing, depth)?;
            target.insert(key, copied);
        }
        Ok(target)
    }

    fn copy_array(&mut self, items: &[Value], depth: usize) -> Result<Vec<Value>> {
        self.check_depth(depth)?;
        let mut out = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            self.path.push(Segment::Index(idx));
            // Array elements carry no type information: objects start from an empty base.
            out.push(self.copy_value(item, None, depth)?);
            self.path.pop();
        }
        Ok(out)
    }

    fn copy_value(
        &mut self,
        value: &Value,
        existing: Option<Value>,
        depth: usize,
    ) -> Result<Value> {
        match value {
            Value::Array(items) => Ok(Value::Array(self.copy_array(items, depth + 1)?)),
            Value::Object(nested) => {
                let base = match existing {
                    Some(Value::Object(base)) => base,
                    _ => Object::new(),
                };
                Ok(Value::Object(self.copy_object_at(nested, base, depth + 1)?))
            }
            primitive => Ok(primitive.clone()),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(MapError::DepthExceeded {
                max_depth: self.max_depth,
                path: self.render_path(),
            });
        }
        Ok(())
    }

    fn render_path(&self) -> String {
        if self.path.is_empty() {
            return "<root>".to_string();
        }
        let mut out = String::new();
        for segment in &self.path {
            match segment {
                Segment::Field(name) if out.is_empty() => out.push_str(name),
                Segment::Field(name) => {
                    out.push('.');
                    out.push_str(name);
                }
                Segment::Index(idx) => {
                    let _ = write!(out, "[{idx}]");
                }
            }
        }
        out
    }
}
