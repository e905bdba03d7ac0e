//! Options controlling a single mapping call.

use serde::{Deserialize, Serialize};

/// Default nesting limit for [`MapOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Per-call mapping options.
///
/// The defaults reproduce plain name-for-name copying: no required-field
/// check and no rename/transform/ignore handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Validate required target fields against the source before copying.
    pub strict_mapping: bool,
    /// Honour rename, transform and ignore directives after copying.
    pub apply_directives: bool,
    /// Deepest nesting of objects/arrays the copy will walk.
    pub max_depth: usize,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            strict_mapping: false,
            apply_directives: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MapOptions {
    /// Defaults with strict mapping turned on.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_strict_mapping(true)
    }

    #[must_use]
    pub fn with_strict_mapping(mut self, enable: bool) -> Self {
        self.strict_mapping = enable;
        self
    }

    #[must_use]
    pub fn with_apply_directives(mut self, enable: bool) -> Self {
        self.apply_directives = enable;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
