//! The loaded-template data model.

use std::collections::HashSet;
use std::path::PathBuf;

/// A loaded template unit: the root template, a partial, or a layout.
///
/// A fragment's `body` and `direct_references` are always consistent:
/// the references are recomputed from the body every time the body is
/// (re)loaded, never cached independently of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The partial's logical name; `None` for the root fragment.
    pub identity: Option<String>,
    /// Resolved filesystem path, used as the cache key.
    pub location: PathBuf,
    /// Raw template text. For the root fragment this may carry a
    /// layout-directive prefix.
    pub body: String,
    /// Partial names this fragment's body mentions directly
    /// (non-transitive, deduplicated).
    pub direct_references: HashSet<String>,
}

impl Fragment {
    /// Cache weight of this fragment: the byte length of its body.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.body.len()
    }
}
