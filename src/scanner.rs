//! Partial-reference extraction from raw template text.
//!
//! The scanner answers one question: which partials does this template
//! body mention directly? It is non-transitive and order-free; the
//! resolver drives it to a fixpoint across the whole reference graph.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Matches `{include file="name"}` and `{extends file="name"}` tags with
/// single- or double-quoted file attributes and optional extra attributes.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\s*(?:include|extends)\s+file\s*=\s*(?:"([^"]+)"|'([^']+)')"#)
        .expect("tag pattern compiles")
});

/// Extracts the set of partial names a template body references directly.
///
/// Implementations must be pure with respect to the text: same input,
/// same reference set, no I/O.
pub trait ReferenceScanner: Send + Sync {
    /// Scan `text` and return the deduplicated set of referenced names.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RenderError::ScanFailure`] if the text cannot be
    /// processed. Scan failures are fatal to the render.
    fn scan(&self, text: &str) -> Result<HashSet<String>>;
}

/// Default scanner for the Smarty tag dialect.
///
/// Both `include` and `extends` tags produce references, so a
/// layout-directive prefix on a root body is discovered as a dependency
/// like any other partial.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartyScanner;

impl SmartyScanner {
    /// Create the default scanner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReferenceScanner for SmartyScanner {
    fn scan(&self, text: &str) -> Result<HashSet<String>> {
        let mut references = HashSet::new();
        for capture in TAG_PATTERN.captures_iter(text) {
            if let Some(name) = capture.get(1).or_else(|| capture.get(2)) {
                references.insert(name.as_str().to_string());
            }
        }
        tracing::trace!(count = references.len(), "scanned template for references");
        Ok(references)
    }
}
