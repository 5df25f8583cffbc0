//! Error handling for smarty-views.
//!
//! Every failure aborts the in-flight render and is surfaced to the caller;
//! there is no retry and no partial output. A renderer with its cache detached
//! is a policy choice, not an error condition, so nothing here models it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Failures surfaced by a render call.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template or partial could not be read from the filesystem.
    #[error("template not found: {path}")]
    TemplateNotFound {
        /// Resolved path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The reference scanner could not process template text.
    #[error("failed to scan template for partial references: {detail}")]
    ScanFailure {
        /// Scanner-provided description of the malformed input.
        detail: String,
    },

    /// The template engine rejected the assembled template set.
    #[error("template engine failed: {detail}")]
    EngineFailure {
        /// Engine-provided description of the failure.
        detail: String,
    },

    /// The default engine hit its include-depth limit, which is how a
    /// render-time include cycle manifests.
    #[error("include depth limit of {limit} exceeded while rendering '{name}'")]
    IncludeDepthExceeded {
        /// Partial being spliced when the limit was hit.
        name: String,
        /// Configured depth limit.
        limit: usize,
    },

    /// The caller-supplied options bag could not be interpreted.
    #[error("invalid render options: {detail}")]
    InvalidOptions {
        /// Description of the malformed options.
        detail: String,
    },
}
