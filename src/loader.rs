//! Loading a single fragment from storage, cache-aware.

use std::path::Path;

use tokio::sync::Mutex;

use crate::error::{RenderError, Result};
use crate::fragment::Fragment;
use crate::scanner::ReferenceScanner;
use crate::store::FragmentStore;

/// Load one fragment (root, partial, or layout) from `location`.
///
/// When caching is enabled and a store is attached, a cached entry for the
/// location is returned unchanged, skipping both the read and the scan. On a
/// miss the raw text is read, optionally prefixed with a layout directive
/// (root fragment only), scanned for direct references, and cached.
///
/// The layout directive is prepended *before* scanning so the layout itself
/// is discovered as a dependency of the root fragment.
///
/// # Errors
///
/// Returns [`RenderError::TemplateNotFound`] if the read fails, or a scan
/// failure from the scanner.
pub async fn load_fragment<S: ReferenceScanner>(
    identity: Option<&str>,
    location: &Path,
    layout_directive: Option<&str>,
    cache_enabled: bool,
    store: Option<&Mutex<FragmentStore>>,
    scanner: &S,
) -> Result<Fragment> {
    if cache_enabled {
        if let Some(store) = store {
            if let Some(cached) = store.lock().await.get(location) {
                tracing::debug!(location = %location.display(), "serving fragment from cache");
                return Ok(cached);
            }
        }
    }

    let raw = tokio::fs::read_to_string(location).await.map_err(|source| {
        RenderError::TemplateNotFound {
            path: location.to_path_buf(),
            source,
        }
    })?;

    let body = match layout_directive {
        Some(layout) => format!("{{extends file=\"{layout}\"}} {raw}"),
        None => raw,
    };

    let direct_references = scanner.scan(&body)?;
    tracing::debug!(
        location = %location.display(),
        bytes = body.len(),
        references = direct_references.len(),
        "loaded fragment"
    );

    let fragment = Fragment {
        identity: identity.map(str::to_string),
        location: location.to_path_buf(),
        body,
        direct_references,
    };

    if cache_enabled {
        if let Some(store) = store {
            store
                .lock()
                .await
                .set(location.to_path_buf(), fragment.clone());
        }
    }

    Ok(fragment)
}
