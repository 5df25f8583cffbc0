//! Fixpoint resolution of the partial-reference graph.
//!
//! Discovery runs in waves rather than by recursion: every name in the
//! current frontier is loaded concurrently, the references those loads
//! uncover are merged, and already-resolved names are subtracted before
//! the next wave starts. The resolved set only grows and the frontier is
//! always disjoint from it, which is what makes shared and cyclic
//! references both safe and single-loaded.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use futures::future;
use tokio::sync::Mutex;

use crate::error::{RenderError, Result};
use crate::fragment::Fragment;
use crate::loader::load_fragment;
use crate::scanner::ReferenceScanner;
use crate::store::FragmentStore;

/// Resolve every partial reachable from `initial_references`.
///
/// Partial names are resolved to locations by joining them onto
/// `base_directory`. Within a wave all loads run concurrently; waves are
/// strictly sequenced. Any individual load failure aborts the whole
/// resolution and discards partial results.
///
/// The returned mapping from partial name to body is unordered by
/// contract; only membership and values matter.
///
/// # Errors
///
/// Propagates the first load or scan failure encountered.
pub async fn resolve_all<S: ReferenceScanner>(
    initial_references: &HashSet<String>,
    base_directory: &Path,
    cache_enabled: bool,
    store: Option<&Mutex<FragmentStore>>,
    scanner: &S,
) -> Result<HashMap<String, String>> {
    let mut resolved: HashMap<String, String> = HashMap::new();
    let mut frontier: HashSet<String> = initial_references.clone();
    let mut wave = 0usize;

    while !frontier.is_empty() {
        wave += 1;
        tracing::debug!(wave, pending = frontier.len(), "resolving partial wave");

        let loads = frontier.iter().map(|name| {
            let name = name.clone();
            let location = base_directory.join(&name);
            async move {
                let fragment = load_fragment(
                    Some(name.as_str()),
                    &location,
                    None,
                    cache_enabled,
                    store,
                    scanner,
                )
                .await?;
                Ok::<(String, Fragment), RenderError>((name, fragment))
            }
        });
        let fragments = future::try_join_all(loads).await?;

        let mut discovered: HashSet<String> = HashSet::new();
        for (name, fragment) in fragments {
            discovered.extend(fragment.direct_references.iter().cloned());
            resolved.insert(name, fragment.body);
        }

        frontier = discovered
            .into_iter()
            .filter(|name| !resolved.contains_key(name))
            .collect();
    }

    tracing::debug!(partials = resolved.len(), waves = wave, "partial resolution complete");
    Ok(resolved)
}
