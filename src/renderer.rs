//! The render pipeline: root load, partial resolution, engine hand-off.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::engine::{SmartyEngine, TemplateEngine};
use crate::error::Result;
use crate::loader::load_fragment;
use crate::options::RenderOptions;
use crate::resolver::resolve_all;
use crate::scanner::{ReferenceScanner, SmartyScanner};
use crate::store::FragmentStore;

/// A view renderer: one fragment cache, one scanner, one engine.
///
/// Rendering loads the root template, resolves every partial it
/// transitively references, and hands the assembled set to the engine.
/// The cache is owned exclusively by this renderer; callers may grab a
/// handle to [`reset`](FragmentStore::reset) it, or detach it to disable
/// caching for this renderer altogether.
pub struct Renderer<S = SmartyScanner, E = SmartyEngine> {
    default_view_directory: Option<PathBuf>,
    cache: Option<Arc<Mutex<FragmentStore>>>,
    scanner: S,
    engine: E,
}

impl Renderer {
    /// Create a renderer with the default Smarty scanner and engine.
    ///
    /// When `default_view_directory` is set it takes precedence over the
    /// per-render `settings.views` directory.
    #[must_use]
    pub fn new(default_view_directory: Option<PathBuf>) -> Self {
        Self::with_parts(default_view_directory, SmartyScanner::new(), SmartyEngine::new())
    }
}

impl<S: ReferenceScanner, E: TemplateEngine> Renderer<S, E> {
    /// Create a renderer around a custom scanner and engine.
    #[must_use]
    pub fn with_parts(default_view_directory: Option<PathBuf>, scanner: S, engine: E) -> Self {
        Self {
            default_view_directory,
            cache: Some(Arc::new(Mutex::new(FragmentStore::new()))),
            scanner,
            engine,
        }
    }

    /// Handle to this renderer's fragment cache, if still attached.
    ///
    /// Hold it to call [`FragmentStore::reset`] between renders.
    #[must_use]
    pub fn cache(&self) -> Option<Arc<Mutex<FragmentStore>>> {
        self.cache.clone()
    }

    /// Detach the fragment cache, disabling caching for this renderer.
    ///
    /// Rendering without a cache is not an error; every fragment is
    /// simply re-read from storage on each call.
    pub fn detach_cache(&mut self) {
        self.cache = None;
    }

    /// Render the template at `root_path` with the given options.
    ///
    /// The partial base directory is the constructor's default directory
    /// when set, otherwise `settings.views`; with neither, partial names
    /// resolve relative to the process working directory.
    ///
    /// # Errors
    ///
    /// Propagates fragment-load, scan, and engine failures; any of them
    /// aborts the render with no partial output.
    pub async fn render(
        &self,
        root_path: impl AsRef<Path>,
        options: &RenderOptions,
    ) -> Result<String> {
        let root_path = root_path.as_ref();
        let settings = &options.settings;
        let cache_enabled = settings.cache_enabled();
        let layout_directive = settings.layout_directive();
        let view_directory = self
            .default_view_directory
            .clone()
            .or_else(|| settings.views.clone())
            .unwrap_or_default();
        let store = self.cache.as_deref();

        tracing::debug!(
            root = %root_path.display(),
            views = %view_directory.display(),
            cache_enabled,
            layout = layout_directive.as_deref().unwrap_or("none"),
            "rendering view"
        );

        let root = load_fragment(
            None,
            root_path,
            layout_directive.as_deref(),
            cache_enabled,
            store,
            &self.scanner,
        )
        .await?;

        let partials = resolve_all(
            &root.direct_references,
            &view_directory,
            cache_enabled,
            store,
            &self.scanner,
        )
        .await?;

        self.engine
            .render(&root.body, &options.variables, &partials, &settings.engine_settings)
    }
}
