//! smarty-views - Express-style view rendering for Smarty templates
//!
//! This crate is a template-rendering adapter: given a root template file it
//! resolves and loads every partial the template transitively references,
//! composes them with an optional layout wrapper, and hands the assembled
//! set to a templating engine for rendering.
//!
//! # Architecture Overview
//!
//! The core of the crate is the partial-reference resolution and caching
//! subsystem:
//! - Discovery runs as an iterative fixpoint over explicit frontier and
//!   resolved sets, so shared and cyclic references terminate and each
//!   fragment is loaded at most once per render.
//! - Loads within one discovery wave are issued concurrently and joined
//!   before the next wave starts.
//! - Loaded fragments are cached per renderer in a size-weighted LRU store
//!   keyed by resolved path; the cache is advisory and never changes
//!   rendered output, only load frequency.
//!
//! # Core Modules
//!
//! - [`fragment`] - The loaded-template data model
//! - [`store`] - Size-weighted LRU fragment cache
//! - [`scanner`] - Partial-reference extraction from template text
//! - [`loader`] - Cache-aware single-fragment loading
//! - [`resolver`] - Fixpoint resolution of the reference graph
//! - [`engine`] - Template engine seam and the default Smarty-subset engine
//! - [`options`] - Render variables and the host settings bag
//! - [`renderer`] - The render pipeline tying it all together
//! - [`error`] - Failure taxonomy
//!
//! # Example
//!
//! ```rust,no_run
//! use smarty_views::{Renderer, RenderOptions};
//!
//! # async fn example() -> smarty_views::Result<()> {
//! let renderer = Renderer::new(Some("views".into()));
//! let options = RenderOptions::new().variable("name", "World");
//! let html = renderer.render("views/index.smarty", &options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Repeated renders reuse the fragment cache; hold the handle from
//! [`Renderer::cache`] to reset it when the underlying files change, or
//! call [`Renderer::detach_cache`] to disable caching entirely.

pub mod engine;
pub mod error;
pub mod fragment;
pub mod loader;
pub mod options;
pub mod renderer;
pub mod resolver;
pub mod scanner;
pub mod store;

pub use engine::{SmartyEngine, TemplateEngine};
pub use error::{RenderError, Result};
pub use fragment::Fragment;
pub use options::{RenderOptions, Settings};
pub use renderer::Renderer;
pub use scanner::{ReferenceScanner, SmartyScanner};
pub use store::FragmentStore;
