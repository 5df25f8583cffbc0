//! Template engine seam and the default Smarty-subset engine.
//!
//! The pipeline hands the engine a fully assembled set: the root body,
//! the caller's variables, and every transitively resolved partial. How
//! the engine interprets template syntax is its own business; the
//! resolution core never re-enters it.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{RenderError, Result};

/// Default ceiling on include nesting for [`SmartyEngine`]. A render-time
/// include cycle shows up as this limit being exceeded.
pub const MAX_INCLUDE_DEPTH: usize = 10;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("tag pattern compiles"));

static FILE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"file\s*=\s*(?:"([^"]+)"|'([^']+)')"#).expect("file attribute pattern compiles")
});

/// Renders a template body given named partial bodies and render variables.
pub trait TemplateEngine: Send + Sync {
    /// Render `body`, splicing from `partials` where the syntax demands it.
    ///
    /// `engine_settings` is the opaque engine-specific settings bag from
    /// the caller; engines are free to ignore it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::EngineFailure`] (or an engine-specific
    /// variant) when the assembled template set cannot be rendered.
    fn render(
        &self,
        body: &str,
        variables: &Map<String, Value>,
        partials: &HashMap<String, String>,
        engine_settings: &Value,
    ) -> Result<String>;
}

/// Minimal Smarty-subset engine.
///
/// Supported syntax:
/// - `{name}` or `{$name}` interpolates a variable; missing variables
///   render as the empty string, Smarty-style.
/// - `{include file="p"}` splices the named partial's rendered body.
/// - `{extends file="l"}` is spliced the same way. Because the loader
///   prefixes the directive to the root body, the layout renders ahead
///   of the page content (simplified extends, no block inheritance).
///
/// The settings bag may carry `max_include_depth` to override
/// [`MAX_INCLUDE_DEPTH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartyEngine;

impl SmartyEngine {
    /// Create the default engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn render_body(
        &self,
        body: &str,
        variables: &Map<String, Value>,
        partials: &HashMap<String, String>,
        depth: usize,
        limit: usize,
    ) -> Result<String> {
        let mut out = String::with_capacity(body.len());
        let mut cursor = 0;

        for caps in TAG.captures_iter(body) {
            let tag_match = caps.get(0).expect("capture 0 is the whole match");
            out.push_str(&body[cursor..tag_match.start()]);
            cursor = tag_match.end();

            let tag = caps[1].trim();
            if tag.starts_with("include ") || tag.starts_with("extends ") {
                let name = FILE_ATTR
                    .captures(tag)
                    .and_then(|attr| attr.get(1).or_else(|| attr.get(2)))
                    .map(|m| m.as_str())
                    .ok_or_else(|| RenderError::EngineFailure {
                        detail: format!("malformed tag: {{{tag}}}"),
                    })?;
                if depth >= limit {
                    return Err(RenderError::IncludeDepthExceeded {
                        name: name.to_string(),
                        limit,
                    });
                }
                let partial = partials.get(name).ok_or_else(|| RenderError::EngineFailure {
                    detail: format!("unknown partial '{name}'"),
                })?;
                out.push_str(&self.render_body(partial, variables, partials, depth + 1, limit)?);
            } else {
                let key = tag.strip_prefix('$').unwrap_or(tag);
                out.push_str(&variable_text(variables.get(key)));
            }
        }

        out.push_str(&body[cursor..]);
        Ok(out)
    }
}

impl TemplateEngine for SmartyEngine {
    fn render(
        &self,
        body: &str,
        variables: &Map<String, Value>,
        partials: &HashMap<String, String>,
        engine_settings: &Value,
    ) -> Result<String> {
        let limit = engine_settings
            .get("max_include_depth")
            .and_then(Value::as_u64)
            .map_or(MAX_INCLUDE_DEPTH, |v| v as usize);
        self.render_body(body, variables, partials, 0, limit)
    }
}

fn variable_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
