//! Render options and the host settings bag.
//!
//! The host hands a render call one bag of key/value pairs: arbitrary
//! render variables plus a reserved `settings` sub-bag. The settings keys
//! keep their host-facing spellings (`view engine`, `view cache`, ...)
//! via serde renames.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{RenderError, Result};

/// File extension assumed when the host does not configure `view engine`.
pub const DEFAULT_VIEW_EXTENSION: &str = "smarty";

/// The reserved `settings` sub-bag of a render call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Directory partials are resolved against, unless the renderer was
    /// constructed with a default directory.
    #[serde(default)]
    pub views: Option<PathBuf>,

    /// Template file extension, without the leading dot.
    #[serde(rename = "view engine", default)]
    pub view_engine: Option<String>,

    /// Layout base name; the directive becomes `<layout>.<extension>`.
    #[serde(default)]
    pub layout: Option<String>,

    /// Explicit cache policy. Caching is enabled unless this is `false`.
    #[serde(rename = "view cache", default)]
    pub view_cache: Option<bool>,

    /// Engine-specific options, passed through opaquely.
    #[serde(rename = "engine-settings", default)]
    pub engine_settings: Value,
}

impl Settings {
    /// Whether fragment caching is enabled for this render.
    #[must_use]
    pub fn cache_enabled(&self) -> bool {
        self.view_cache != Some(false)
    }

    /// Configured template extension, falling back to the default.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.view_engine.as_deref().unwrap_or(DEFAULT_VIEW_EXTENSION)
    }

    /// Layout directive (`<layout>.<extension>`) if a layout is selected.
    #[must_use]
    pub fn layout_directive(&self) -> Option<String> {
        self.layout
            .as_ref()
            .map(|layout| format!("{layout}.{}", self.extension()))
    }
}

/// Everything a single render call carries: variables plus settings.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Arbitrary key/value bag handed to the template engine.
    pub variables: Map<String, Value>,
    /// The reserved settings sub-bag.
    pub settings: Settings,
}

impl RenderOptions {
    /// Empty options: no variables, default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a render variable.
    #[must_use]
    pub fn variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Replace the settings sub-bag.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Split a host-style options object into variables and settings.
    ///
    /// The `settings` key is reserved and deserialized as [`Settings`];
    /// every other key is a render variable.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidOptions`] if the value is not an
    /// object or its `settings` entry does not match the contract.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut bag) = value else {
            return Err(RenderError::InvalidOptions {
                detail: "options must be a JSON object".to_string(),
            });
        };
        let settings = match bag.remove("settings") {
            Some(raw) => serde_json::from_value(raw).map_err(|e| RenderError::InvalidOptions {
                detail: format!("malformed settings: {e}"),
            })?,
            None => Settings::default(),
        };
        Ok(Self {
            variables: bag,
            settings,
        })
    }
}
