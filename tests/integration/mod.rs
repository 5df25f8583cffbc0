//! Integration test suite for smarty-views.
//!
//! End-to-end tests driving the public [`smarty_views::Renderer`] API
//! against real template files in temporary view directories.

mod common;

mod cache_tests;
