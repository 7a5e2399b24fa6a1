//! Page views and the shell that wraps them.
//!
//! DESIGN
//! ======
//! A `View` is an already-rendered HTML fragment plus the identifiers the
//! shell needs (route name and document title). Tool views are produced by a
//! `ViewLoader` on first navigation; the home, not-found and load-error pages
//! are leptos components in `pages`.

pub mod catalog;
pub mod loader;
pub mod pages;

/// A renderable page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Route name this view was produced for.
    pub name: String,
    /// Document title shown in the browser tab and the page header.
    pub title: String,
    /// HTML fragment placed inside the shell's `<main>` element.
    pub body: String,
}

impl View {
    #[must_use]
    pub fn new(name: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { name: name.into(), title: title.into(), body: body.into() }
    }
}
