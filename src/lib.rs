//! Developer tools web shell.
//!
//! A single Axum server hosts many independent tool pages behind one
//! navigation shell. The route table maps each URL path to a view; the home
//! page is bound at startup and every tool page is loaded on first visit.

pub mod config;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
