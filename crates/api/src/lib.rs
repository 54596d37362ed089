//! Project catalog HTTP server library.
//!
//! Exposes config, state, error handling, views, handlers and routes so
//! integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
