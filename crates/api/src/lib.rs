//! Sceneboard API server library.
//!
//! Exposes the building blocks (config, state, error handling, resources,
//! routes) so integration tests and the binary entrypoint share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod resources;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
