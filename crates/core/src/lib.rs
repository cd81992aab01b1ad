//! Shared primitives for the sceneboard workspace.
//!
//! Nothing in this crate performs I/O: it holds the id/timestamp aliases,
//! the domain error type, and the labels each resource uses in its
//! client-facing messages.

pub mod error;
pub mod resource;
pub mod types;
