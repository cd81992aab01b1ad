//! Request handlers.
//!
//! [`resource`] holds the list/read/create/update/delete handlers shared by
//! every REST resource; they delegate to [`crate::service::ResourceService`]
//! and map storage errors via [`crate::error::AppError`].

pub mod resource;
