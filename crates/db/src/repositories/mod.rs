//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument and return raw `sqlx`
//! results. [`crate::pg::PgStore`] wraps them behind the storage port.

pub mod character_repo;
pub mod scene_repo;
pub mod user_repo;

pub use character_repo::CharacterRepo;
pub use scene_repo::SceneRepo;
pub use user_repo::UserRepo;
