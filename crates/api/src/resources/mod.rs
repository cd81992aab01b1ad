//! REST resource definitions.
//!
//! A [`Resource`] ties a table to its request DTOs, its response
//! projections and its labels. The generic service, handlers and router
//! are written once against this trait; each submodule only declares what
//! differs between users, characters and scenes.

pub mod character;
pub mod scene;
pub mod user;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sceneboard_core::resource::Labels;
use sceneboard_db::{Record, Repository, Store};
use validator::Validate;

use crate::error::AppResult;

pub use character::Characters;
pub use scene::Scenes;
pub use user::Users;

pub trait Resource: Send + Sync + 'static {
    /// Stored row type.
    type Entity: Record<Create = Self::Create, Update = Self::Update>;
    /// Create payload, as read from the request body.
    type Create: DeserializeOwned + Validate + Send + Sync + 'static;
    /// Partial update payload, as read from the request body.
    type Update: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Projection returned by list, read and delete.
    type View: Serialize + From<Self::Entity> + Send + 'static;
    /// Projection returned by create.
    type Created: Serialize + From<Self::Entity> + Send + 'static;
    /// Projection returned by update.
    type Updated: Serialize + From<Self::Entity> + Send + 'static;

    const LABELS: Labels;
    /// Mount point below the API prefix, e.g. `/users`.
    const PATH: &'static str;

    fn repository(store: &dyn Store) -> &dyn Repository<Self::Entity>;

    /// Runs on a validated create payload before it reaches storage.
    fn prepare_create(input: Self::Create) -> AppResult<Self::Create> {
        Ok(input)
    }
}
