//! Scene entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sceneboard_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::store::Record;

/// A row from the `scenes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new scene.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateScene {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: String,
}

/// DTO for updating an existing scene. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateScene {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    #[serde(default, deserialize_with = "super::nullable")]
    pub description: Option<Option<String>>,
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: Option<String>,
}

impl Record for Scene {
    type Create = CreateScene;
    type Update = UpdateScene;

    const TABLE: &'static str = "scenes";
    const UNIQUE_FIELD: &'static str = "title";

    fn id(&self) -> DbId {
        self.id
    }

    fn unique_key(&self) -> &str {
        &self.title
    }
}
