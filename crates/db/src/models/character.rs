//! Character entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sceneboard_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::store::Record;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub image: String,
    pub description: Option<String>,
    /// References `scenes.id`.
    pub scene_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacter {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: String,
    pub description: Option<String>,
    pub scene_id: DbId,
}

/// DTO for updating an existing character. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacter {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: Option<String>,
    /// `Some(None)` clears the description.
    #[serde(default, deserialize_with = "super::nullable")]
    pub description: Option<Option<String>>,
    pub scene_id: Option<DbId>,
}

impl Record for Character {
    type Create = CreateCharacter;
    type Update = UpdateCharacter;

    const TABLE: &'static str = "characters";
    const UNIQUE_FIELD: &'static str = "name";

    fn id(&self) -> DbId {
        self.id
    }

    fn unique_key(&self) -> &str {
        &self.name
    }
}
