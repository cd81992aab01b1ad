//! User entity model, DTOs and response projections.
//!
//! [`User`] carries the password hash and deliberately does not implement
//! `Serialize`; responses go through [`UserView`], [`CreatedUser`] or
//! [`UpdatedUser`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sceneboard_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::store::Record;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    /// Argon2id PHC string.
    pub password: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
///
/// `password` holds the plaintext on the way in; the API layer replaces it
/// with a hash before the DTO reaches a repository.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub name: Option<String>,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// DTO for updating a user. Only `email` and `name` may change; empty
/// strings are treated as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub name: Option<String>,
}

/// List/read projection: everything except the password.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create response projection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub created_at: Timestamp,
}

/// Update response projection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedUser {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub updated_at: Timestamp,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for CreatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UpdatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            updated_at: user.updated_at,
        }
    }
}

impl Record for User {
    type Create = CreateUser;
    type Update = UpdateUser;

    const TABLE: &'static str = "users";
    const UNIQUE_FIELD: &'static str = "email";

    fn id(&self) -> DbId {
        self.id
    }

    fn unique_key(&self) -> &str {
        &self.email
    }
}
