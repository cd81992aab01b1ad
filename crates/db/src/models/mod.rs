//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! JSON field names are camelCase; columns are snake_case.

pub mod character;
pub mod scene;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, mapping `""` to `None`.
///
/// Used on patch DTOs where an empty value means "leave unchanged".
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Deserialize a nullable patch field, keeping "absent" and `null` apart.
///
/// Pair with `#[serde(default)]`: an absent field stays `None`, `null`
/// becomes `Some(None)` and a value becomes `Some(Some(v))`.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
