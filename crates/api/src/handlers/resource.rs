//! Generic handlers for every REST resource.
//!
//! Path ids arrive as text. Anything that is not a plain integer cannot
//! name a stored record, so it is answered like any other unknown id. That
//! includes segments axum cannot decode at all, such as invalid UTF-8.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sceneboard_core::error::CoreError;
use sceneboard_core::resource::Operation;
use sceneboard_core::types::{parse_db_id, DbId};
use sceneboard_db::StoreError;

use crate::error::{AppError, AppResult};
use crate::extract::Payload;
use crate::resources::Resource;
use crate::service::ResourceService;
use crate::state::AppState;

/// GET {base}/list
pub async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<R::View>>> {
    let items = ResourceService::<R>::new(state.store.as_ref())
        .list_all()
        .await
        .map_err(|err| classify::<R>(Operation::List, err))?;
    Ok(Json(items))
}

/// GET {base}/read/{id}
pub async fn read<R: Resource>(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<R::View>> {
    let id = path_id::<R>(raw_id)?;
    ResourceService::<R>::new(state.store.as_ref())
        .get_by_id(id)
        .await
        .map_err(|err| classify::<R>(Operation::Read, err))?
        .map(Json)
        .ok_or_else(not_found::<R>)
}

/// POST {base}/write
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Payload(input): Payload<R::Create>,
) -> AppResult<(StatusCode, Json<R::Created>)> {
    let input = R::prepare_create(input)?;
    let created = ResourceService::<R>::new(state.store.as_ref())
        .create(&input)
        .await
        .map_err(|err| classify::<R>(Operation::Create, err))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH {base}/update/{id}
///
/// Only the fields present in the body are changed.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    Payload(input): Payload<R::Update>,
) -> AppResult<Json<R::Updated>> {
    let id = path_id::<R>(raw_id)?;
    let updated = ResourceService::<R>::new(state.store.as_ref())
        .update(id, &input)
        .await
        .map_err(|err| classify::<R>(Operation::Update, err))?;
    Ok(Json(updated))
}

/// DELETE {base}/delete/{id}
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = path_id::<R>(raw_id)?;
    ResourceService::<R>::new(state.store.as_ref())
        .delete(id)
        .await
        .map_err(|err| classify::<R>(Operation::Delete, err))?;
    tracing::debug!(resource = R::LABELS.plural, id, "Record deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn not_found<R: Resource>() -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::LABELS.entity,
    })
}

fn path_id<R: Resource>(raw_id: Result<Path<String>, PathRejection>) -> AppResult<DbId> {
    let Path(raw) = raw_id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Undecodable path id");
        not_found::<R>()
    })?;
    parse_id::<R>(&raw)
}

fn parse_id<R: Resource>(raw: &str) -> AppResult<DbId> {
    parse_db_id(raw).ok_or_else(not_found::<R>)
}

/// Translate a storage error raised during `op` into an HTTP error.
///
/// This is the single place where storage conditions gain HTTP meaning.
/// Unclassified failures are logged with their cause and answered with the
/// resource's generic message for `op`.
pub fn classify<R: Resource>(op: Operation, err: StoreError) -> AppError {
    let labels = R::LABELS;
    let core = match (op, err) {
        (Operation::Read | Operation::Update | Operation::Delete, StoreError::NotFound) => {
            CoreError::NotFound {
                entity: labels.entity,
            }
        }
        (Operation::Create | Operation::Update, StoreError::UniqueViolation { field }) => {
            CoreError::Duplicate {
                entity: labels.entity,
                field,
            }
        }
        (Operation::Create | Operation::Update, StoreError::ForeignKeyViolation { .. }) => {
            CoreError::InvalidReference {
                entity: labels.entity,
            }
        }
        (Operation::Delete, StoreError::ForeignKeyViolation { .. }) => CoreError::StillReferenced {
            entity: labels.entity,
        },
        (op, err) => {
            tracing::error!(
                resource = labels.plural,
                operation = %op,
                error = %err,
                "Storage operation failed"
            );
            CoreError::Internal(labels.failure_message(op))
        }
    };
    AppError::Core(core)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::resources::{Characters, Scenes, Users};

    #[test]
    fn not_found_during_update_is_404() {
        let err = classify::<Users>(Operation::Update, StoreError::NotFound);
        assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "User" }));
    }

    #[test]
    fn unique_violation_names_the_field() {
        let err = classify::<Scenes>(
            Operation::Create,
            StoreError::UniqueViolation {
                field: "title".into(),
            },
        );
        assert_eq!(err.to_string(), "A scene with this title already exists");
    }

    #[test]
    fn foreign_key_violation_depends_on_operation() {
        let fk = || StoreError::ForeignKeyViolation {
            constraint: "fk_characters_scene_id".into(),
        };
        assert_matches!(
            classify::<Characters>(Operation::Create, fk()),
            AppError::Core(CoreError::InvalidReference { .. })
        );
        assert_matches!(
            classify::<Scenes>(Operation::Delete, fk()),
            AppError::Core(CoreError::StillReferenced { .. })
        );
    }

    #[test]
    fn unclassified_failure_uses_generic_message() {
        let err = classify::<Characters>(
            Operation::List,
            StoreError::Unavailable("connection refused".into()),
        );
        assert_matches!(err, AppError::Core(CoreError::Internal(ref msg)) if msg == "Error fetching characters");
    }

    #[test]
    fn non_numeric_path_id_is_not_found() {
        assert_matches!(
            parse_id::<Scenes>("abc"),
            Err(AppError::Core(CoreError::NotFound { entity: "Scene" }))
        );
        assert_eq!(parse_id::<Scenes>("12").unwrap(), 12);
    }
}
