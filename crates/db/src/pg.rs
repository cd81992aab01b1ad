//! PostgreSQL adapter for the storage port.
//!
//! [`PgStore`] delegates to the zero-sized repositories and classifies
//! `sqlx` errors into [`StoreError`] using PostgreSQL SQLSTATE codes.

use async_trait::async_trait;
use sceneboard_core::types::DbId;

use crate::models::character::Character;
use crate::models::scene::Scene;
use crate::models::user::User;
use crate::repositories::{CharacterRepo, SceneRepo, UserRepo};
use crate::store::{Record, Repository, Store, StoreError, StoreResult};
use crate::DbPool;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Storage backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Translate a `sqlx` error raised while operating on `R`'s table.
///
/// - `RowNotFound` maps to [`StoreError::NotFound`].
/// - SQLSTATE 23505 maps to [`StoreError::UniqueViolation`], with the column
///   taken from a `uq_<table>_<column>` constraint name.
/// - SQLSTATE 23503 maps to [`StoreError::ForeignKeyViolation`].
/// - Everything else is passed through as [`StoreError::Database`].
pub fn classify_sqlx_error<R: Record>(err: sqlx::Error) -> StoreError {
    let (code, constraint) = match &err {
        sqlx::Error::RowNotFound => return StoreError::NotFound,
        sqlx::Error::Database(db_err) => (
            db_err.code().map(|c| c.into_owned()),
            db_err.constraint().map(str::to_owned),
        ),
        _ => (None, None),
    };

    match code.as_deref() {
        Some(UNIQUE_VIOLATION) => {
            let field = constraint
                .as_deref()
                .and_then(|c| column_from_constraint(R::TABLE, c))
                .unwrap_or(R::UNIQUE_FIELD);
            tracing::debug!(table = R::TABLE, field, "Unique constraint violated");
            StoreError::UniqueViolation {
                field: field.to_string(),
            }
        }
        Some(FOREIGN_KEY_VIOLATION) => {
            let constraint = constraint.unwrap_or_else(|| "unknown".to_string());
            tracing::debug!(table = R::TABLE, %constraint, "Foreign key constraint violated");
            StoreError::ForeignKeyViolation { constraint }
        }
        _ => StoreError::Database(err),
    }
}

/// Extract `<column>` from a `uq_<table>_<column>` constraint name.
fn column_from_constraint<'a>(table: &str, constraint: &'a str) -> Option<&'a str> {
    constraint
        .strip_prefix("uq_")?
        .strip_prefix(table)?
        .strip_prefix('_')
        .filter(|column| !column.is_empty())
}

/// Implements [`Repository`] for one table by delegating to its repo struct.
macro_rules! pg_repository {
    ($record:ty, $repo:ident) => {
        #[async_trait]
        impl Repository<$record> for PgStore {
            async fn find_many(&self) -> StoreResult<Vec<$record>> {
                $repo::list(&self.pool)
                    .await
                    .map_err(classify_sqlx_error::<$record>)
            }

            async fn find_unique(&self, id: DbId) -> StoreResult<Option<$record>> {
                $repo::find_by_id(&self.pool, id)
                    .await
                    .map_err(classify_sqlx_error::<$record>)
            }

            async fn create(&self, input: &<$record as Record>::Create) -> StoreResult<$record> {
                $repo::create(&self.pool, input)
                    .await
                    .map_err(classify_sqlx_error::<$record>)
            }

            async fn update(
                &self,
                id: DbId,
                input: &<$record as Record>::Update,
            ) -> StoreResult<$record> {
                $repo::update(&self.pool, id, input)
                    .await
                    .map_err(classify_sqlx_error::<$record>)?
                    .ok_or(StoreError::NotFound)
            }

            async fn delete(&self, id: DbId) -> StoreResult<$record> {
                $repo::delete(&self.pool, id)
                    .await
                    .map_err(classify_sqlx_error::<$record>)?
                    .ok_or(StoreError::NotFound)
            }
        }
    };
}

pg_repository!(User, UserRepo);
pg_repository!(Character, CharacterRepo);
pg_repository!(Scene, SceneRepo);

#[async_trait]
impl Store for PgStore {
    fn users(&self) -> &dyn Repository<User> {
        self
    }

    fn characters(&self) -> &dyn Repository<Character> {
        self
    }

    fn scenes(&self) -> &dyn Repository<Scene> {
        self
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
