//! Storage port consumed by the HTTP layer.
//!
//! Services never talk to `sqlx` directly. They hold an `Arc<dyn Store>` and
//! reach each table through a [`Repository`], so the PostgreSQL adapter
//! ([`crate::pg::PgStore`]) and the in-memory adapter
//! ([`crate::memory::MemoryStore`]) are interchangeable.
//!
//! Adapters translate whatever their backend reports into [`StoreError`],
//! which keeps "record not found" and "unique constraint violated" distinct
//! from every other failure.

use async_trait::async_trait;
use sceneboard_core::types::DbId;

use crate::models::character::Character;
use crate::models::scene::Scene;
use crate::models::user::User;

/// Errors reported by a storage adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The addressed row does not exist.
    #[error("record not found")]
    NotFound,

    /// A unique constraint rejected the write. `field` is the column name.
    #[error("unique constraint violated on `{field}`")]
    UniqueViolation { field: String },

    /// A foreign key rejected the write or delete.
    #[error("foreign key constraint `{constraint}` violated")]
    ForeignKeyViolation { constraint: String },

    /// The backend could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A row type managed through a [`Repository`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Insert payload.
    type Create: Send + Sync;
    /// Partial update payload; `None` fields are left unchanged.
    type Update: Send + Sync;

    /// Table name, also the middle segment of its constraint names.
    const TABLE: &'static str;
    /// Column carrying the table's unique constraint.
    const UNIQUE_FIELD: &'static str;

    fn id(&self) -> DbId;

    /// Value of [`Self::UNIQUE_FIELD`] for this row.
    fn unique_key(&self) -> &str;
}

/// CRUD access to one table.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// All rows, ascending by id.
    async fn find_many(&self) -> StoreResult<Vec<R>>;

    /// The row with `id`, or `None`.
    async fn find_unique(&self, id: DbId) -> StoreResult<Option<R>>;

    async fn create(&self, input: &R::Create) -> StoreResult<R>;

    /// Apply `input` to the row with `id`. Fails with [`StoreError::NotFound`]
    /// when no such row exists.
    async fn update(&self, id: DbId, input: &R::Update) -> StoreResult<R>;

    /// Remove the row with `id` and return it. Fails with
    /// [`StoreError::NotFound`] when no such row exists.
    async fn delete(&self, id: DbId) -> StoreResult<R>;
}

/// The full storage backend: one repository per table plus a liveness probe.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    fn users(&self) -> &dyn Repository<User>;
    fn characters(&self) -> &dyn Repository<Character>;
    fn scenes(&self) -> &dyn Repository<Scene>;

    /// Run a trivial query to confirm the backend answers.
    async fn ping(&self) -> StoreResult<()>;
}
