//! In-memory adapter for the storage port.
//!
//! Mirrors the PostgreSQL schema closely enough for handler tests and local
//! experiments: ids are assigned sequentially per table, unique columns are
//! enforced, `characters.scene_id` must point at an existing scene, and a
//! scene cannot be deleted while characters reference it. The store can be
//! switched offline to simulate an unreachable database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use sceneboard_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};
use crate::models::scene::{CreateScene, Scene, UpdateScene};
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::store::{Record, Repository, Store, StoreError, StoreResult};

const CHARACTER_SCENE_FK: &str = "fk_characters_scene_id";

/// A [`Record`] that can be built and patched without a database.
trait MemoryRecord: Record {
    fn build(id: DbId, input: &Self::Create, now: Timestamp) -> Self;
    fn apply(&mut self, input: &Self::Update, now: Timestamp);
}

impl MemoryRecord for User {
    fn build(id: DbId, input: &CreateUser, now: Timestamp) -> Self {
        Self {
            id,
            email: input.email.clone(),
            name: input.name.clone(),
            password: input.password.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, input: &UpdateUser, now: Timestamp) {
        if let Some(email) = &input.email {
            self.email = email.clone();
        }
        if let Some(name) = &input.name {
            self.name = Some(name.clone());
        }
        self.updated_at = now;
    }
}

impl MemoryRecord for Scene {
    fn build(id: DbId, input: &CreateScene, now: Timestamp) -> Self {
        Self {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            image: input.image.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, input: &UpdateScene, now: Timestamp) {
        if let Some(title) = &input.title {
            self.title = title.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(image) = &input.image {
            self.image = image.clone();
        }
        self.updated_at = now;
    }
}

impl MemoryRecord for Character {
    fn build(id: DbId, input: &CreateCharacter, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name.clone(),
            image: input.image.clone(),
            description: input.description.clone(),
            scene_id: input.scene_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, input: &UpdateCharacter, now: Timestamp) {
        if let Some(name) = &input.name {
            self.name = name.clone();
        }
        if let Some(image) = &input.image {
            self.image = image.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(scene_id) = input.scene_id {
            self.scene_id = scene_id;
        }
        self.updated_at = now;
    }
}

/// One table: rows keyed by id plus the last id handed out.
struct Table<R> {
    rows: BTreeMap<DbId, R>,
    last_id: DbId,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<R: MemoryRecord> Table<R> {
    fn list(&self) -> Vec<R> {
        self.rows.values().cloned().collect()
    }

    fn get(&self, id: DbId) -> Option<R> {
        self.rows.get(&id).cloned()
    }

    fn contains(&self, id: DbId) -> bool {
        self.rows.contains_key(&id)
    }

    fn ensure_unique(&self, candidate: &R) -> StoreResult<()> {
        let taken = self
            .rows
            .values()
            .any(|row| row.id() != candidate.id() && row.unique_key() == candidate.unique_key());
        if taken {
            return Err(StoreError::UniqueViolation {
                field: R::UNIQUE_FIELD.to_string(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, input: &R::Create) -> StoreResult<R> {
        let row = R::build(self.last_id + 1, input, Utc::now());
        self.ensure_unique(&row)?;
        self.last_id = row.id();
        self.rows.insert(row.id(), row.clone());
        Ok(row)
    }

    fn update(&mut self, id: DbId, input: &R::Update) -> StoreResult<R> {
        let mut row = self.get(id).ok_or(StoreError::NotFound)?;
        row.apply(input, Utc::now());
        self.ensure_unique(&row)?;
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    fn remove(&mut self, id: DbId) -> StoreResult<R> {
        self.rows.remove(&id).ok_or(StoreError::NotFound)
    }
}

#[derive(Default)]
struct Tables {
    users: Table<User>,
    scenes: Table<Scene>,
    characters: Table<Character>,
}

/// Storage held entirely in process memory.
pub struct MemoryStore {
    tables: RwLock<Tables>,
    online: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            online: AtomicBool::new(true),
        }
    }

    /// Simulate the database going away (`false`) or coming back (`true`).
    /// While offline every operation fails with [`StoreError::Unavailable`].
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> StoreResult<()> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("database is offline".to_string()))
        }
    }
}

fn scene_reference_violation() -> StoreError {
    StoreError::ForeignKeyViolation {
        constraint: CHARACTER_SCENE_FK.to_string(),
    }
}

#[async_trait]
impl Repository<User> for MemoryStore {
    async fn find_many(&self) -> StoreResult<Vec<User>> {
        self.ensure_online()?;
        Ok(self.tables.read().await.users.list())
    }

    async fn find_unique(&self, id: DbId) -> StoreResult<Option<User>> {
        self.ensure_online()?;
        Ok(self.tables.read().await.users.get(id))
    }

    async fn create(&self, input: &CreateUser) -> StoreResult<User> {
        self.ensure_online()?;
        self.tables.write().await.users.insert(input)
    }

    async fn update(&self, id: DbId, input: &UpdateUser) -> StoreResult<User> {
        self.ensure_online()?;
        self.tables.write().await.users.update(id, input)
    }

    async fn delete(&self, id: DbId) -> StoreResult<User> {
        self.ensure_online()?;
        self.tables.write().await.users.remove(id)
    }
}

#[async_trait]
impl Repository<Scene> for MemoryStore {
    async fn find_many(&self) -> StoreResult<Vec<Scene>> {
        self.ensure_online()?;
        Ok(self.tables.read().await.scenes.list())
    }

    async fn find_unique(&self, id: DbId) -> StoreResult<Option<Scene>> {
        self.ensure_online()?;
        Ok(self.tables.read().await.scenes.get(id))
    }

    async fn create(&self, input: &CreateScene) -> StoreResult<Scene> {
        self.ensure_online()?;
        self.tables.write().await.scenes.insert(input)
    }

    async fn update(&self, id: DbId, input: &UpdateScene) -> StoreResult<Scene> {
        self.ensure_online()?;
        self.tables.write().await.scenes.update(id, input)
    }

    async fn delete(&self, id: DbId) -> StoreResult<Scene> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if !tables.scenes.contains(id) {
            return Err(StoreError::NotFound);
        }
        if tables.characters.rows.values().any(|c| c.scene_id == id) {
            return Err(scene_reference_violation());
        }
        tables.scenes.remove(id)
    }
}

#[async_trait]
impl Repository<Character> for MemoryStore {
    async fn find_many(&self) -> StoreResult<Vec<Character>> {
        self.ensure_online()?;
        Ok(self.tables.read().await.characters.list())
    }

    async fn find_unique(&self, id: DbId) -> StoreResult<Option<Character>> {
        self.ensure_online()?;
        Ok(self.tables.read().await.characters.get(id))
    }

    async fn create(&self, input: &CreateCharacter) -> StoreResult<Character> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if !tables.scenes.contains(input.scene_id) {
            return Err(scene_reference_violation());
        }
        tables.characters.insert(input)
    }

    async fn update(&self, id: DbId, input: &UpdateCharacter) -> StoreResult<Character> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if !tables.characters.contains(id) {
            return Err(StoreError::NotFound);
        }
        if let Some(scene_id) = input.scene_id {
            if !tables.scenes.contains(scene_id) {
                return Err(scene_reference_violation());
            }
        }
        tables.characters.update(id, input)
    }

    async fn delete(&self, id: DbId) -> StoreResult<Character> {
        self.ensure_online()?;
        self.tables.write().await.characters.remove(id)
    }
}

#[async_trait]
impl Store for MemoryStore {
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
        self.ensure_online()
    }
}
