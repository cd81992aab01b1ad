//! Resource service: storage calls plus response projection.
//!
//! Storage errors are returned untouched; the handlers in
//! [`crate::handlers::resource`] are the only place they get classified.

use std::marker::PhantomData;

use sceneboard_core::types::DbId;
use sceneboard_db::{Repository, Store, StoreResult};

use crate::resources::Resource;

pub struct ResourceService<'a, R: Resource> {
    repo: &'a dyn Repository<R::Entity>,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceService<'a, R> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self {
            repo: R::repository(store),
            _resource: PhantomData,
        }
    }

    /// Every record, in storage order.
    pub async fn list_all(&self) -> StoreResult<Vec<R::View>> {
        let rows = self.repo.find_many().await?;
        Ok(rows.into_iter().map(R::View::from).collect())
    }

    /// The record with `id`, or `None`.
    pub async fn get_by_id(&self, id: DbId) -> StoreResult<Option<R::View>> {
        let row = self.repo.find_unique(id).await?;
        Ok(row.map(R::View::from))
    }

    pub async fn create(&self, input: &R::Create) -> StoreResult<R::Created> {
        let row = self.repo.create(input).await?;
        Ok(R::Created::from(row))
    }

    /// Apply the supplied fields of `input` to record `id`.
    pub async fn update(&self, id: DbId, input: &R::Update) -> StoreResult<R::Updated> {
        let row = self.repo.update(id, input).await?;
        Ok(R::Updated::from(row))
    }

    /// Remove record `id`, returning what was removed.
    pub async fn delete(&self, id: DbId) -> StoreResult<R::View> {
        let row = self.repo.delete(id).await?;
        Ok(R::View::from(row))
    }
}
