use axum::routing::{self, get, patch, post};
use axum::Router;

use crate::handlers::resource as handler;
use crate::resources::Resource;
use crate::state::AppState;

/// Routes mounted at [`Resource::PATH`].
///
/// ```text
/// GET    /list          -> list
/// GET    /read/{id}     -> read
/// POST   /write         -> create
/// POST   /write/        -> create
/// PATCH  /update/{id}   -> update
/// DELETE /delete/{id}   -> delete
/// ```
pub fn router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route("/list", get(handler::list::<R>))
        .route("/read/{id}", get(handler::read::<R>))
        .route("/write", post(handler::create::<R>))
        .route("/write/", post(handler::create::<R>))
        .route("/update/{id}", patch(handler::update::<R>))
        .route("/delete/{id}", routing::delete(handler::delete::<R>))
}
