pub mod health;
pub mod resource;

use axum::Router;

use crate::resources::{Characters, Resource, Scenes, Users};
use crate::state::AppState;

/// Prefix every resource is nested under.
pub const API_PREFIX: &str = "/api";

/// Build the `/api` route tree.
///
/// ```text
/// /users/{list,read/{id},write,update/{id},delete/{id}}
/// /characters/{list,read/{id},write,update/{id},delete/{id}}
/// /scenes/{list,read/{id},write,update/{id},delete/{id}}
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(Users::PATH, resource::router::<Users>())
        .nest(Characters::PATH, resource::router::<Characters>())
        .nest(Scenes::PATH, resource::router::<Scenes>())
}

/// Absolute path of a resource's mount point, e.g. `/api/users`.
pub fn mount_point<R: Resource>() -> String {
    format!("{API_PREFIX}{}", R::PATH)
}
