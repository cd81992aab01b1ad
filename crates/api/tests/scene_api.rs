//! HTTP-level integration tests for `/api/scenes`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_scene, delete, fresh_app, get, patch_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_scene_returns_201() {
    let (app, _store) = fresh_app();
    let response = post_json(
        app,
        "/api/scenes/write",
        json!({ "title": "Harbor", "image": "scenes/harbor.png" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Harbor");
    assert!(json["description"].is_null());
    assert_eq!(json["image"], "scenes/harbor.png");
}

#[tokio::test]
async fn ids_increase_in_creation_order() {
    let (app, _store) = fresh_app();
    let first = create_scene(app.clone(), "Harbor").await;
    let second = create_scene(app.clone(), "Lighthouse").await;
    assert!(second > first);

    let list = body_json(get(app, "/api/scenes/list").await).await;
    assert_eq!(list[0]["id"], first);
    assert_eq!(list[1]["id"], second);
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let (app, _store) = fresh_app();
    let id = create_scene(app.clone(), "Harbor").await;

    let response = patch_json(
        app.clone(),
        &format!("/api/scenes/update/{id}"),
        json!({ "title": "Night Harbor" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let read = body_json(get(app, &format!("/api/scenes/read/{id}")).await).await;
    assert_eq!(read["title"], "Night Harbor");
    assert_eq!(read["description"], "A quiet place");
    assert_eq!(read["image"], "scenes/harbor.png");
}

#[tokio::test]
async fn explicit_null_clears_description() {
    let (app, _store) = fresh_app();
    let id = create_scene(app.clone(), "Harbor").await;

    let response = patch_json(
        app.clone(),
        &format!("/api/scenes/update/{id}"),
        json!({ "description": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["description"].is_null());

    let read = body_json(get(app, &format!("/api/scenes/read/{id}")).await).await;
    assert!(read["description"].is_null());
    assert_eq!(read["title"], "Harbor");
}

#[tokio::test]
async fn delete_unreferenced_scene_returns_204() {
    let (app, _store) = fresh_app();
    let id = create_scene(app.clone(), "Harbor").await;

    let response = delete(app.clone(), &format!("/api/scenes/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/scenes/read/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_title_returns_400() {
    let (app, _store) = fresh_app();
    create_scene(app.clone(), "Harbor").await;

    let response = post_json(
        app,
        "/api/scenes/write",
        json!({ "title": "Harbor", "image": "scenes/other.png" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "A scene with this title already exists"
    );
}

#[tokio::test]
async fn deleting_referenced_scene_returns_409() {
    let (app, _store) = fresh_app();
    let id = create_scene(app.clone(), "Harbor").await;
    let created = post_json(
        app.clone(),
        "/api/characters/write",
        json!({ "name": "Inés", "image": "characters/ines.png", "sceneId": id }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = delete(app.clone(), &format!("/api/scenes/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let response = get(app, &format!("/api/scenes/read/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn non_numeric_ids_return_404() {
    let (app, _store) = fresh_app();

    let response = get(app.clone(), "/api/scenes/read/first").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, "/api/scenes/delete/1.5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn undecodable_ids_return_404_json() {
    let (app, _store) = fresh_app();

    let response = get(app.clone(), "/api/scenes/read/%FF").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Scene not found");
    assert_eq!(json["code"], "NOT_FOUND");

    let response = patch_json(app.clone(), "/api/scenes/update/%C3%28", json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, "/api/scenes/delete/%FF").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn create_while_store_is_down_returns_generic_500() {
    let (app, store) = fresh_app();
    store.set_online(false);

    let response = post_json(
        app,
        "/api/scenes/write",
        json!({ "title": "Harbor", "image": "scenes/harbor.png" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Error creating scene");
}
