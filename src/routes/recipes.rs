use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use foodgram_relation::{RelationKind, Target};

use crate::{auth::Auth, error::AppResult, routes::AppState};

async fn create(
    state: &AppState,
    kind: RelationKind,
    user_id: String,
    recipe_id: String,
) -> AppResult<(StatusCode, Json<Target>)> {
    let target = state
        .relation_command
        .create(kind, user_id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(target)))
}

async fn delete(
    state: &AppState,
    kind: RelationKind,
    user_id: String,
    recipe_id: String,
) -> AppResult<StatusCode> {
    state
        .relation_command
        .delete(kind, user_id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn favorite(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    create(&state, RelationKind::Favorite, auth.user_id, id).await
}

pub async fn unfavorite(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    delete(&state, RelationKind::Favorite, auth.user_id, id).await
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    create(&state, RelationKind::ShoppingCart, auth.user_id, id).await
}

pub async fn remove_from_cart(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    delete(&state, RelationKind::ShoppingCart, auth.user_id, id).await
}

pub async fn download_shopping_cart(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
) -> AppResult<impl IntoResponse> {
    let file = state.shopping_command.download(auth.user_id).await?;
    let disposition = format!("attachment; filename=\"{}\"", file.filename);

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    ))
}
