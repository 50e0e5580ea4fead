use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use foodgram_relation::{RelationKind, Target};
use serde::Deserialize;

use crate::{auth::Auth, error::AppResult, routes::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct RecipesLimit {
    pub recipes_limit: Option<usize>,
}

pub async fn subscribe(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Path(id): Path<String>,
    Query(params): Query<RecipesLimit>,
) -> AppResult<impl IntoResponse> {
    let target = match state
        .relation_command
        .create(RelationKind::Follow, auth.user_id, id)
        .await?
    {
        Target::Author(author) => Target::Author(author.limit_recipes(params.recipes_limit)),
        other => other,
    };

    Ok((StatusCode::CREATED, Json(target)))
}

pub async fn unsubscribe(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .relation_command
        .delete(RelationKind::Follow, auth.user_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn subscriptions(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Query(params): Query<RecipesLimit>,
) -> AppResult<impl IntoResponse> {
    let authors: Vec<_> = state
        .relation_command
        .subscriptions(auth.user_id)
        .await?
        .into_iter()
        .map(|author| author.limit_recipes(params.recipes_limit))
        .collect();

    Ok(Json(authors))
}
