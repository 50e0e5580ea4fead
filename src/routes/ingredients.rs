use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppResult, routes::AppState};

pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.ingredient_command.list().await?))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let Some(ingredient) = state.ingredient_command.find(id).await? else {
        return Err(foodgram_shared::Error::NotFound("ingredient not found".to_owned()).into());
    };

    Ok(Json(ingredient))
}

pub async fn tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(foodgram_recipe::tag::list(&state.pool).await?))
}
