use axum::{
    Router, middleware,
    routing::{get, post},
};
use sqlx::SqlitePool;

mod health;
mod ingredients;
mod recipes;
mod users;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relation_command: foodgram_relation::Command,
    pub shopping_command: foodgram_shopping::Command,
    pub ingredient_command: foodgram_recipe::Command,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, state: foodgram_shared::State) -> Self {
        Self {
            config,
            relation_command: foodgram_relation::Command::new(state.clone()),
            shopping_command: foodgram_shopping::Command::new(state.clone()),
            ingredient_command: foodgram_recipe::Command::new(state.clone()),
            pool: state.read_db,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/recipes/{id}/favorite/",
            post(recipes::favorite).delete(recipes::unfavorite),
        )
        .route(
            "/api/recipes/{id}/shopping_cart/",
            post(recipes::add_to_cart).delete(recipes::remove_from_cart),
        )
        .route(
            "/api/recipes/download_shopping_cart/",
            get(recipes::download_shopping_cart),
        )
        .route(
            "/api/users/{id}/subscribe/",
            post(users::subscribe).delete(users::unsubscribe),
        )
        .route("/api/users/subscriptions/", get(users::subscriptions))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            crate::auth::auth_middleware,
        ));

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                .route("/api/ingredients/", get(ingredients::list))
                .route("/api/ingredients/{id}/", get(ingredients::detail))
                .route("/api/tags/", get(ingredients::tags))
                .merge(protected)
                .with_state(app_state),
        )
}
