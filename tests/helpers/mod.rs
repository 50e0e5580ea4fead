//! Router over a freshly migrated SQLite file, plus seed rows.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use foodgram::config::{Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig};
use foodgram_shared::State;
use http_body_util::BodyExt;
use std::path::PathBuf;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestApp {
    pub router: Router,
    pub state: State,
}

pub fn config(path: &PathBuf) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        database: DatabaseConfig {
            url: format!("sqlite:{}", path.to_str().unwrap()),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: SECRET.to_string(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_app(path: PathBuf) -> anyhow::Result<TestApp> {
    let config = config(&path);
    let pool = foodgram::create_pool(&config.database.url, 1).await?;
    foodgram::migrate::run(&pool).await?;

    let state = State::single(pool);
    let router = foodgram::router(foodgram::AppState::new(config, state.clone()));

    Ok(TestApp { router, state })
}

pub fn token(user_id: &str) -> String {
    foodgram::auth::generate_token(user_id, SECRET, 3600).unwrap()
}

impl TestApp {
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        user_id: Option<&str>,
    ) -> anyhow::Result<Response<Body>> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user_id) = user_id {
            builder = builder.header(header::AUTHORIZATION, format!("Token {}", token(user_id)));
        }

        Ok(self.router.clone().oneshot(builder.body(Body::empty())?).await?)
    }

    pub async fn seed_user(&self, id: &str, username: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"INSERT INTO "user" (id, username, email, first_name, last_name) VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(id)
        .bind(username)
        .bind(format!("{username}@example.com"))
        .bind(username)
        .bind("Doe")
        .execute(&self.state.write_db)
        .await?;

        Ok(())
    }

    pub async fn seed_recipe(&self, id: &str, author_id: &str, created_at: i64) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO recipe (id, author_id, name, cooking_time, created_at) VALUES (?, ?, ?, 10, ?)",
        )
        .bind(id)
        .bind(author_id)
        .bind(format!("recipe {id}"))
        .bind(created_at)
        .execute(&self.state.write_db)
        .await?;

        Ok(())
    }

    pub async fn seed_ingredient(&self, id: &str, name: &str, unit: &str) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO ingredient (id, name, measurement_unit) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(unit)
            .execute(&self.state.write_db)
            .await?;

        Ok(())
    }

    pub async fn seed_line(&self, recipe_id: &str, ingredient_id: &str, milli: i64) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO recipe_ingredient (recipe_id, ingredient_id, amount) VALUES (?, ?, ?)")
            .bind(recipe_id)
            .bind(ingredient_id)
            .bind(milli)
            .execute(&self.state.write_db)
            .await?;

        Ok(())
    }
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn body_json(response: Response<Body>) -> anyhow::Result<serde_json::Value> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}
