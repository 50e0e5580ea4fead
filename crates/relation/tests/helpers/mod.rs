#![allow(dead_code)]

use foodgram_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    foodgram_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

pub async fn create_user(state: &State, id: &str, username: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"INSERT INTO "user" (id, username, email, first_name, last_name) VALUES (?, ?, ?, ?, ?)"#,
    )
    .bind(id)
    .bind(username)
    .bind(format!("{username}@example.com"))
    .bind(username)
    .bind("Doe")
    .execute(&state.write_db)
    .await?;

    Ok(())
}

pub async fn create_recipe(state: &State, id: &str, author_id: &str) -> anyhow::Result<()> {
    create_recipe_at(state, id, author_id, 0).await
}

pub async fn create_recipe_at(
    state: &State,
    id: &str,
    author_id: &str,
    created_at: i64,
) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO recipe (id, author_id, name, cooking_time, created_at) VALUES (?, ?, ?, 10, ?)",
    )
    .bind(id)
    .bind(author_id)
    .bind(format!("recipe {id}"))
    .bind(created_at)
    .execute(&state.write_db)
    .await?;

    Ok(())
}

pub async fn delete_recipe(state: &State, recipe_id: &str) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM recipe WHERE id = ?")
        .bind(recipe_id)
        .execute(&state.write_db)
        .await?;

    Ok(())
}

pub async fn count_rows(state: &State, table: &str) -> anyhow::Result<i64> {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&state.read_db)
        .await?;

    Ok(count)
}

/// Two users, `john` (u1) authoring r1 and `jane` (u2) authoring r2.
pub async fn seed(state: &State) -> anyhow::Result<()> {
    create_user(state, "u1", "john").await?;
    create_user(state, "u2", "jane").await?;
    create_recipe(state, "r1", "u1").await?;
    create_recipe(state, "r2", "u2").await?;

    Ok(())
}
