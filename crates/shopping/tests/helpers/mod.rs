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
    sqlx::query(
        "INSERT INTO recipe (id, author_id, name, cooking_time, created_at) VALUES (?, ?, ?, 10, 0)",
    )
    .bind(id)
    .bind(author_id)
    .bind(format!("recipe {id}"))
    .execute(&state.write_db)
    .await?;

    Ok(())
}

pub async fn add_line(
    state: &State,
    recipe_id: &str,
    ingredient_id: &str,
    amount_milli: i64,
) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO recipe_ingredient (recipe_id, ingredient_id, amount) VALUES (?, ?, ?)")
        .bind(recipe_id)
        .bind(ingredient_id)
        .bind(amount_milli)
        .execute(&state.write_db)
        .await?;

    Ok(())
}

pub async fn create_ingredient(
    state: &State,
    id: &str,
    name: &str,
    unit: &str,
) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO ingredient (id, name, measurement_unit) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(unit)
        .execute(&state.write_db)
        .await?;

    Ok(())
}

pub async fn add_to_cart(state: &State, user_id: &str, recipe_id: &str) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO shopping_cart (user_id, recipe_id, created_at) VALUES (?, ?, 0)")
        .bind(user_id)
        .bind(recipe_id)
        .execute(&state.write_db)
        .await?;

    Ok(())
}
