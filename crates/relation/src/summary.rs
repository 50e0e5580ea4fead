use std::collections::HashMap;

use foodgram_db::table::{Recipe, User};
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorSummary {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub is_subscribed: bool,
    pub recipes_count: usize,
    pub recipes: Vec<RecipeSummary>,
}

impl AuthorSummary {
    /// Keeps the newest `limit` recipe previews; `recipes_count` is untouched.
    pub fn limit_recipes(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.recipes.truncate(limit);
        }

        self
    }
}

/// Body returned after a relation is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Target {
    Recipe(RecipeSummary),
    Author(AuthorSummary),
}

#[derive(FromRow)]
pub(crate) struct AuthorRow {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
}

pub(crate) fn author_columns() -> [(User, User); 6] {
    [
        (User::Table, User::Id),
        (User::Table, User::Username),
        (User::Table, User::Email),
        (User::Table, User::FirstName),
        (User::Table, User::LastName),
        (User::Table, User::Avatar),
    ]
}

pub(crate) async fn find_recipe(
    pool: &SqlitePool,
    id: &str,
) -> foodgram_shared::Result<Option<RecipeSummary>> {
    let statement = Query::select()
        .columns([Recipe::Id, Recipe::Name, Recipe::Image, Recipe::CookingTime])
        .from(Recipe::Table)
        .and_where(Expr::col(Recipe::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn find_author(
    pool: &SqlitePool,
    id: &str,
) -> foodgram_shared::Result<Option<AuthorSummary>> {
    let statement = Query::select()
        .columns(author_columns())
        .from(User::Table)
        .and_where(Expr::col((User::Table, User::Id)).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, AuthorRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    Ok(attach_recipes(pool, vec![row]).await?.pop())
}

#[derive(FromRow)]
struct PreviewRow {
    author_id: String,
    #[sqlx(flatten)]
    recipe: RecipeSummary,
}

/// Authors seen from a follower, so `is_subscribed` is always set.
///
/// Previews of every author are loaded in one query, newest first.
pub(crate) async fn attach_recipes(
    pool: &SqlitePool,
    rows: Vec<AuthorRow>,
) -> foodgram_shared::Result<Vec<AuthorSummary>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<String> = rows.iter().map(|row| row.id.to_owned()).collect();
    let statement = Query::select()
        .columns([
            Recipe::AuthorId,
            Recipe::Id,
            Recipe::Name,
            Recipe::Image,
            Recipe::CookingTime,
        ])
        .from(Recipe::Table)
        .and_where(Expr::col(Recipe::AuthorId).is_in(ids))
        .order_by(Recipe::CreatedAt, Order::Desc)
        .order_by(Recipe::Id, Order::Desc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let previews: Vec<PreviewRow> = sqlx::query_as_with(&sql, values).fetch_all(pool).await?;

    let mut by_author: HashMap<String, Vec<RecipeSummary>> = HashMap::new();
    for preview in previews {
        by_author
            .entry(preview.author_id)
            .or_default()
            .push(preview.recipe);
    }

    let authors = rows
        .into_iter()
        .map(|row| {
            let recipes = by_author.remove(&row.id).unwrap_or_default();

            AuthorSummary {
                id: row.id,
                username: row.username,
                email: row.email,
                first_name: row.first_name,
                last_name: row.last_name,
                avatar: row.avatar,
                is_subscribed: true,
                recipes_count: recipes.len(),
                recipes,
            }
        })
        .collect();

    Ok(authors)
}
