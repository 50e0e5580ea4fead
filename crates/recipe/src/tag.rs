use foodgram_db::table::Tag;
use sea_query::{Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TagView {
    pub id: String,
    pub name: String,
    pub slug: String,
}

pub async fn list(pool: &SqlitePool) -> foodgram_shared::Result<Vec<TagView>> {
    let statement = sea_query::Query::select()
        .columns([Tag::Id, Tag::Name, Tag::Slug])
        .from(Tag::Table)
        .order_by(Tag::Name, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with(&sql, values).fetch_all(pool).await?)
}
