mod create;
mod delete;

pub use create::CreateInput;

use foodgram_db::table::Ingredient;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;
use std::ops::Deref;

#[derive(Clone)]
pub struct Command(pub foodgram_shared::State);

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct IngredientView {
    pub id: String,
    pub name: String,
    pub measurement_unit: String,
}

impl Command {
    pub fn new(state: foodgram_shared::State) -> Self {
        Self(state)
    }

    pub async fn find(&self, id: impl Into<String>) -> foodgram_shared::Result<Option<IngredientView>> {
        let id = id.into();
        let statement = sea_query::Query::select()
            .columns([Ingredient::Id, Ingredient::Name, Ingredient::MeasurementUnit])
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    /// Whole catalog ordered by name then unit.
    pub async fn list(&self) -> foodgram_shared::Result<Vec<IngredientView>> {
        let statement = sea_query::Query::select()
            .columns([Ingredient::Id, Ingredient::Name, Ingredient::MeasurementUnit])
            .from(Ingredient::Table)
            .order_by(Ingredient::Name, Order::Asc)
            .order_by(Ingredient::MeasurementUnit, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
