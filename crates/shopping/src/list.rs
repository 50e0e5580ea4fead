use std::{cmp::Ordering, collections::BTreeMap};

use foodgram_db::table::{Ingredient, RecipeIngredient, ShoppingCart};
use foodgram_shared::Amount;
use sea_query::{Alias, Expr, ExprTrait, Func, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

/// Every cart line sharing an ingredient name (ignoring case) and unit, summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingGroup {
    pub name: String,
    pub unit: String,
    pub total: Amount,
}

#[derive(FromRow)]
struct GroupRow {
    name: String,
    measurement_unit: String,
    total: i64,
}

impl From<GroupRow> for ShoppingGroup {
    fn from(row: GroupRow) -> Self {
        Self {
            name: row.name,
            unit: row.measurement_unit,
            total: Amount::from_milli(row.total),
        }
    }
}

impl ShoppingGroup {
    /// Case-insensitive by name, then ordinal name, then unit.
    pub fn collate(&self, other: &Self) -> Ordering {
        self.name
            .to_lowercase()
            .cmp(&other.name.to_lowercase())
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.unit.cmp(&other.unit))
    }
}

/// Folds groups whose names differ only by case, since they print the same.
/// The ordinally smallest spelling is kept.
fn merge_case_variants(mut groups: Vec<ShoppingGroup>) -> Vec<ShoppingGroup> {
    groups.sort_by(ShoppingGroup::collate);

    let mut merged: BTreeMap<(String, String), ShoppingGroup> = BTreeMap::new();
    for group in groups {
        let key = (group.name.to_lowercase(), group.unit.to_owned());
        match merged.get_mut(&key) {
            Some(existing) => existing.total = existing.total + group.total,
            None => {
                merged.insert(key, group);
            }
        }
    }

    let mut groups: Vec<ShoppingGroup> = merged.into_values().collect();
    groups.sort_by(ShoppingGroup::collate);
    groups
}

impl super::Command {
    /// Ingredient totals over every recipe in the user's shopping cart.
    pub async fn aggregate(
        &self,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<Vec<ShoppingGroup>> {
        let user_id = user_id.into();
        let statement = Query::select()
            .column((Ingredient::Table, Ingredient::Name))
            .column((Ingredient::Table, Ingredient::MeasurementUnit))
            .expr_as(
                Func::sum(Expr::col((RecipeIngredient::Table, RecipeIngredient::Amount))),
                Alias::new("total"),
            )
            .from(ShoppingCart::Table)
            .inner_join(
                RecipeIngredient::Table,
                Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId))
                    .equals((ShoppingCart::Table, ShoppingCart::RecipeId)),
            )
            .inner_join(
                Ingredient::Table,
                Expr::col((Ingredient::Table, Ingredient::Id))
                    .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
            )
            .and_where(Expr::col((ShoppingCart::Table, ShoppingCart::UserId)).eq(&user_id))
            .group_by_col((Ingredient::Table, Ingredient::Name))
            .group_by_col((Ingredient::Table, Ingredient::MeasurementUnit))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, GroupRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let groups = merge_case_variants(rows.into_iter().map(Into::into).collect());

        tracing::debug!(%user_id, groups = groups.len(), "shopping list aggregated");

        Ok(groups)
    }
}
