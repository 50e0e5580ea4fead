use foodgram_db::table::{Ingredient, RecipeIngredient};
use sea_query::{Expr, ExprTrait, Func, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::error::DatabaseError;

/// SQLite extended code for a refused `ON DELETE RESTRICT`, which sqlx does
/// not classify as a foreign key violation.
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

/// Whether `err` is the database refusing to drop a still-referenced row.
pub(crate) fn is_restrict_violation(err: &dyn DatabaseError) -> bool {
    err.is_foreign_key_violation() || err.code().as_deref() == Some(SQLITE_CONSTRAINT_TRIGGER)
}

impl super::Command {
    /// Removes a catalog entry. Refused while any recipe line still uses it.
    ///
    /// The RESTRICT foreign key decides; the line count only shapes the
    /// error message.
    pub async fn delete(&self, id: impl Into<String>) -> foodgram_shared::Result<()> {
        let id = id.into();
        let Some(ingredient) = self.find(&id).await? else {
            foodgram_shared::not_found!("ingredient not found");
        };

        let statement = Query::delete()
            .from_table(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).eq(&id))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        match sqlx::query_with(&sql, values).execute(&self.write_db).await {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if is_restrict_violation(&*e) => {
                let used_by = self.count_lines(&id).await?;
                tracing::debug!(ingredient.id = %id, used_by, "ingredient delete refused");
                foodgram_shared::conflict!(
                    "ingredient {} is used by {used_by} recipe line(s)",
                    ingredient.name
                );
            }
            Err(e) => return Err(e.into()),
        }

        tracing::debug!(ingredient.id = %id, "ingredient deleted");

        Ok(())
    }

    async fn count_lines(&self, id: &str) -> foodgram_shared::Result<i64> {
        let statement = Query::select()
            .expr(Func::count(Expr::col(RecipeIngredient::Id)))
            .from(RecipeIngredient::Table)
            .and_where(Expr::col(RecipeIngredient::IngredientId).eq(id))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (used_by,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(used_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    async fn restrict_error(pool: &SqlitePool) -> sqlx::Error {
        for sql in [
            "PRAGMA foreign_keys = ON",
            "CREATE TABLE parent (id TEXT PRIMARY KEY)",
            "CREATE TABLE child (parent_id TEXT NOT NULL REFERENCES parent (id) ON DELETE RESTRICT)",
            "INSERT INTO parent (id) VALUES ('p')",
            "INSERT INTO child (parent_id) VALUES ('p')",
        ] {
            sqlx::query(sql).execute(pool).await.unwrap();
        }

        sqlx::query("DELETE FROM parent WHERE id = 'p'")
            .execute(pool)
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_restrict_refusal_is_recognised() {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let err = restrict_error(&pool).await;
        let db_err = err.as_database_error().unwrap();

        assert_eq!(db_err.code().as_deref(), Some(SQLITE_CONSTRAINT_TRIGGER));
        assert!(is_restrict_violation(db_err));
    }
}
