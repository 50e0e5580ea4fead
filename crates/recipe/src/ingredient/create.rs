use foodgram_db::table::Ingredient;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;

pub struct CreateInput {
    pub name: String,
    pub measurement_unit: String,
}

impl super::Command {
    pub async fn create(&self, input: CreateInput) -> foodgram_shared::Result<String> {
        let name = input.name.trim().to_owned();
        let measurement_unit = input.measurement_unit.trim().to_owned();

        let statement = Query::select()
            .column(Ingredient::Id)
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Name).eq(&name))
            .and_where(Expr::col(Ingredient::MeasurementUnit).eq(&measurement_unit))
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let existing = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        if existing.is_some() {
            foodgram_shared::conflict!("ingredient {name} ({measurement_unit}) already exists");
        }

        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(Ingredient::Table)
            .columns([Ingredient::Id, Ingredient::Name, Ingredient::MeasurementUnit])
            .values_panic([
                id.to_owned().into(),
                name.to_owned().into(),
                measurement_unit.to_owned().into(),
            ])
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        match sqlx::query_with(&sql, values).execute(&self.write_db).await {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                foodgram_shared::conflict!("ingredient {name} ({measurement_unit}) already exists");
            }
            Err(e) => return Err(e.into()),
        }

        tracing::debug!(ingredient.id = %id, "ingredient created");

        Ok(id)
    }
}
