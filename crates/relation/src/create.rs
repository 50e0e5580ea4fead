use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;

use crate::{ObjectKind, RelationKind, Target, summary};

impl super::Command {
    /// Moves the (subject, object) pair of `kind` from absent to present.
    ///
    /// Checks run in order: the object must exist, a user cannot follow
    /// themselves, the pair must not exist yet. Returns the summary of the
    /// recipe or author the relation points at.
    pub async fn create(
        &self,
        kind: RelationKind,
        subject: impl Into<String>,
        object: impl Into<String>,
    ) -> foodgram_shared::Result<Target> {
        let subject = subject.into();
        let object = object.into();

        let Some(target) = self.load_target(kind, &object).await? else {
            foodgram_shared::not_found!("{} not found", kind.object());
        };

        if kind == RelationKind::Follow && subject == object {
            foodgram_shared::invalid!("cannot follow self");
        }

        if self.exists(kind, &subject, &object).await? {
            tracing::debug!(%kind, %subject, %object, "relation already exists");
            foodgram_shared::conflict!("relation already exists");
        }

        let created_at = OffsetDateTime::now_utc().unix_timestamp();
        let statement = kind.insert_statement(subject.to_owned(), object.to_owned(), created_at);
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let result = match sqlx::query_with(&sql, values).execute(&self.write_db).await {
            Ok(result) => result,
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                if !self.subject_exists(&subject).await? {
                    tracing::debug!(%kind, %subject, "acting user missing");
                    foodgram_shared::not_found!("acting user not found");
                }
                foodgram_shared::not_found!("{} not found", kind.object());
            }
            Err(e) => return Err(e.into()),
        };

        // Lost the race against a concurrent create of the same pair.
        if result.rows_affected() == 0 {
            tracing::debug!(%kind, %subject, %object, "relation created concurrently");
            foodgram_shared::conflict!("relation already exists");
        }

        tracing::debug!(%kind, %subject, %object, "relation created");

        Ok(target)
    }

    async fn load_target(
        &self,
        kind: RelationKind,
        object: &str,
    ) -> foodgram_shared::Result<Option<Target>> {
        let target = match kind.object() {
            ObjectKind::Recipe => summary::find_recipe(&self.read_db, object)
                .await?
                .map(Target::Recipe),
            ObjectKind::User => summary::find_author(&self.read_db, object)
                .await?
                .map(Target::Author),
        };

        Ok(target)
    }
}
