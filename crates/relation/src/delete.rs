use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;

use crate::RelationKind;

impl super::Command {
    /// Moves the (subject, object) pair of `kind` from present to absent.
    ///
    /// A single filtered delete, so two concurrent calls remove at most one
    /// row and exactly one of them succeeds.
    pub async fn delete(
        &self,
        kind: RelationKind,
        subject: impl Into<String>,
        object: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let subject = subject.into();
        let object = object.into();

        if !self.object_exists(kind, &object).await? {
            foodgram_shared::not_found!("{} not found", kind.object());
        }

        let statement = kind.delete_statement(subject.to_owned(), object.to_owned());
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(%kind, %subject, %object, "relation does not exist");
            foodgram_shared::conflict!("relation does not exist");
        }

        tracing::debug!(%kind, %subject, %object, "relation deleted");

        Ok(())
    }
}
