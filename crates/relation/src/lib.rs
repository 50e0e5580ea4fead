//! Favorites, shopping-cart entries and author follows.
//!
//! Every relation is a (subject, object) pair stored at most once per kind.
//! A pair is either absent or present: [`Command::create`] only succeeds from
//! absent and [`Command::delete`] only from present. The composite primary key
//! of each relation table is what actually guarantees uniqueness; the
//! existence check run before the insert only produces a clearer error.

mod create;
mod delete;
mod kind;
mod subscription;
mod summary;

pub use kind::{ObjectKind, RelationKind};
pub use summary::{AuthorSummary, RecipeSummary, Target};

use std::ops::Deref;

use sea_query::{SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

#[derive(Clone)]
pub struct Command(pub foodgram_shared::State);

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: foodgram_shared::State) -> Self {
        Self(state)
    }

    pub async fn exists(
        &self,
        kind: RelationKind,
        subject: impl Into<String>,
        object: impl Into<String>,
    ) -> foodgram_shared::Result<bool> {
        let statement = kind.exists_statement(subject.into(), object.into());
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_with(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.is_some())
    }

    pub(crate) async fn object_exists(
        &self,
        kind: RelationKind,
        object: &str,
    ) -> foodgram_shared::Result<bool> {
        self.fetch_exists(kind.object().exists_statement(object.to_owned()))
            .await
    }

    /// Subjects of every kind are users.
    pub(crate) async fn subject_exists(&self, subject: &str) -> foodgram_shared::Result<bool> {
        self.fetch_exists(ObjectKind::User.exists_statement(subject.to_owned()))
            .await
    }

    async fn fetch_exists(&self, statement: SelectStatement) -> foodgram_shared::Result<bool> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_with(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.is_some())
    }
}
