use foodgram_db::table::{Follow, User};
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{
    AuthorSummary,
    summary::{self, AuthorRow},
};

impl super::Command {
    /// Authors followed by `subject`, ordered by username.
    pub async fn subscriptions(
        &self,
        subject: impl Into<String>,
    ) -> foodgram_shared::Result<Vec<AuthorSummary>> {
        let subject = subject.into();
        let statement = Query::select()
            .columns(summary::author_columns())
            .from(User::Table)
            .inner_join(
                Follow::Table,
                Expr::col((Follow::Table, Follow::AuthorId)).equals((User::Table, User::Id)),
            )
            .and_where(Expr::col((Follow::Table, Follow::UserId)).eq(subject))
            .order_by((User::Table, User::Username), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, AuthorRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        summary::attach_recipes(&self.read_db, rows).await
    }
}
