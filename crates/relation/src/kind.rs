use foodgram_db::table;
use sea_query::{
    DeleteStatement, Expr, ExprTrait, Iden, InsertStatement, OnConflict, Query, SelectStatement,
};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, VariantArray)]
#[strum(serialize_all = "snake_case")]
pub enum RelationKind {
    Favorite,
    ShoppingCart,
    Follow,
}

/// What the object side of a relation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ObjectKind {
    Recipe,
    User,
}

impl RelationKind {
    pub fn object(&self) -> ObjectKind {
        match self {
            RelationKind::Favorite | RelationKind::ShoppingCart => ObjectKind::Recipe,
            RelationKind::Follow => ObjectKind::User,
        }
    }

    pub(crate) fn exists_statement(&self, subject: String, object: String) -> SelectStatement {
        match self {
            RelationKind::Favorite => exists(
                table::Favorite::Table,
                table::Favorite::UserId,
                table::Favorite::RecipeId,
                subject,
                object,
            ),
            RelationKind::ShoppingCart => exists(
                table::ShoppingCart::Table,
                table::ShoppingCart::UserId,
                table::ShoppingCart::RecipeId,
                subject,
                object,
            ),
            RelationKind::Follow => exists(
                table::Follow::Table,
                table::Follow::UserId,
                table::Follow::AuthorId,
                subject,
                object,
            ),
        }
    }

    /// Insert-if-absent: a duplicate pair affects zero rows instead of failing.
    pub(crate) fn insert_statement(
        &self,
        subject: String,
        object: String,
        created_at: i64,
    ) -> InsertStatement {
        match self {
            RelationKind::Favorite => insert(
                table::Favorite::Table,
                [
                    table::Favorite::UserId,
                    table::Favorite::RecipeId,
                    table::Favorite::CreatedAt,
                ],
                subject,
                object,
                created_at,
            ),
            RelationKind::ShoppingCart => insert(
                table::ShoppingCart::Table,
                [
                    table::ShoppingCart::UserId,
                    table::ShoppingCart::RecipeId,
                    table::ShoppingCart::CreatedAt,
                ],
                subject,
                object,
                created_at,
            ),
            RelationKind::Follow => insert(
                table::Follow::Table,
                [
                    table::Follow::UserId,
                    table::Follow::AuthorId,
                    table::Follow::CreatedAt,
                ],
                subject,
                object,
                created_at,
            ),
        }
    }

    pub(crate) fn delete_statement(&self, subject: String, object: String) -> DeleteStatement {
        match self {
            RelationKind::Favorite => delete(
                table::Favorite::Table,
                table::Favorite::UserId,
                table::Favorite::RecipeId,
                subject,
                object,
            ),
            RelationKind::ShoppingCart => delete(
                table::ShoppingCart::Table,
                table::ShoppingCart::UserId,
                table::ShoppingCart::RecipeId,
                subject,
                object,
            ),
            RelationKind::Follow => delete(
                table::Follow::Table,
                table::Follow::UserId,
                table::Follow::AuthorId,
                subject,
                object,
            ),
        }
    }
}

impl ObjectKind {
    pub(crate) fn exists_statement(&self, id: String) -> SelectStatement {
        match self {
            ObjectKind::Recipe => Query::select()
                .column(table::Recipe::Id)
                .from(table::Recipe::Table)
                .and_where(Expr::col(table::Recipe::Id).eq(id))
                .to_owned(),
            ObjectKind::User => Query::select()
                .column(table::User::Id)
                .from(table::User::Table)
                .and_where(Expr::col(table::User::Id).eq(id))
                .to_owned(),
        }
    }
}

fn exists<T: Iden + Copy + 'static>(
    table: T,
    subject_col: T,
    object_col: T,
    subject: String,
    object: String,
) -> SelectStatement {
    Query::select()
        .column(subject_col)
        .from(table)
        .and_where(Expr::col(subject_col).eq(subject))
        .and_where(Expr::col(object_col).eq(object))
        .limit(1)
        .to_owned()
}

fn insert<T: Iden + Copy + 'static>(
    table: T,
    [subject_col, object_col, created_at_col]: [T; 3],
    subject: String,
    object: String,
    created_at: i64,
) -> InsertStatement {
    Query::insert()
        .into_table(table)
        .columns([subject_col, object_col, created_at_col])
        .values_panic([subject.into(), object.into(), created_at.into()])
        .on_conflict(
            OnConflict::columns([subject_col, object_col])
                .do_nothing()
                .to_owned(),
        )
        .to_owned()
}

fn delete<T: Iden + Copy + 'static>(
    table: T,
    subject_col: T,
    object_col: T,
    subject: String,
    object: String,
) -> DeleteStatement {
    Query::delete()
        .from_table(table)
        .and_where(Expr::col(subject_col).eq(subject))
        .and_where(Expr::col(object_col).eq(object))
        .to_owned()
}
