mod favorite;
mod follow;
mod ingredient;
mod recipe;
mod recipe_ingredient;
mod recipe_tag;
mod shopping_cart;
mod tag;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "foodgram",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        recipe::CreateTable,
        recipe::CreateIdx1,
        ingredient::CreateTable,
        ingredient::CreateUk1,
        recipe_ingredient::CreateTable,
        recipe_ingredient::CreateUk1,
        recipe_ingredient::CreateIdx1,
        tag::CreateTable,
        tag::CreateUk1,
        recipe_tag::CreateTable,
        favorite::CreateTable,
        favorite::CreateIdx1,
        shopping_cart::CreateTable,
        shopping_cart::CreateIdx1,
        follow::CreateTable,
        follow::CreateIdx1
    ]
);
