pub mod ingredient;
pub mod tag;

pub use ingredient::{Command, IngredientView};
pub use tag::TagView;
