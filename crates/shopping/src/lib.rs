mod list;
mod render;

pub use list::ShoppingGroup;
pub use render::{ShoppingListFile, render};

use std::ops::Deref;

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
}
