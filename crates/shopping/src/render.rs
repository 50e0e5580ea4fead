use foodgram_shared::Amount;

use crate::ShoppingGroup;

pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const FILENAME: &str = "shopping_list.txt";

/// Rendered shopping list ready to be served as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListFile {
    pub content: String,
    pub content_type: &'static str,
    pub filename: &'static str,
}

/// One numbered line per group; no header, empty for an empty cart.
pub fn render(groups: &[ShoppingGroup]) -> String {
    groups
        .iter()
        .enumerate()
        .map(|(i, group)| line(i + 1, &group.name, &group.unit, group.total))
        .collect()
}

fn line(index: usize, name: &str, unit: &str, total: Amount) -> String {
    format!("{index}. {} ({unit}) — {total}\n", capitalize(name))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl super::Command {
    pub async fn download(
        &self,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<ShoppingListFile> {
        let groups = self.aggregate(user_id).await?;

        Ok(ShoppingListFile {
            content: render(&groups),
            content_type: CONTENT_TYPE,
            filename: FILENAME,
        })
    }
}
