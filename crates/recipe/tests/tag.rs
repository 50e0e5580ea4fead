use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_list_tags_ordered_by_name() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    sqlx::query(
        "INSERT INTO tag (id, name, slug) VALUES ('t1', 'lunch', 'lunch'), ('t2', 'breakfast', 'breakfast')",
    )
    .execute(&state.write_db)
    .await?;

    let tags = foodgram_recipe::tag::list(&state.read_db).await?;
    let slugs: Vec<_> = tags.iter().map(|t| t.slug.as_str()).collect();

    assert_eq!(slugs, vec!["breakfast", "lunch"]);

    Ok(())
}
