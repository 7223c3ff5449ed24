use super::*;

/// Tests flagging which Discord servers are already registered.
///
/// Expected: Ok(Vec<u64>) containing only the registered ids
#[tokio::test]
async fn returns_registered_subset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    GuildFactory::new(db, user.id).discord_id("11").build().await?;
    GuildFactory::new(db, user.id).discord_id("33").build().await?;

    let repo = GuildRepository::new(db);
    let mut registered = repo.find_registered_discord_ids(&[11, 22, 33]).await?;
    registered.sort_unstable();

    assert_eq!(registered, vec![11, 33]);

    Ok(())
}

/// Tests the empty input shortcut.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let registered = repo.find_registered_discord_ids(&[]).await?;

    assert!(registered.is_empty());

    Ok(())
}
