use super::*;

/// Tests name uniqueness checks used by registration and settings.
///
/// Verifies that a guild keeping its own name is not reported as a clash.
///
/// Expected: taken for other guilds, free when the only match is excluded
#[tokio::test]
async fn name_taken_ignores_excluded_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let guild = GuildFactory::new(db, user.id)
        .name("Camelot")
        .slug("camelot")
        .build()
        .await?;

    let repo = GuildRepository::new(db);

    assert!(repo.name_taken("Camelot", None).await?);
    assert!(!repo.name_taken("Camelot", Some(guild.id)).await?);
    assert!(!repo.name_taken("Avalon", None).await?);
    assert!(repo.slug_taken("camelot", None).await?);
    assert!(!repo.slug_taken("camelot", Some(guild.id)).await?);

    Ok(())
}

/// Tests Discord server registration lookups.
///
/// Expected: true only for a registered server id
#[tokio::test]
async fn discord_id_taken_matches_registered_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    GuildFactory::new(db, user.id).discord_id("9001").build().await?;

    let repo = GuildRepository::new(db);

    assert!(repo.discord_id_taken(9001).await?);
    assert!(!repo.discord_id_taken(9002).await?);

    Ok(())
}
