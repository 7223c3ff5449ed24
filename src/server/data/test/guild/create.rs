use super::*;

/// Tests creating a guild at registration.
///
/// Verifies that a new guild starts with no tiers, whitelist or calendar link.
///
/// Expected: Ok(Guild) with the given identity and empty settings
#[tokio::test]
async fn creates_guild_without_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;

    let repo = GuildRepository::new(db);
    let guild = repo
        .create(CreateGuildParam {
            name: "Knights of Ni".to_string(),
            slug: "knights-of-ni".to_string(),
            user_id: user.id,
            discord_id: 123456789012345678,
        })
        .await?;

    assert_eq!(guild.name, "Knights of Ni");
    assert_eq!(guild.slug, "knights-of-ni");
    assert_eq!(guild.user_id, user.id);
    assert_eq!(guild.discord_id, 123456789012345678);
    assert_eq!(guild.tiers, TierPointers::default());
    assert!(guild.member_role_ids.is_empty());
    assert!(guild.calendar_link.is_none());

    Ok(())
}

/// Tests that a Discord server can only be registered once.
///
/// Expected: Err(DbErr) from the unique constraint
#[tokio::test]
async fn rejects_duplicate_discord_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    GuildFactory::new(db, user.id).discord_id("77").build().await?;

    let repo = GuildRepository::new(db);
    let result = repo
        .create(CreateGuildParam {
            name: "Other".to_string(),
            slug: "other".to_string(),
            user_id: user.id,
            discord_id: 77,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
