use super::*;

/// Tests resolving a guild from its URL slug.
///
/// Verifies that stored tier ids and whitelist are parsed into the domain model.
///
/// Expected: Ok(Some(Guild)) for a known slug, Ok(None) otherwise
#[tokio::test]
async fn finds_guild_and_parses_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    GuildFactory::new(db, user.id)
        .slug("round-table")
        .officer_role_id("20")
        .member_role_ids("30,10")
        .build()
        .await?;

    let repo = GuildRepository::new(db);

    let guild = repo.find_by_slug("round-table").await?.unwrap();
    assert_eq!(guild.tiers.officer, Some(20));
    assert_eq!(guild.tiers.guild_master, None);
    assert_eq!(guild.member_role_ids, vec![30, 10]);

    assert!(repo.find_by_slug("missing").await?.is_none());

    Ok(())
}

/// Tests that a corrupted stored role id surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_corrupted_tier_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    GuildFactory::new(db, user.id)
        .slug("broken")
        .gm_role_id("not-a-number")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let result = repo.find_by_slug("broken").await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests loading a guild by local id.
///
/// Expected: Ok(Some(Guild)) for a known id, Ok(None) otherwise
#[tokio::test]
async fn finds_guild_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let created = GuildFactory::new(db, user.id)
        .slug("camelot")
        .gm_role_id("10")
        .build()
        .await?;

    let repo = GuildRepository::new(db);

    let guild = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(guild.slug, "camelot");
    assert_eq!(guild.tiers.guild_master, Some(10));

    assert!(repo.find_by_id(created.id + 1).await?.is_none());

    Ok(())
}
