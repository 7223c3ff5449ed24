use super::*;

/// Tests writing a guild's settings.
///
/// Verifies that tiers, whitelist and calendar link are persisted and read back
/// in the same shape.
///
/// Expected: Ok(Guild) reflecting every submitted setting
#[tokio::test]
async fn writes_all_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let created = GuildFactory::new(db, user.id).build().await?;

    let repo = GuildRepository::new(db);
    let tiers = TierPointers {
        guild_master: Some(100),
        officer: None,
        raid_leader: Some(300),
    };
    let guild = repo
        .update(
            created.id,
            UpdateGuildParam {
                name: "Renamed".to_string(),
                slug: "renamed".to_string(),
                calendar_link: Some("https://calendar.example/guild".to_string()),
                member_role_ids: vec![300, 200],
                tiers,
            },
        )
        .await?;

    assert_eq!(guild.name, "Renamed");
    assert_eq!(guild.slug, "renamed");
    assert_eq!(guild.tiers, tiers);
    assert_eq!(guild.member_role_ids, vec![300, 200]);

    let stored = entity::prelude::Guild::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.member_role_ids.as_deref(), Some("300,200"));
    assert_eq!(stored.gm_role_id.as_deref(), Some("100"));
    assert!(stored.officer_role_id.is_none());

    Ok(())
}

/// Tests that clearing every tier and the whitelist stores NULLs.
///
/// Expected: Ok(Guild) with no tiers, stored columns NULL
#[tokio::test]
async fn clears_tiers_and_whitelist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let created = GuildFactory::new(db, user.id)
        .gm_role_id("1")
        .officer_role_id("2")
        .member_role_ids("1,2")
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo
        .update(
            created.id,
            UpdateGuildParam {
                name: created.name.clone(),
                slug: created.slug.clone(),
                calendar_link: None,
                member_role_ids: Vec::new(),
                tiers: TierPointers::default(),
            },
        )
        .await?;

    assert_eq!(guild.tiers, TierPointers::default());

    let stored = entity::prelude::Guild::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.gm_role_id.is_none());
    assert!(stored.member_role_ids.is_none());

    Ok(())
}
