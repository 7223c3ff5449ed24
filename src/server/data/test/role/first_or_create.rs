use super::*;

/// Tests storing a new Discord role.
///
/// Expected: Ok(GuildRole) with the Discord data and bitmask preserved
#[tokio::test]
async fn creates_missing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let guild = create_guild(db, user.id).await?;

    let repo = RoleRepository::new(db);
    let role = repo
        .first_or_create(CreateRoleParam {
            guild_id: guild.id,
            discord_id: 100,
            name: "Guild Master".to_string(),
            slug: "guild-master".to_string(),
            color: Some(0xFF0000),
            position: 10,
            permissions: Permissions::ADMINISTRATOR | Permissions::MANAGE_GUILD,
        })
        .await?;

    assert_eq!(role.guild_id, guild.id);
    assert_eq!(role.discord_id, 100);
    assert_eq!(role.name, "Guild Master");
    assert_eq!(role.color, Some(0xFF0000));
    assert!(role.permissions.contains(Permissions::ADMINISTRATOR));
    assert!(role.permissions.contains(Permissions::MANAGE_GUILD));

    Ok(())
}

/// Tests that an already stored Discord role is returned unchanged.
///
/// Expected: Ok(GuildRole) with the original id and name
#[tokio::test]
async fn returns_existing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let guild = create_guild(db, user.id).await?;
    let existing = RoleFactory::new(db, guild.id)
        .discord_id("100")
        .name("Original")
        .build()
        .await?;

    let repo = RoleRepository::new(db);
    let role = repo
        .first_or_create(CreateRoleParam {
            guild_id: guild.id,
            discord_id: 100,
            name: "Renamed".to_string(),
            slug: "renamed".to_string(),
            color: None,
            position: 1,
            permissions: Permissions::empty(),
        })
        .await?;

    assert_eq!(role.id, existing.id);
    assert_eq!(role.name, "Original");

    Ok(())
}
