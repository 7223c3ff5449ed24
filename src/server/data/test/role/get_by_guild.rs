use super::*;

/// Tests listing a guild's roles.
///
/// Verifies roles of other guilds are excluded and ordering is by position,
/// highest first.
///
/// Expected: Ok(Vec<GuildRole>) of the guild's roles in position order
#[tokio::test]
async fn lists_guild_roles_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let guild = create_guild(db, user.id).await?;
    let other = create_guild(db, user.id).await?;

    RoleFactory::new(db, guild.id).name("Low").position(1).build().await?;
    RoleFactory::new(db, guild.id).name("High").position(9).build().await?;
    RoleFactory::new(db, other.id).name("Elsewhere").position(5).build().await?;

    let repo = RoleRepository::new(db);
    let roles = repo.get_by_guild(guild.id).await?;

    let names: Vec<_> = roles.iter().map(|role| role.name.as_str()).collect();
    assert_eq!(names, vec!["High", "Low"]);

    Ok(())
}
