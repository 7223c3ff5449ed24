use super::*;

/// Tests resolving an app permission through the member's roles.
///
/// Expected: true for a permission granted to one of the member's roles
#[tokio::test]
async fn grants_permission_through_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_permission_catalog()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let guild = create_guild(db, user.id).await?;
    let role = RoleFactory::new(db, guild.id).build().await?;
    let edit_guild = permission_id(db, "edit.guild").await?;
    grant_permissions(db, role.id, &[edit_guild]).await?;
    let member = MemberFactory::new(db, user.id, guild.id)
        .roles(&[role.id])
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert!(repo.has_permission(member.id, "edit.guild").await?);
    assert!(!repo.has_permission(member.id, "delete.guild").await?);

    Ok(())
}

/// Tests that permissions of roles the member does not hold are ignored.
///
/// Expected: false
#[tokio::test]
async fn ignores_roles_member_does_not_hold() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_permission_catalog()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let guild = create_guild(db, user.id).await?;
    let officer_role = RoleFactory::new(db, guild.id).build().await?;
    let plain_role = RoleFactory::new(db, guild.id).build().await?;
    let edit_guild = permission_id(db, "edit.guild").await?;
    grant_permissions(db, officer_role.id, &[edit_guild]).await?;
    let member = MemberFactory::new(db, user.id, guild.id)
        .roles(&[plain_role.id])
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert!(!repo.has_permission(member.id, "edit.guild").await?);

    Ok(())
}
