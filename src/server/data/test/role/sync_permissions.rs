use super::*;

/// Tests replacing a role's permission set.
///
/// Verifies that permissions outside the new set are removed, not kept.
///
/// Expected: Ok(()) and the role holds exactly the new set
#[tokio::test]
async fn replaces_existing_permissions() -> Result<(), DbErr> {
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

    let guild_master_ids = permission_ids_for_notes(db, &["guild_master"]).await?;
    let raid_leader_ids = permission_ids_for_notes(db, &["raid_leader"]).await?;
    grant_permissions(db, role.id, &guild_master_ids).await?;

    let repo = RoleRepository::new(db);
    repo.sync_permissions(role.id, &raid_leader_ids).await?;

    assert_eq!(repo.get_permission_ids(role.id).await?, raid_leader_ids);

    Ok(())
}

/// Tests that syncing to an empty set leaves the role without permissions.
///
/// Expected: Ok(()) and no permissions remain
#[tokio::test]
async fn syncing_empty_set_detaches_everything() -> Result<(), DbErr> {
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
    let officer_ids = permission_ids_for_notes(db, &["officer"]).await?;
    grant_permissions(db, role.id, &officer_ids).await?;

    let repo = RoleRepository::new(db);
    repo.sync_permissions(role.id, &[]).await?;

    assert!(repo.get_permission_ids(role.id).await?.is_empty());

    Ok(())
}
