use super::*;

/// Tests stripping a role of all permissions.
///
/// Verifies that other roles keep their grants.
///
/// Expected: Ok(()) with only the target role emptied
#[tokio::test]
async fn detaches_only_target_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_permission_catalog()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user(db).await?;
    let guild = create_guild(db, user.id).await?;
    let target = RoleFactory::new(db, guild.id).build().await?;
    let bystander = RoleFactory::new(db, guild.id).build().await?;
    let ids = permission_ids_for_notes(db, &["officer", "raid_leader"]).await?;
    grant_permissions(db, target.id, &ids).await?;
    grant_permissions(db, bystander.id, &ids).await?;

    let repo = RoleRepository::new(db);
    repo.detach_permissions(target.id).await?;

    assert!(repo.get_permission_ids(target.id).await?.is_empty());
    assert_eq!(repo.get_permission_ids(bystander.id).await?, ids);

    Ok(())
}
